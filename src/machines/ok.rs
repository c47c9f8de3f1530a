//! OKステートマシン
//!
//! O(緑) → K(緑・赤・緑) を順に点滅させます。

use super::{Next, Transition, WaitState};
use crate::morse::{Pattern, LETTER_K, LETTER_O, NO_ACTION};

/// OKの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OkState {
    Start = 0,
    O2 = 1,
    K = 2,
}

impl OkState {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Start),
            1 => Some(Self::O2),
            2 => Some(Self::K),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Next {
        match self {
            Self::Start => Next::Ok(Self::O2),
            Self::O2 => Next::Ok(Self::K),
            Self::K => Next::Wait(WaitState::Start),
        }
    }

    pub fn action(self) -> Pattern {
        match self {
            Self::O2 => LETTER_O,
            Self::K => LETTER_K,
            Self::Start => NO_ACTION,
        }
    }
}

/// OKの1ステップ遷移
///
/// 認識できない状態値はWAITの開始状態にフォールバックします。
pub fn tick(raw: u8) -> Transition {
    let next = match OkState::from_raw(raw) {
        Some(state) => state.next(),
        None => {
            warn!("OK: unknown state {}, falling back to WAIT start", raw);
            Next::Wait(WaitState::Start)
        }
    };
    Transition::to(next)
}
