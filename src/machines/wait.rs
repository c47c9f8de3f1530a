//! WAITステートマシン
//!
//! メッセージの繰り返しの間に待機時間を挟みます。

use super::{Next, OkState, SosState, Transition};
use crate::config::UNITS_WAIT;
use crate::mode::Mode;
use crate::morse::{Pattern, Step, NO_ACTION};

/// WAIT待機アクション（7単位）
const WAIT_HOLD: Pattern = &[Step::Hold(UNITS_WAIT)];

/// WAITの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum WaitState {
    /// 初期状態
    Start = 0,
    /// 待機中（サイクルごとの終端）
    Wait = 1,
}

impl WaitState {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Start),
            1 => Some(Self::Wait),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// 次の状態。`Wait`からはモードに応じてSOSかOKの開始状態へ進む
    pub const fn next(self, mode: Mode) -> Next {
        match self {
            Self::Start => Next::Wait(Self::Wait),
            Self::Wait => match mode {
                Mode::Sos => Next::Sos(SosState::Start),
                Mode::Ok => Next::Ok(OkState::Start),
            },
        }
    }

    /// 状態に入ったときのアクション
    pub fn action(self) -> Pattern {
        match self {
            Self::Wait => WAIT_HOLD,
            Self::Start => NO_ACTION,
        }
    }
}

/// WAITの1ステップ遷移
///
/// 認識できない状態値はSOSの開始状態にフォールバックします。
pub fn tick(raw: u8, mode: Mode) -> Transition {
    let next = match WaitState::from_raw(raw) {
        Some(state) => state.next(mode),
        None => {
            warn!("WAIT: unknown state {}, falling back to SOS start", raw);
            Next::Sos(SosState::Start)
        }
    };
    Transition::to(next)
}
