//! SOSステートマシン
//!
//! S(赤) → O(緑) → S(赤) を順に点滅させます。遷移は外部入力に依存しません。

use super::{Next, Transition, WaitState};
use crate::morse::{Pattern, LETTER_O, LETTER_S, LETTER_S_FINAL, NO_ACTION};

/// SOSの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SosState {
    Start = 0,
    S1 = 1,
    O1 = 2,
    S2 = 3,
}

impl SosState {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Start),
            1 => Some(Self::S1),
            2 => Some(Self::O1),
            3 => Some(Self::S2),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// 次の状態。`S2`の後はWAITの開始状態に戻る
    pub const fn next(self) -> Next {
        match self {
            Self::Start => Next::Sos(Self::S1),
            Self::S1 => Next::Sos(Self::O1),
            Self::O1 => Next::Sos(Self::S2),
            Self::S2 => Next::Wait(WaitState::Start),
        }
    }

    pub fn action(self) -> Pattern {
        match self {
            Self::S1 => LETTER_S,
            Self::O1 => LETTER_O,
            Self::S2 => LETTER_S_FINAL,
            Self::Start => NO_ACTION,
        }
    }
}

/// SOSの1ステップ遷移
///
/// 認識できない状態値はWAITの開始状態にフォールバックします。
pub fn tick(raw: u8) -> Transition {
    let next = match SosState::from_raw(raw) {
        Some(state) => state.next(),
        None => {
            warn!("SOS: unknown state {}, falling back to WAIT start", raw);
            Next::Wait(WaitState::Start)
        }
    };
    Transition::to(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNITS_SOS;
    use crate::morse::pattern_units;

    #[test]
    fn test_visits_letters_in_order() {
        let first = tick(SosState::Start.as_raw());
        assert_eq!(first.next, Next::Sos(SosState::S1));
        let second = tick(SosState::S1.as_raw());
        assert_eq!(second.next, Next::Sos(SosState::O1));
        let third = tick(SosState::O1.as_raw());
        assert_eq!(third.next, Next::Sos(SosState::S2));
    }

    #[test]
    fn test_s2_returns_to_wait() {
        let transition = tick(SosState::S2.as_raw());
        assert_eq!(transition.next, Next::Wait(WaitState::Start));
        assert!(transition.action.is_empty());
    }

    #[test]
    fn test_letter_durations() {
        assert_eq!(pattern_units(tick(SosState::Start.as_raw()).action), 8);
        assert_eq!(pattern_units(tick(SosState::S1.as_raw()).action), 14);
        assert_eq!(pattern_units(tick(SosState::O1.as_raw()).action), 5);
    }

    #[test]
    fn test_message_matches_period() {
        let total: u32 = [SosState::S1, SosState::O1, SosState::S2]
            .iter()
            .map(|state| pattern_units(state.action()))
            .sum();
        assert_eq!(total, UNITS_SOS);
    }

    #[test]
    fn test_unknown_state_falls_back_to_wait_start() {
        for raw in 4..=u8::MAX {
            let transition = tick(raw);
            assert_eq!(transition.next, Next::Wait(WaitState::Start));
            assert!(transition.action.is_empty());
        }
    }
}
