//! ティックスケジューラ
//!
//! ティックごとにWAITを初期状態から1回実行し、続いてモードに応じて
//! SOSまたはOKを3回の明示的な呼び出しで実行します。
//! 各マシンは毎回初期状態から開始し、ティック間で状態を持ち越しません。

use crate::config::units_to_us;
use crate::machines::{ok, sos, wait, Next, OkState, SosState, Transition, WaitState};
use crate::mode::Mode;
use crate::morse::{pattern_units, Pattern, Step};
use crate::timeline::Timeline;

/// 1ティックあたりの遷移数（WAIT 1回 + メッセージ 3回）
pub const CALLS_PER_TICK: usize = 4;

/// 1ティック分の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    mode: Mode,
    transitions: [Transition; CALLS_PER_TICK],
}

impl Cycle {
    /// このサイクルを選択したモード
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// 呼び出し順の遷移先
    pub fn visited(&self) -> [Next; CALLS_PER_TICK] {
        self.transitions.map(|transition| transition.next)
    }

    /// 呼び出し順のアクション
    pub fn actions(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.transitions.iter().map(|transition| transition.action)
    }

    /// 全アクションを連結したステップ列
    pub fn steps(&self) -> impl Iterator<Item = &'static Step> + '_ {
        self.actions().flat_map(|action| action.iter())
    }

    /// ピン変化イベントのタイムライン
    pub fn timeline(&self) -> Timeline<impl Iterator<Item = &'static Step> + '_> {
        Timeline::new(self.steps())
    }

    /// サイクル全体の長さ [単位]
    pub fn total_units(&self) -> u32 {
        self.actions().map(pattern_units).sum()
    }

    /// サイクル全体の長さ [μs]
    pub fn total_us(&self) -> u64 {
        units_to_us(self.total_units())
    }
}

/// タイマー周期ごとに呼ばれるスケジューラ
pub struct TickScheduler {
    cycles: u32,
}

impl TickScheduler {
    pub const fn new() -> Self {
        Self { cycles: 0 }
    }

    /// 1ティック分を実行し、再生すべきサイクルを返す
    pub fn run_tick(&mut self, mode: Mode) -> Cycle {
        let waited = wait::tick(WaitState::Start.as_raw(), mode);

        let transitions = match mode {
            Mode::Sos => [
                waited,
                sos::tick(SosState::Start.as_raw()),
                sos::tick(SosState::S1.as_raw()),
                sos::tick(SosState::O1.as_raw()),
            ],
            Mode::Ok => [
                waited,
                ok::tick(OkState::Start.as_raw()),
                ok::tick(OkState::O2.as_raw()),
                ok::tick(OkState::K.as_raw()),
            ],
        };

        self.cycles = self.cycles.wrapping_add(1);
        let cycle = Cycle { mode, transitions };
        debug!(
            "Tick {}: mode={}, {} units",
            self.cycles,
            mode,
            cycle.total_units()
        );
        cycle
    }

    /// 実行済みティック数
    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PERIOD_OK_US, PERIOD_SOS_US, PERIOD_WAIT_US, UNITS_WAIT};
    use crate::mode::ModeFlag;
    use crate::morse::{Led, Level, LETTER_K, LETTER_O, LETTER_S, LETTER_S_FINAL};
    use crate::timeline::PinEvent;

    fn ev(at_units: u32, led: Led, level: Level) -> PinEvent {
        PinEvent { at_units, led, level }
    }

    #[test]
    fn test_sos_cycle_order() {
        let cycle = TickScheduler::new().run_tick(Mode::Sos);
        assert_eq!(
            cycle.visited(),
            [
                Next::Wait(WaitState::Wait),
                Next::Sos(SosState::S1),
                Next::Sos(SosState::O1),
                Next::Sos(SosState::S2),
            ]
        );
    }

    #[test]
    fn test_sos_cycle_plays_full_message() {
        let cycle = TickScheduler::new().run_tick(Mode::Sos);
        let actions: [Pattern; CALLS_PER_TICK] = {
            let mut iter = cycle.actions();
            core::array::from_fn(|_| iter.next().unwrap())
        };
        assert_eq!(pattern_units(actions[0]), UNITS_WAIT);
        assert_eq!(&actions[1..], &[LETTER_S, LETTER_O, LETTER_S_FINAL]);
    }

    #[test]
    fn test_ok_cycle_order() {
        let cycle = TickScheduler::new().run_tick(Mode::Ok);
        assert_eq!(
            cycle.visited(),
            [
                Next::Wait(WaitState::Wait),
                Next::Ok(OkState::O2),
                Next::Ok(OkState::K),
                Next::Wait(WaitState::Start),
            ]
        );
        let mut actions = cycle.actions().skip(1);
        assert_eq!(actions.next(), Some(LETTER_O));
        assert_eq!(actions.next(), Some(LETTER_K));
        assert_eq!(actions.next().map(<[Step]>::len), Some(0));
    }

    #[test]
    fn test_cycle_durations() {
        let mut scheduler = TickScheduler::new();
        let sos = scheduler.run_tick(Mode::Sos);
        assert_eq!(sos.total_us(), PERIOD_WAIT_US + PERIOD_SOS_US);
        let ok = scheduler.run_tick(Mode::Ok);
        assert_eq!(ok.total_us(), PERIOD_WAIT_US + PERIOD_OK_US);
    }

    #[test]
    fn test_no_state_carried_between_ticks() {
        let mut scheduler = TickScheduler::new();
        let first = scheduler.run_tick(Mode::Sos);
        let second = scheduler.run_tick(Mode::Sos);
        assert_eq!(first, second);
        assert_eq!(scheduler.cycles(), 2);
    }

    #[test]
    fn test_mode_flip_changes_next_cycle() {
        let flag = ModeFlag::new(Mode::Sos);
        let mut scheduler = TickScheduler::new();

        let first = scheduler.run_tick(flag.get());
        assert_eq!(first.mode(), Mode::Sos);

        // ボタン押下相当
        flag.toggle();
        let second = scheduler.run_tick(flag.get());
        assert_eq!(second.mode(), Mode::Ok);
        assert_eq!(second.visited()[1], Next::Ok(OkState::O2));

        flag.toggle();
        let third = scheduler.run_tick(flag.get());
        assert_eq!(third, first);
    }

    #[test]
    fn test_sos_cycle_pin_writes() {
        use crate::morse::Led::{Green, Red};
        use crate::morse::Level::{Off, On};

        let cycle = TickScheduler::new().run_tick(Mode::Sos);
        let mut timeline = cycle.timeline();
        let events: [PinEvent; 18] = core::array::from_fn(|_| timeline.next().unwrap());
        assert_eq!(timeline.next(), None);
        assert_eq!(
            events,
            [
                // S
                ev(7, Red, On),
                ev(8, Red, Off),
                ev(9, Red, On),
                ev(10, Red, Off),
                ev(11, Red, On),
                ev(12, Red, Off),
                // O
                ev(15, Green, On),
                ev(18, Green, Off),
                ev(19, Green, On),
                ev(22, Green, Off),
                ev(23, Green, On),
                ev(26, Green, Off),
                // S
                ev(29, Red, On),
                ev(30, Red, Off),
                ev(31, Red, On),
                ev(32, Red, Off),
                ev(33, Red, On),
                ev(34, Red, Off),
            ]
        );
        assert_eq!(timeline.elapsed_units(), 34);
    }

    #[test]
    fn test_ok_cycle_pin_writes() {
        use crate::morse::Led::{Green, Red};
        use crate::morse::Level::{Off, On};

        let cycle = TickScheduler::new().run_tick(Mode::Ok);
        let mut timeline = cycle.timeline();
        let events: [PinEvent; 12] = core::array::from_fn(|_| timeline.next().unwrap());
        assert_eq!(timeline.next(), None);
        assert_eq!(
            events,
            [
                // O
                ev(7, Green, On),
                ev(10, Green, Off),
                ev(11, Green, On),
                ev(14, Green, Off),
                ev(15, Green, On),
                ev(18, Green, Off),
                // K
                ev(21, Green, On),
                ev(24, Green, Off),
                ev(25, Red, On),
                ev(26, Red, Off),
                ev(27, Green, On),
                ev(30, Green, Off),
            ]
        );
        assert_eq!(timeline.elapsed_units(), 30);
    }
}
