//! ピン変化タイムライン
//!
//! ステップ列の待機を累積し、サイクル開始からのオフセット付きピンイベントに変換します。
//! 点滅タスクは各イベントの時刻までタイマーで待つだけなので、実行コンテキストをブロックしません。

use crate::config::units_to_us;
use crate::morse::{Led, Level, Step};

/// サイクル開始からのオフセット付きピン書き込み
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinEvent {
    /// サイクル開始からのオフセット [単位]
    pub at_units: u32,
    pub led: Led,
    pub level: Level,
}

impl PinEvent {
    /// サイクル開始からのオフセット [μs]
    pub fn at_us(&self) -> u64 {
        units_to_us(self.at_units)
    }
}

/// ステップ列からピンイベントを順に生成するイテレータ
pub struct Timeline<I> {
    steps: I,
    elapsed_units: u32,
}

impl<'a, I> Timeline<I>
where
    I: Iterator<Item = &'a Step>,
{
    pub fn new(steps: I) -> Self {
        Self {
            steps,
            elapsed_units: 0,
        }
    }

    /// これまでに消費したステップの累積待機時間 [単位]
    ///
    /// イテレータを最後まで消費した後はサイクル全体の長さになる。
    pub fn elapsed_units(&self) -> u32 {
        self.elapsed_units
    }
}

impl<'a, I> Iterator for Timeline<I>
where
    I: Iterator<Item = &'a Step>,
{
    type Item = PinEvent;

    fn next(&mut self) -> Option<PinEvent> {
        for step in self.steps.by_ref() {
            match *step {
                Step::Hold(units) => {
                    self.elapsed_units = self.elapsed_units.saturating_add(units);
                }
                Step::Set(led, level) => {
                    return Some(PinEvent {
                        at_units: self.elapsed_units,
                        led,
                        level,
                    });
                }
            }
        }
        None
    }
}
