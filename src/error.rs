//! 起動時の致命的エラー
//!
//! 起動に失敗した場合は回復せず、`halt`で停止します。

use core::fmt;

/// 起動処理のエラー型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// タスクの起動失敗（タスク名）
    TaskSpawn(&'static str),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskSpawn(task) => write!(f, "failed to spawn {} task", task),
        }
    }
}

/// 無限ループで停止する
///
/// LEDはそれ以上変化しないため、点滅の停止が起動失敗を示します。
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
