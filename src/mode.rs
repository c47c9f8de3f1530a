//! 表示メッセージの選択モード
//!
//! ボタン押下で切り替わり、次のサイクルでどのメッセージを点滅させるかを決めます。

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// 表示メッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// "SOS"（起動時）
    #[default]
    Sos = 0,
    /// "OK"
    Ok = 1,
}

impl Mode {
    /// もう一方のモード
    pub const fn toggled(self) -> Self {
        match self {
            Self::Sos => Self::Ok,
            Self::Ok => Self::Sos,
        }
    }
}

/// 割り込みコンテキストからも安全に読み書きできるモード保持セル
///
/// 読み書きはクリティカルセクション内で行います。
pub struct ModeFlag {
    inner: Mutex<CriticalSectionRawMutex, Cell<Mode>>,
}

impl ModeFlag {
    pub const fn new(mode: Mode) -> Self {
        Self {
            inner: Mutex::new(Cell::new(mode)),
        }
    }

    /// 現在のモードを取得
    pub fn get(&self) -> Mode {
        self.inner.lock(|mode| mode.get())
    }

    /// モードを反転し、反転後のモードを返す
    pub fn toggle(&self) -> Mode {
        self.inner.lock(|cell| {
            let next = cell.get().toggled();
            cell.set(next);
            next
        })
    }
}

impl Default for ModeFlag {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
