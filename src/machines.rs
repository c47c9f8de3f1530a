//! 点滅ステートマシン
//!
//! WAIT / SOS / OK の3つのステートマシンで構成されます。
//! 各マシンは「現在の状態 → 次の状態」の1ステップ遷移関数と、
//! 遷移先の状態に入ったときに実行するアクション（`Pattern`）を持ちます。
//! 認識できない状態値はエラーにせず、各マシンの既定の遷移先にフォールバックします。

pub mod ok;
pub mod sos;
pub mod wait;

pub use ok::OkState;
pub use sos::SosState;
pub use wait::WaitState;

use crate::morse::Pattern;

/// 遷移先の状態
///
/// 遷移は他のマシンへ移ることがあるため、マシンごとに区別します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Next {
    Wait(WaitState),
    Sos(SosState),
    Ok(OkState),
}

impl Next {
    /// 遷移先の状態に入ったときのアクション
    pub fn action(self) -> Pattern {
        match self {
            Self::Wait(state) => state.action(),
            Self::Sos(state) => state.action(),
            Self::Ok(state) => state.action(),
        }
    }
}

/// 1回の遷移結果（遷移先とそのアクション）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Next,
    pub action: Pattern,
}

impl Transition {
    pub fn to(next: Next) -> Self {
        Self {
            next,
            action: next.action(),
        }
    }
}
