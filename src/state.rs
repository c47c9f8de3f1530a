//! グローバル共有状態管理
//!
//! ボタンタスクと点滅タスクの間で共有される状態です。

use crate::mode::{Mode, ModeFlag};

/// 表示モード（起動時はSOS）
/// ボタン押下でのみ変更され、点滅タスクはサイクル開始時に読み取る
pub static MODE: ModeFlag = ModeFlag::new(Mode::Sos);
