//! タスクモジュール
//!
//! 各タスクの実装を分離して管理します。

pub mod blink;
pub mod button;

// タスク関数を再エクスポート
pub use blink::blink_task;
pub use button::button_task;
