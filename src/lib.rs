//! SOS / OK 点滅ファームウェアの状態機械
//!
//! ハードウェアに依存しない部分（モード、ステートマシン、スケジューラ、タイムライン）を提供します。
//! ホスト上で `cargo test --lib` によりテストできます。
#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod config;
pub mod error;
pub mod machines;
pub mod mode;
pub mod morse;
pub mod scheduler;
pub mod state;
pub mod timeline;

pub use error::{halt, StartupError};
pub use mode::{Mode, ModeFlag};
pub use scheduler::{Cycle, TickScheduler};
pub use timeline::{PinEvent, Timeline};
