//! Configuration module
//!
//! 点滅タイミングなどのコンパイル時設定を提供します。
//! 実行時に変更される設定はありません。

pub mod params;

// params.rsから主要な定数を再エクスポート
pub use params::*;
