//! 点滅タイミングとボタン処理の設定パラメータ
//!
//! すべての周期は基本単位（500ms）の倍数です。

/// ティック周期 [μs]（500ms）。点滅パターンの基本単位も兼ねる
pub const TICK_PERIOD_US: u64 = 500_000;

/// WAIT待機時間 [μs]（3.5s = 7単位）
pub const PERIOD_WAIT_US: u64 = 3_500_000;

/// SOSメッセージ全体の時間 [μs]（13.5s = 27単位）
pub const PERIOD_SOS_US: u64 = 13_500_000;

/// OKメッセージ全体の時間 [μs]（11.5s = 23単位）
pub const PERIOD_OK_US: u64 = 11_500_000;

/// WAIT待機時間 [単位]
pub const UNITS_WAIT: u32 = us_to_units(PERIOD_WAIT_US);

/// SOSメッセージ時間 [単位]
pub const UNITS_SOS: u32 = us_to_units(PERIOD_SOS_US);

/// OKメッセージ時間 [単位]
pub const UNITS_OK: u32 = us_to_units(PERIOD_OK_US);

/// ボタンのチャタリング除去時間 [ms]
pub const BUTTON_DEBOUNCE_MS: u64 = 10;

/// 単位数をマイクロ秒に変換
pub const fn units_to_us(units: u32) -> u64 {
    units as u64 * TICK_PERIOD_US
}

/// マイクロ秒を単位数に変換（端数切り捨て）
pub const fn us_to_units(us: u64) -> u32 {
    (us / TICK_PERIOD_US) as u32
}
