//! モールス点滅の基本要素
//!
//! 各文字はピン書き込みと待機（基本単位の倍数）の列として定義します。
//! 待機はブロッキングではなく、タイムラインで将来のイベントに変換されます。

/// 出力LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// LED0（赤）
    Red,
    /// LED1（緑）
    Green,
}

/// LEDの点灯状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Off,
    On,
}

/// 点滅プログラムの1ステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// LEDの状態を設定
    Set(Led, Level),
    /// 基本単位 × n だけ待機
    Hold(u32),
}

/// 状態のアクションとして実行されるステップ列
pub type Pattern = &'static [Step];

/// 何もしないアクション
pub const NO_ACTION: Pattern = &[];

const fn on(led: Led) -> Step {
    Step::Set(led, Level::On)
}

const fn off(led: Led) -> Step {
    Step::Set(led, Level::Off)
}

/// "S"（赤、短点×3）+ 文字間ギャップ: 8単位
pub const LETTER_S: Pattern = &[
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
    Step::Hold(1),
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
    Step::Hold(1),
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
    Step::Hold(3),
];

/// 末尾の"S"（赤、短点×3、ギャップなし）: 5単位
pub const LETTER_S_FINAL: Pattern = &[
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
    Step::Hold(1),
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
    Step::Hold(1),
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
];

/// "O"（緑、長点×3）+ 文字間ギャップ: 14単位
pub const LETTER_O: Pattern = &[
    on(Led::Green),
    Step::Hold(3),
    off(Led::Green),
    Step::Hold(1),
    on(Led::Green),
    Step::Hold(3),
    off(Led::Green),
    Step::Hold(1),
    on(Led::Green),
    Step::Hold(3),
    off(Led::Green),
    Step::Hold(3),
];

/// "K"（長点=緑、短点=赤、長点=緑）: 9単位
pub const LETTER_K: Pattern = &[
    on(Led::Green),
    Step::Hold(3),
    off(Led::Green),
    Step::Hold(1),
    on(Led::Red),
    Step::Hold(1),
    off(Led::Red),
    Step::Hold(1),
    on(Led::Green),
    Step::Hold(3),
    off(Led::Green),
];

/// パターンの合計待機時間 [単位]
pub const fn pattern_units(pattern: Pattern) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < pattern.len() {
        if let Step::Hold(units) = pattern[i] {
            total += units;
        }
        i += 1;
    }
    total
}
