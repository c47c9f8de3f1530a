//! ハードウェア初期化モジュール
//!
//! クロック設定とLED・ボタンのピン設定を集約します。

use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
    Config, Peripherals,
};

/// RCCクロック設定を初期化
///
/// HSI → PLL（÷4 × 85 ÷ 2）で170MHz生成
///
/// 点滅タイミングは32.768kHzの時間ドライバで決まり、システムクロックには依存しない。
pub fn create_clock_config() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::{Pll, PllMul, PllPreDiv, PllRDiv, PllSource, Sysclk};

        config.rcc.hsi = true;
        config.rcc.pll = Some(Pll {
            source: PllSource::HSI,
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL85,
            divp: None,
            divq: None,
            divr: Some(PllRDiv::DIV2),
        });
        config.rcc.sys = Sysclk::PLL1_R; // システムクロックをPLLに設定
    }
    config
}

/// 点滅に使うペリフェラル一式
pub struct Board {
    /// LED0（赤）PC13
    pub red: Output<'static>,
    /// LED1（緑）PC14
    pub green: Output<'static>,
    /// モード切替ボタン PC11（立ち下がりエッジ）
    pub mode_button: ExtiInput<'static>,
    /// 補助ボタン PC10（モードには影響しない）
    pub aux_button: ExtiInput<'static>,
}

impl Board {
    /// LEDを消灯状態で、ボタンをプルアップ入力で初期化
    pub fn new(p: Peripherals) -> Self {
        let red = Output::new(p.PC13, Level::Low, Speed::Low);
        let green = Output::new(p.PC14, Level::Low, Speed::Low);
        let mode_button = ExtiInput::new(p.PC11, p.EXTI11, Pull::Up);
        let aux_button = ExtiInput::new(p.PC10, p.EXTI10, Pull::Up);

        info!("Board initialized: LED0=PC13, LED1=PC14, BTN_MODE=PC11, BTN_AUX=PC10");

        Self {
            red,
            green,
            mode_button,
            aux_button,
        }
    }
}
