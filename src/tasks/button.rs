//! ボタンタスク
//!
//! モード切替ボタンの押下でSOS/OKを切り替えます。
//! 切り替えは再生中のサイクルには影響せず、次のサイクルから反映されます。

use embassy_futures::select::{select, Either};
use embassy_stm32::exti::ExtiInput;
use embassy_time::{Duration, Timer};

use sos_blinker::config::BUTTON_DEBOUNCE_MS;
use sos_blinker::state::MODE;

/// ボタンタスク - 立ち下がりエッジでモードを反転
#[embassy_executor::task]
pub async fn button_task(mut mode_button: ExtiInput<'static>, mut aux_button: ExtiInput<'static>) {
    info!("Button task started");

    loop {
        match select(
            mode_button.wait_for_falling_edge(),
            aux_button.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => {
                // チャタリング除去
                Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
                if mode_button.is_low() {
                    let mode = MODE.toggle();
                    info!("Mode button pressed, next message: {}", mode);
                }
                mode_button.wait_for_high().await;
            }
            // 解放待ちをしないので、押し続けている間もモードボタンを受け付ける
            Either::Second(()) => debug!("Aux button pressed (no action)"),
        }
    }
}
