//! 点滅タスク
//!
//! 500msティックごとにスケジューラを実行し、得られたサイクルをLEDで再生します。
//! 各ピン変化はサイクル開始からの絶対時刻まで待ってから行うため、
//! 待機中もボタンタスクは動作します。

use embassy_stm32::gpio::Output;
use embassy_time::{Duration, Instant, Ticker, Timer};

use sos_blinker::config::TICK_PERIOD_US;
use sos_blinker::morse::{Led, Level};
use sos_blinker::state::MODE;
use sos_blinker::TickScheduler;

/// 点滅タスク - ティック駆動でSOS/OKを再生
#[embassy_executor::task]
pub async fn blink_task(mut red: Output<'static>, mut green: Output<'static>) {
    info!("Blink task started");

    let mut scheduler = TickScheduler::new();
    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US));

    loop {
        ticker.next().await;

        // モードはサイクル開始時にのみ読み取る
        let mode = MODE.get();
        let cycle = scheduler.run_tick(mode);
        info!(
            "Cycle {}: {} ({} ms)",
            scheduler.cycles(),
            mode,
            cycle.total_us() / 1000
        );

        red.set_low();
        green.set_low();

        let start = Instant::now();
        for event in cycle.timeline() {
            Timer::at(start + Duration::from_micros(event.at_us())).await;
            let pin = match event.led {
                Led::Red => &mut red,
                Led::Green => &mut green,
            };
            match event.level {
                Level::On => pin.set_high(),
                Level::Off => pin.set_low(),
            }
            trace!("{} ms: {} -> {}", event.at_us() / 1000, event.led, event.level);
        }
        Timer::at(start + Duration::from_micros(cycle.total_us())).await;

        // 取りこぼしたティックをまとめて消化しないよう、次のティックはサイクル終了から数える
        ticker.reset();
    }
}
