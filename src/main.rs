#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod fmt;
#[cfg(target_os = "none")]
mod hardware;
#[cfg(target_os = "none")]
mod tasks;

#[cfg(all(target_os = "none", not(feature = "defmt")))]
use panic_halt as _;
#[cfg(all(target_os = "none", feature = "defmt"))]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_os = "none")]
use {
    embassy_executor::Spawner,
    hardware::Board,
    sos_blinker::{halt, state::MODE, StartupError},
    tasks::{blink_task, button_task},
};

#[cfg(target_os = "none")]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // ハードウェア初期化
    let config = hardware::create_clock_config();
    let p = embassy_stm32::init(config);

    info!("═══════════════════════════════════════════");
    info!("   SOS / OK Blinker • STM32G431VB @ 170MHz");
    info!("═══════════════════════════════════════════");

    let board = Board::new(p);

    // タスク起動に失敗した場合は回復できないため停止する
    if let Err(err) = start_tasks(spawner, board) {
        error!("Startup failed: {}", err);
        halt();
    }

    info!("Startup complete, initial message: {}", MODE.get());
}

#[cfg(target_os = "none")]
fn start_tasks(spawner: Spawner, board: Board) -> Result<(), StartupError> {
    spawner
        .spawn(blink_task(board.red, board.green))
        .map_err(|_| StartupError::TaskSpawn("blink"))?;
    spawner
        .spawn(button_task(board.mode_button, board.aux_button))
        .map_err(|_| StartupError::TaskSpawn("button"))?;
    Ok(())
}

/// ホストビルド用: 1サイクル分のタイムラインを表示する
#[cfg(not(target_os = "none"))]
fn main() {
    use sos_blinker::{Mode, TickScheduler};

    let mut scheduler = TickScheduler::new();
    for mode in [Mode::Sos, Mode::Ok] {
        let cycle = scheduler.run_tick(mode);
        println!("{:?}: {} ms", mode, cycle.total_us() / 1000);
        for event in cycle.timeline() {
            println!(
                "  {:>6} ms  {:?} {:?}",
                event.at_us() / 1000,
                event.led,
                event.level
            );
        }
    }
}
