use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::PinDriver;
use notes_core::beeper::PinBeeper;
use notes_core::consts::POLL_INTERVAL_MS;
use notes_core::delay::BusyLoop;
use notes_core::input::Input;
use notes_core::trainer::{Poll, Trainer};

use crate::peripherals::{ButtonDriver, SystemPeripherals};

mod peripherals;

fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise, some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("Notes trainer starting...");

    let peripherals = SystemPeripherals::take()?;
    let mut buttons = ButtonDriver::new(peripherals.buttons)?;
    let beeper = PinBeeper::new(PinDriver::output(peripherals.beeper)?);
    log::info!("Beeper configured on GPIO9");

    // Ets is the calibrated ROM busy-wait; BusyLoop is the uncounted one
    let mut trainer = Trainer::new(beeper, BusyLoop, Ets);
    let mut input = Input::new();

    log::info!("Polling switches every {} ms", POLL_INTERVAL_MS);
    loop {
        buttons.update();
        buttons.apply_to_input(&mut input);

        match trainer.poll(&input) {
            Ok(Poll::Reset) => {
                // SW1 is the BOOT strap, so holding it through the restart lands in the ROM bootloader
                log::info!("SW1 pressed, restarting");
                esp_idf_hal::reset::restart();
            }
            Ok(Poll::Played(notes)) => log::debug!("played {} notes", notes),
            Ok(Poll::Idle) => {}
            Err(e) => log::warn!("note aborted: {}", e),
        }

        FreeRtos::delay_ms(POLL_INTERVAL_MS);
    }
}
