mod button_driver;

pub use button_driver::ButtonDriver;

use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::sys::EspError;

pub struct SystemPeripherals {
    pub buttons: ButtonPeripherals,
    pub beeper: AnyOutputPin, // GPIO9
}

/// Switch GPIO pins
/// Active low (directly connected to GND when pressed)
pub struct ButtonPeripherals {
    pub sw1: AnyIOPin, // GPIO0 (BOOT button)
    pub sw2: AnyIOPin, // GPIO15
    pub sw3: AnyIOPin, // GPIO7
    pub sw4: AnyIOPin, // GPIO8
    pub sw5: AnyIOPin, // GPIO18
}

impl SystemPeripherals {
    pub fn take() -> Result<Self, EspError> {
        let peripherals = Peripherals::take()?;

        Ok(SystemPeripherals {
            buttons: ButtonPeripherals {
                sw1: peripherals.pins.gpio0.into(),
                sw2: peripherals.pins.gpio15.into(),
                sw3: peripherals.pins.gpio7.into(),
                sw4: peripherals.pins.gpio8.into(),
                sw5: peripherals.pins.gpio18.into(),
            },
            beeper: peripherals.pins.gpio9.into(),
        })
    }
}
