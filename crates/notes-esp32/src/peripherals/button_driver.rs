//! Switch driver with thread-safe state management.
//!
//! GPIO sampling (`update`) is separate from state consumption
//! (`apply_to_input`), so sampling can later move to an interrupt or its own
//! thread without touching the polling loop.

use std::sync::{Arc, Mutex};

use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver, Pull};
use esp_idf_svc::sys::EspError;
use notes_core::input::{ButtonState, EdgeDetector, Input as SwitchInput, Switch, SWITCH_COUNT};

use super::ButtonPeripherals;

/// Raw GPIO levels, written by `update()` and read by `apply_to_input()`.
struct SharedSwitchStates {
    pressed: [bool; SWITCH_COUNT],
}

/// Driver for SW1..SW5.
///
/// # Switch Mapping
/// - SW1: GPIO0 (BOOT)
/// - SW2: GPIO15
/// - SW3: GPIO7
/// - SW4: GPIO8
/// - SW5: GPIO18
pub struct ButtonDriver<'a> {
    pins: [PinDriver<'a, AnyIOPin, Input>; SWITCH_COUNT],
    shared_states: Arc<Mutex<SharedSwitchStates>>,
    edge_states: [EdgeDetector; SWITCH_COUNT],
}

impl<'a> ButtonDriver<'a> {
    /// Configures every switch as an input with the internal pull-up enabled.
    pub fn new(peripherals: ButtonPeripherals) -> Result<Self, EspError> {
        let pins = [
            pull_up_input(peripherals.sw1)?,
            pull_up_input(peripherals.sw2)?,
            pull_up_input(peripherals.sw3)?,
            pull_up_input(peripherals.sw4)?,
            pull_up_input(peripherals.sw5)?,
        ];

        log::info!("ButtonDriver initialized with {} switches", SWITCH_COUNT);

        Ok(Self {
            pins,
            shared_states: Arc::new(Mutex::new(SharedSwitchStates {
                pressed: [false; SWITCH_COUNT],
            })),
            edge_states: [EdgeDetector::new(); SWITCH_COUNT],
        })
    }

    /// Samples the GPIOs. Active low: a low pin is a pressed switch.
    pub fn update(&self) {
        let mut states = self
            .shared_states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        for switch in Switch::ALL {
            states.pressed[switch as usize] = self.pins[switch as usize].is_low();
        }
    }

    /// Runs edge detection on the last sample and writes the result into `input`.
    pub fn apply_to_input(&mut self, input: &mut SwitchInput) {
        let pressed = self
            .shared_states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pressed;

        for switch in Switch::ALL {
            let idx = switch as usize;
            let state = self.edge_states[idx].update(pressed[idx]);
            if matches!(state, ButtonState::JustPressed | ButtonState::JustReleased) {
                log::debug!("{:?}: {:?}", switch, state);
            }
            input.set_switch(switch, state);
        }
    }
}

fn pull_up_input<'a>(pin: AnyIOPin) -> Result<PinDriver<'a, AnyIOPin, Input>, EspError> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}
