pub const SWITCH_COUNT: usize = 5;

/// The trainer's push-buttons. SW1 doubles as the bootloader button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    Sw1 = 0,
    Sw2,
    Sw3,
    Sw4,
    Sw5,
}

impl Switch {
    pub const ALL: [Switch; SWITCH_COUNT] =
        [Switch::Sw1, Switch::Sw2, Switch::Sw3, Switch::Sw4, Switch::Sw5];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    JustPressed,
    Pressed,
    JustReleased,
    Released,
}

impl ButtonState {
    pub fn is_down(self) -> bool {
        matches!(self, ButtonState::JustPressed | ButtonState::Pressed)
    }
}

#[derive(Debug)]
pub struct Input {
    switches: [ButtonState; SWITCH_COUNT],
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            switches: [ButtonState::Released; SWITCH_COUNT],
        }
    }

    pub fn set_switch(&mut self, switch: Switch, state: ButtonState) {
        self.switches[switch as usize] = state;
    }

    pub fn state(&self, switch: Switch) -> ButtonState {
        self.switches[switch as usize]
    }

    pub fn is_pressed(&self, switch: Switch) -> bool {
        self.state(switch).is_down()
    }

    pub fn is_just_pressed(&self, switch: Switch) -> bool {
        self.state(switch) == ButtonState::JustPressed
    }

    pub fn any_pressed(&self) -> bool {
        self.switches.iter().any(|state| state.is_down())
    }
}

/// Turns successive level samples of one switch into a [`ButtonState`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeDetector {
    current: bool,
    previous: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            current: false,
            previous: false,
        }
    }

    pub fn update(&mut self, pressed: bool) -> ButtonState {
        self.previous = self.current;
        self.current = pressed;

        match (self.previous, self.current) {
            (false, true) => ButtonState::JustPressed,
            (true, true) => ButtonState::Pressed,
            (true, false) => ButtonState::JustReleased,
            (false, false) => ButtonState::Released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_states() {
        let mut input = Input::new();
        assert!(!input.any_pressed());

        input.set_switch(Switch::Sw4, ButtonState::JustPressed);
        assert!(input.is_pressed(Switch::Sw4));
        assert!(input.is_just_pressed(Switch::Sw4));

        input.set_switch(Switch::Sw4, ButtonState::Pressed);
        assert!(input.is_pressed(Switch::Sw4));
        assert!(!input.is_just_pressed(Switch::Sw4));

        input.set_switch(Switch::Sw4, ButtonState::JustReleased);
        assert!(!input.is_pressed(Switch::Sw4));
        assert!(!input.any_pressed());
    }

    #[test]
    fn test_switches_are_independent() {
        let mut input = Input::new();
        input.set_switch(Switch::Sw1, ButtonState::Pressed);

        for switch in &Switch::ALL[1..] {
            assert_eq!(input.state(*switch), ButtonState::Released);
        }
    }

    #[test]
    fn test_edge_detection() {
        let mut edge = EdgeDetector::new();
        let states: Vec<_> = [false, true, true, false, false]
            .into_iter()
            .map(|pressed| edge.update(pressed))
            .collect();

        assert_eq!(
            states,
            [
                ButtonState::Released,
                ButtonState::JustPressed,
                ButtonState::Pressed,
                ButtonState::JustReleased,
                ButtonState::Released,
            ]
        );
    }
}
