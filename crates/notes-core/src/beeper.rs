use embedded_hal::digital::StatefulOutputPin;

/// The piezo output: something that can be flipped between its two levels.
pub trait Beeper {
    type Error;

    fn toggle(&mut self) -> Result<(), Self::Error>;
}

impl<B: Beeper + ?Sized> Beeper for &mut B {
    type Error = B::Error;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        (**self).toggle()
    }
}

/// Drives a [`Beeper`] through any `embedded-hal` output pin that remembers its level.
pub struct PinBeeper<P> {
    pin: P,
}

impl<P: StatefulOutputPin> PinBeeper<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> Beeper for PinBeeper<P> {
    type Error = P::Error;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.pin.toggle()
    }
}
