//! Uncalibrated busy-wait used between pin toggles.
//!
//! This is deliberately separate from `embedded_hal::delay::DelayNs`: the
//! calibrated delay only serves the fixed notes in the polling loop, while
//! the tone players need a delay whose length is a runtime value.

use core::hint::black_box;

pub trait LoopDelay {
    /// Burn `loops` iterations of a counting loop. Zero returns immediately.
    fn spin(&mut self, loops: u16);
}

impl<L: LoopDelay + ?Sized> LoopDelay for &mut L {
    fn spin(&mut self, loops: u16) {
        (**self).spin(loops)
    }
}

/// Counts down from the requested value to zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct BusyLoop;

impl LoopDelay for BusyLoop {
    #[inline(never)]
    fn spin(&mut self, loops: u16) {
        let mut i = loops;
        // black_box keeps the optimizer from folding the loop away
        while black_box(i) != 0 {
            i -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_loop_terminates() {
        let mut delay = BusyLoop;
        delay.spin(0);
        delay.spin(1);
        delay.spin(u16::MAX);
    }
}
