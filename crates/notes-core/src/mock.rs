//! Recording stand-ins for the pin and both delays, sharing one event log.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::beeper::Beeper;
use crate::delay::LoopDelay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Toggle,
    Spin(u16),
    DelayNs(u32),
}

#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn toggles(&self) -> usize {
        self.0.borrow().iter().filter(|e| **e == Event::Toggle).count()
    }

    pub fn spins(&self) -> Vec<u16> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Spin(loops) => Some(*loops),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

pub struct MockBeeper {
    trace: Trace,
    fail_after: Option<usize>,
}

impl MockBeeper {
    pub fn new(trace: &Trace) -> Self {
        Self { trace: trace.clone(), fail_after: None }
    }

    /// Accept `toggles` writes, then fail every one after.
    pub fn failing_after(trace: &Trace, toggles: usize) -> Self {
        Self { trace: trace.clone(), fail_after: Some(toggles) }
    }
}

impl Beeper for MockBeeper {
    type Error = PinFault;

    fn toggle(&mut self) -> Result<(), PinFault> {
        if let Some(remaining) = self.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(PinFault);
            }
            *remaining -= 1;
        }
        self.trace.push(Event::Toggle);
        Ok(())
    }
}

pub struct MockSpin(pub Trace);

impl LoopDelay for MockSpin {
    fn spin(&mut self, loops: u16) {
        self.0.push(Event::Spin(loops));
    }
}

pub struct MockDelay(pub Trace);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }
}
