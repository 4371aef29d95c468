//! Virtual-time stand-ins for the board: the beeper pin and both delays
//! advance one shared clock instead of burning real time.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use notes_core::beeper::Beeper;
use notes_core::consts::{LOOP_UNIT_NS, TOGGLE_OVERHEAD_LOOPS};
use notes_core::delay::LoopDelay;

use crate::wave::Recording;

#[derive(Default)]
struct Timeline {
    now_ns: u64,
    start_ns: u64,
    edges_ns: Vec<u64>,
}

impl Timeline {
    fn take(&mut self) -> Recording {
        let start = self.start_ns;
        let edges = self.edges_ns.drain(..).map(|edge| edge - start).collect();
        let recording = Recording::new(edges, self.now_ns - self.start_ns);
        self.start_ns = self.now_ns;
        recording
    }
}

/// Hands out pin and delay handles sharing one virtual clock.
#[derive(Clone, Default)]
pub struct SimBoard {
    timeline: Rc<RefCell<Timeline>>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self) -> SimPin {
        SimPin(Rc::clone(&self.timeline))
    }

    pub fn spin_loop(&self) -> SimLoop {
        SimLoop(Rc::clone(&self.timeline))
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(Rc::clone(&self.timeline))
    }

    /// Everything the pin did since the last call.
    pub fn take_recording(&self) -> Recording {
        self.timeline.borrow_mut().take()
    }
}

pub struct SimPin(Rc<RefCell<Timeline>>);

impl Beeper for SimPin {
    type Error = Infallible;

    fn toggle(&mut self) -> Result<(), Infallible> {
        let mut timeline = self.0.borrow_mut();
        let now = timeline.now_ns;
        timeline.edges_ns.push(now);
        Ok(())
    }
}

/// Costs what the counting loop costs on the reference board, toggle overhead included.
pub struct SimLoop(Rc<RefCell<Timeline>>);

impl LoopDelay for SimLoop {
    fn spin(&mut self, loops: u16) {
        let units = u64::from(loops) + u64::from(TOGGLE_OVERHEAD_LOOPS);
        self.0.borrow_mut().now_ns += units * u64::from(LOOP_UNIT_NS);
    }
}

pub struct SimDelay(Rc<RefCell<Timeline>>);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().now_ns += u64::from(ns);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use notes_core::input::{ButtonState, Input, Switch};
    use notes_core::tone::TonePlayer;
    use notes_core::trainer::{Poll, Trainer};

    use super::*;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= expected * tolerance,
            "{actual} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn test_formula_note_sounds_like_c5() {
        let board = SimBoard::new();
        let mut player = TonePlayer::new(board.pin(), board.spin_loop());
        player.play_freq(523, 500).unwrap();

        let recording = board.take_recording();
        assert_eq!(recording.toggles(), 520);
        assert_close(recording.duration().as_secs_f32(), 0.5, 0.01);
        assert_close(recording.estimated_frequency().unwrap(), 523.0, 0.01);
    }

    #[test]
    fn test_three_c5_buttons_agree() {
        let board = SimBoard::new();
        let mut trainer = Trainer::new(board.pin(), board.spin_loop(), board.delay());

        let mut durations = Vec::new();
        for switch in [Switch::Sw2, Switch::Sw4, Switch::Sw5] {
            let mut input = Input::new();
            input.set_switch(switch, ButtonState::JustPressed);
            assert_eq!(trainer.poll(&input).unwrap(), Poll::Played(1));

            let recording = board.take_recording();
            assert_close(recording.estimated_frequency().unwrap(), 523.0, 0.01);
            durations.push(recording.duration());
        }

        for duration in durations {
            assert_close(duration.as_secs_f32(), 0.5, 0.01);
        }
    }

    #[test]
    fn test_c6_button_is_an_octave_up() {
        let board = SimBoard::new();
        let mut trainer = Trainer::new(board.pin(), board.spin_loop(), board.delay());
        let mut input = Input::new();
        input.set_switch(Switch::Sw3, ButtonState::Pressed);
        trainer.poll(&input).unwrap();

        let recording = board.take_recording();
        assert_close(recording.estimated_frequency().unwrap(), 1046.0, 0.01);
        // same cycle count as SW2, so half as long
        assert_eq!(recording.duration(), Duration::from_micros(478 * 523));
    }

    #[test]
    fn test_recordings_do_not_overlap() {
        let board = SimBoard::new();
        let mut player = TonePlayer::new(board.pin(), board.spin_loop());

        player.play_sound(100, 3).unwrap();
        let first = board.take_recording();
        player.play_sound(100, 2).unwrap();
        let second = board.take_recording();

        // each spin costs (100 + 2) loop units of 1085 ns
        let half_period = 102 * 1085;
        assert_eq!(first.toggles(), 3);
        assert_eq!(second, Recording::new(vec![0, half_period], 2 * half_period));
        assert!(board.take_recording().is_silent());
    }
}
