//! Timing of the reference trainer board.
//!
//! The busy-wait loops count iterations, not time, so these figures only hold
//! for the board and compiler settings they were measured on. The simulator
//! uses them to turn loop counts back into a waveform.

/// Duration of one iteration of the half-period counting loop, in nanoseconds.
pub const LOOP_UNIT_NS: u32 = 1085;

/// Loop units eaten by the pin toggle and outer-loop bookkeeping on every half-period.
pub const TOGGLE_OVERHEAD_LOOPS: u32 = 2;

/// Rate at which the polling loop samples the switches, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 10;
