#![cfg_attr(not(test), no_std)]

pub mod beeper;
pub mod consts;
pub mod delay;
pub mod error;
pub mod input;
pub mod notes;
pub mod timing;
pub mod tone;
pub mod trainer;

#[cfg(test)]
mod mock;
