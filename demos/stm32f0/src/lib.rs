#![no_std]

pub mod peripherals;
pub mod time_source;
