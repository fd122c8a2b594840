extern crate self as tron_core;

pub mod log;
