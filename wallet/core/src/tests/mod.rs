//!
//! Utilities and helpers for unit testing.
//!

pub use rpc_core_mock::*;

mod wallet;
