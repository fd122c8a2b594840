//!
//! Conversions from loosely typed [`ParamValue`](crate::ParamValue) inputs into
//! the exact representation a resolved type requires.
//!

mod address;
mod bytes;
mod int;

pub use address::coerce_address;
pub use bytes::{coerce_bytes, decode_text_bytes};
pub use int::{OverflowPolicy, coerce_int};
