//!
//! Contract call encoding: type resolution, input coercion, head/tail packing
//! and selector-prefixed call payloads.
//!

pub mod coerce;
pub mod encoder;
pub mod error;
pub mod method;
pub mod types;
pub mod value;

pub use coerce::OverflowPolicy;
pub use encoder::{Encoder, Token, encode};
pub use error::{AbiError, AbiResult};
pub use method::{pack, pack_json, pack_with, selector, signature_of};
pub use types::{TypeDescriptor, TypeKind, WORD_SIZE, resolve};
pub use value::{Param, ParamValue, load_from_json};
