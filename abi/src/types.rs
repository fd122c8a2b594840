//!
//! Type descriptors and the type name resolver.
//!
//! Grammar: `base ('[' N? ']')*` where `base` is one of `intN`, `uintN`
//! (`N` in 8..=256, step 8, bare names meaning 256), `address`, `bool`,
//! `string`, `bytes` or `bytesN` (`N` in 1..=32). The rightmost suffix is the
//! outermost array, so `uint8[2][]` is a dynamic array of `uint8[2]`.
//!

use crate::error::{AbiError, AbiResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Size of an ABI word in bytes.
pub const WORD_SIZE: usize = 32;

pub const MAX_INT_BITS: u16 = 256;
pub const MAX_FIXED_BYTES: u8 = 32;
/// Deepest array nesting a type name may declare.
pub const MAX_ARRAY_DEPTH: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Int,
    Uint,
    Address,
    Bool,
    String,
    Bytes,
    FixedBytes,
    Array,
    FixedArray,
}

/// A resolved parameter type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Int(u16),
    Uint(u16),
    Address,
    Bool,
    String,
    Bytes,
    FixedBytes(u8),
    Array(Box<TypeDescriptor>),
    FixedArray(Box<TypeDescriptor>, usize),
}

impl TypeDescriptor {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDescriptor::Int(_) => TypeKind::Int,
            TypeDescriptor::Uint(_) => TypeKind::Uint,
            TypeDescriptor::Address => TypeKind::Address,
            TypeDescriptor::Bool => TypeKind::Bool,
            TypeDescriptor::String => TypeKind::String,
            TypeDescriptor::Bytes => TypeKind::Bytes,
            TypeDescriptor::FixedBytes(_) => TypeKind::FixedBytes,
            TypeDescriptor::Array(_) => TypeKind::Array,
            TypeDescriptor::FixedArray(..) => TypeKind::FixedArray,
        }
    }

    /// Bit width of integer types.
    pub fn bit_width(&self) -> Option<u16> {
        match self {
            TypeDescriptor::Int(bits) | TypeDescriptor::Uint(bits) => Some(*bits),
            _ => None,
        }
    }

    /// Byte size of fixed-size byte fields and addresses.
    pub fn byte_size(&self) -> Option<usize> {
        match self {
            TypeDescriptor::FixedBytes(size) => Some(*size as usize),
            TypeDescriptor::Address => Some(tron_addresses::ADDRESS_SIZE),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array(elem) | TypeDescriptor::FixedArray(elem, _) => Some(elem),
            _ => None,
        }
    }

    pub fn array_length(&self) -> Option<usize> {
        match self {
            TypeDescriptor::FixedArray(_, len) => Some(*len),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_) | TypeDescriptor::FixedArray(..))
    }
}

/// Resolves a type name such as `uint256`, `address[2]` or `bytes32`.
pub fn resolve(type_name: &str) -> AbiResult<TypeDescriptor> {
    parse_type(type_name).ok_or_else(|| AbiError::InvalidType(type_name.to_string()))
}

fn parse_type(name: &str) -> Option<TypeDescriptor> {
    // suffixes are peeled right to left, outermost first
    let mut base = name;
    let mut suffixes = Vec::new();
    while let Some(body) = base.strip_suffix(']') {
        if suffixes.len() == MAX_ARRAY_DEPTH {
            return None;
        }
        let open = body.rfind('[')?;
        let len = &body[open + 1..];
        suffixes.push(if len.is_empty() { None } else { Some(parse_size(len).filter(|&len| len > 0)?) });
        base = &body[..open];
    }

    let mut ty = parse_base(base)?;
    for len in suffixes.into_iter().rev() {
        ty = match len {
            None => TypeDescriptor::Array(Box::new(ty)),
            Some(len) => TypeDescriptor::FixedArray(Box::new(ty), len),
        };
    }
    Some(ty)
}

fn parse_base(name: &str) -> Option<TypeDescriptor> {
    match name {
        "address" => return Some(TypeDescriptor::Address),
        "bool" => return Some(TypeDescriptor::Bool),
        "string" => return Some(TypeDescriptor::String),
        "bytes" => return Some(TypeDescriptor::Bytes),
        "int" => return Some(TypeDescriptor::Int(MAX_INT_BITS)),
        "uint" => return Some(TypeDescriptor::Uint(MAX_INT_BITS)),
        _ => {}
    }

    if let Some(bits) = name.strip_prefix("uint") {
        int_bits(bits).map(TypeDescriptor::Uint)
    } else if let Some(bits) = name.strip_prefix("int") {
        int_bits(bits).map(TypeDescriptor::Int)
    } else if let Some(size) = name.strip_prefix("bytes") {
        let size = parse_size(size)?;
        (1..=MAX_FIXED_BYTES as usize).contains(&size).then_some(TypeDescriptor::FixedBytes(size as u8))
    } else {
        None
    }
}

fn int_bits(digits: &str) -> Option<u16> {
    let bits = parse_size(digits)?;
    (bits > 0 && bits <= MAX_INT_BITS as usize && bits % 8 == 0).then_some(bits as u16)
}

/// Plain decimal without sign or leading zeros.
fn parse_size(digits: &str) -> Option<usize> {
    if digits.is_empty() || (digits.starts_with('0') && digits.len() > 1) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for TypeDescriptor {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

/// Canonical type name, as used in method signatures.
impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Int(bits) => write!(f, "int{bits}"),
            TypeDescriptor::Uint(bits) => write!(f, "uint{bits}"),
            TypeDescriptor::Address => f.write_str("address"),
            TypeDescriptor::Bool => f.write_str("bool"),
            TypeDescriptor::String => f.write_str("string"),
            TypeDescriptor::Bytes => f.write_str("bytes"),
            TypeDescriptor::FixedBytes(size) => write!(f, "bytes{size}"),
            TypeDescriptor::Array(elem) => write!(f, "{elem}[]"),
            TypeDescriptor::FixedArray(elem, len) => write!(f, "{elem}[{len}]"),
        }
    }
}
