//!
//! Parameter encoder.
//!
//! Each [`Param`] is resolved and coerced into a [`Token`], then the ordered token
//! list is packed with the standard head/tail layout: static values sit in the head,
//! dynamic values (`bytes`, `string`, `T[]` and fixed arrays of dynamic elements)
//! leave an offset in the head and put their length-prefixed data in the tail.
//!

use crate::coerce::{OverflowPolicy, coerce_address, coerce_bytes, coerce_int};
use crate::error::{AbiError, AbiResult};
use crate::types::{TypeDescriptor, WORD_SIZE, resolve};
use crate::value::{Param, ParamValue};
use tron_core::trace;
use tron_math::Uint256;

type Word = [u8; WORD_SIZE];

/// A coerced value ready to be packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A static value already laid out in one word.
    Word(Word),
    /// `bytes` and `string` payloads.
    Bytes(Vec<u8>),
    Array(Vec<Token>),
    FixedArray(Vec<Token>),
}

impl Token {
    fn is_dynamic(&self) -> bool {
        match self {
            Token::Word(_) => false,
            Token::Bytes(_) | Token::Array(_) => true,
            Token::FixedArray(tokens) => tokens.iter().any(Token::is_dynamic),
        }
    }

    fn head_size(&self) -> usize {
        match self {
            Token::FixedArray(tokens) if !self.is_dynamic() => tokens.iter().map(Token::head_size).sum(),
            _ => WORD_SIZE,
        }
    }
}

/// Stateless encoder; the policy only affects integer narrowing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Encoder {
    policy: OverflowPolicy,
}

impl Encoder {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Encodes the parameters in order. The first failing parameter aborts the whole call.
    pub fn encode(&self, params: &[Param]) -> AbiResult<Vec<u8>> {
        let tokens = params
            .iter()
            .enumerate()
            .map(|(index, param)| self.tokenize_param(param).map_err(|err| err.at(index, &param.type_name)))
            .collect::<AbiResult<Vec<_>>>()?;
        let encoded = encode_tokens(&tokens);
        trace!("encoded {} parameters into {} bytes", params.len(), encoded.len());
        Ok(encoded)
    }

    pub fn tokenize_param(&self, param: &Param) -> AbiResult<Token> {
        let ty = resolve(&param.type_name)?;
        self.tokenize(&ty, &param.value)
    }

    /// Coerces `value` into the shape `ty` requires, recursing into arrays.
    pub fn tokenize(&self, ty: &TypeDescriptor, value: &ParamValue) -> AbiResult<Token> {
        match ty {
            TypeDescriptor::Int(_) | TypeDescriptor::Uint(_) => Ok(Token::Word(coerce_int(ty, value, self.policy)?.to_be_bytes())),
            TypeDescriptor::Address => {
                let address = coerce_address(value)?;
                Ok(Token::Word(left_pad(address.as_bytes())))
            }
            TypeDescriptor::Bool => match value {
                ParamValue::Bool(b) => Ok(Token::Word(Uint256::from_u64(*b as u64).to_be_bytes())),
                other => Err(AbiError::Encoding(format!("bool expects true or false, got {}", other.kind_name()))),
            },
            TypeDescriptor::String => match value {
                ParamValue::Str(s) => Ok(Token::Bytes(s.as_bytes().to_vec())),
                other => Err(AbiError::Encoding(format!("string expects text, got {}", other.kind_name()))),
            },
            TypeDescriptor::Bytes => Ok(Token::Bytes(coerce_bytes(ty, value)?)),
            TypeDescriptor::FixedBytes(_) => Ok(Token::Word(right_pad(&coerce_bytes(ty, value)?))),
            TypeDescriptor::Array(elem) => Ok(Token::Array(self.tokenize_list(ty, elem, value)?)),
            TypeDescriptor::FixedArray(elem, _) => Ok(Token::FixedArray(self.tokenize_list(ty, elem, value)?)),
        }
    }

    fn tokenize_list(&self, ty: &TypeDescriptor, elem: &TypeDescriptor, value: &ParamValue) -> AbiResult<Vec<Token>> {
        let ParamValue::List(items) = value else {
            return Err(AbiError::Encoding(format!("{ty} expects a list, got {}", value.kind_name())));
        };
        if let TypeDescriptor::FixedArray(_, len) = ty
            && items.len() != *len
        {
            return Err(AbiError::SizeMismatch { expected: *len, actual: items.len() });
        }
        items.iter().map(|item| self.tokenize(elem, item)).collect()
    }
}

/// Encodes with the default (truncating) encoder.
pub fn encode(params: &[Param]) -> AbiResult<Vec<u8>> {
    Encoder::default().encode(params)
}

/// Packs a token sequence as a tuple: heads first, then the tails they point to.
pub fn encode_tokens(tokens: &[Token]) -> Vec<u8> {
    let head_len: usize = tokens.iter().map(Token::head_size).sum();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();
    for token in tokens {
        if token.is_dynamic() {
            head.extend_from_slice(&usize_word(head_len + tail.len()));
            encode_token(token, &mut tail);
        } else {
            encode_token(token, &mut head);
        }
    }
    head.extend_from_slice(&tail);
    head
}

fn encode_token(token: &Token, out: &mut Vec<u8>) {
    match token {
        Token::Word(word) => out.extend_from_slice(word),
        Token::Bytes(bytes) => {
            out.extend_from_slice(&usize_word(bytes.len()));
            out.extend_from_slice(bytes);
            out.resize(out.len() + padding(bytes.len()), 0);
        }
        Token::Array(tokens) => {
            out.extend_from_slice(&usize_word(tokens.len()));
            out.extend_from_slice(&encode_tokens(tokens));
        }
        Token::FixedArray(tokens) => out.extend_from_slice(&encode_tokens(tokens)),
    }
}

fn padding(len: usize) -> usize {
    (WORD_SIZE - len % WORD_SIZE) % WORD_SIZE
}

fn usize_word(n: usize) -> Word {
    Uint256::from_u64(n as u64).to_be_bytes()
}

fn left_pad(bytes: &[u8]) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - bytes.len()..].copy_from_slice(bytes);
    word
}

fn right_pad(bytes: &[u8]) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[..bytes.len()].copy_from_slice(bytes);
    word
}
