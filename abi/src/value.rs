use crate::error::{AbiError, AbiResult};
use serde_json::{Map, Number, Value};
use tron_math::Uint256;

/// An input value, classified once when it enters the encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Uint(u64),
    /// Arbitrary precision integer, held as a 256-bit two's-complement word.
    Big(Uint256),
    Str(String),
    Bool(bool),
    Bytes(Vec<u8>),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Uint(_) => "uint",
            ParamValue::Big(_) => "big integer",
            ParamValue::Str(_) => "string",
            ParamValue::Bool(_) => "bool",
            ParamValue::Bytes(_) => "bytes",
            ParamValue::List(_) => "list",
        }
    }

    fn from_json_number(number: &Number) -> AbiResult<Self> {
        if let Some(n) = number.as_u64() {
            return Ok(ParamValue::Uint(n));
        }
        if let Some(n) = number.as_i64() {
            return Ok(ParamValue::Int(n));
        }
        // with arbitrary precision enabled the literal is kept verbatim
        let literal = number.to_string();
        if literal.contains(['.', 'e', 'E']) {
            return Err(AbiError::UnsupportedType { ty: "integer".to_string(), found: "fractional number" });
        }
        literal.parse::<Uint256>().map(ParamValue::Big).map_err(|err| AbiError::parse(&literal, err))
    }
}

impl TryFrom<Value> for ParamValue {
    type Error = AbiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(ParamValue::Bool(b)),
            Value::Number(n) => ParamValue::from_json_number(&n),
            Value::String(s) => Ok(ParamValue::Str(s)),
            Value::Array(items) => items.into_iter().map(ParamValue::try_from).collect::<AbiResult<Vec<_>>>().map(ParamValue::List),
            Value::Null => Err(AbiError::UnsupportedType { ty: "parameter".to_string(), found: "null" }),
            Value::Object(_) => Err(AbiError::UnsupportedType { ty: "parameter".to_string(), found: "object" }),
        }
    }
}

macro_rules! from_native {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::$variant(value as $target)
                }
            }
        )+
    };
}

from_native!(Int, i64, i8, i16, i32, i64);
from_native!(Uint, u64, u8, u16, u32, u64);

impl From<Uint256> for ParamValue {
    fn from(value: Uint256) -> Self {
        ParamValue::Big(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&[u8]> for ParamValue {
    fn from(value: &[u8]) -> Self {
        ParamValue::Bytes(value.to_vec())
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// One positional call argument: an ABI type name and its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub type_name: String,
    pub value: ParamValue,
}

impl Param {
    pub fn new(type_name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self { type_name: type_name.into(), value: value.into() }
    }

    fn from_json_entry(entry: Map<String, Value>) -> AbiResult<Self> {
        if entry.len() != 1 {
            return Err(AbiError::Format(format!("expected a single-key object, got {} keys", entry.len())));
        }
        let (type_name, value) = entry.into_iter().next().ok_or_else(|| AbiError::Format("empty object".to_string()))?;
        let value = ParamValue::try_from(value).map_err(|err| err.at(0, &type_name))?;
        Ok(Self { type_name, value })
    }
}

/// Parses `[{"<type>": <value>}, ...]` keeping the positional order.
///
/// An empty input yields an empty list.
pub fn load_from_json(json: &str) -> AbiResult<Vec<Param>> {
    if json.trim().is_empty() {
        return Ok(vec![]);
    }
    let entries: Vec<Map<String, Value>> = serde_json::from_str(json).map_err(|err| AbiError::Format(err.to_string()))?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Param::from_json_entry(entry).map_err(|err| match err {
                AbiError::Param { type_name, source, .. } => AbiError::Param { index, type_name, source },
                err => AbiError::Format(format!("entry {index}: {err}")),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preserves_order() {
        // cspell:disable
        let params = load_from_json(
            r#"[
                {"uint256": "100"},
                {"address": "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ"},
                {"bool": true},
                {"uint8": 10},
                {"int64": -3},
                {"address[2]": ["TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ", "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            params,
            vec![
                Param::new("uint256", "100"),
                Param::new("address", "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ"),
                Param::new("bool", true),
                Param::new("uint8", 10u64),
                Param::new("int64", -3i64),
                Param::new("address[2]", vec!["TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ", "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"]),
            ]
        );
        // cspell:enable
    }

    #[test]
    fn test_load_big_numbers_losslessly() {
        let params = load_from_json(r#"[{"uint256": 500000000000000000000}]"#).unwrap();
        assert_eq!(params[0].value, ParamValue::Big(Uint256::from_u128(500_000_000_000_000_000_000)));

        let params = load_from_json(r#"[{"int256": -18446744073709551617}]"#).unwrap();
        assert_eq!(params[0].value, ParamValue::Big(Uint256::from_i128(-18_446_744_073_709_551_617)));
    }

    #[test]
    fn test_load_empty() {
        assert_eq!(load_from_json("").unwrap(), vec![]);
        assert_eq!(load_from_json("  \n").unwrap(), vec![]);
        assert_eq!(load_from_json("[]").unwrap(), vec![]);
    }

    #[test]
    fn test_load_format_errors() {
        assert!(matches!(load_from_json("{"), Err(AbiError::Format(_))));
        assert!(matches!(load_from_json(r#"{"uint256": "1"}"#), Err(AbiError::Format(_))));
        assert!(matches!(load_from_json(r#"[{"uint256": "1", "bool": true}]"#), Err(AbiError::Format(_))));
        assert!(matches!(load_from_json(r#"[{}]"#), Err(AbiError::Format(_))));
        assert!(matches!(load_from_json(r#"["uint256"]"#), Err(AbiError::Format(_))));
    }

    #[test]
    fn test_load_unsupported_values() {
        let err = load_from_json(r#"[{"uint256": "1"}, {"uint256": 1.5}]"#).unwrap_err();
        assert!(matches!(&err, AbiError::Param { index: 1, type_name, .. } if type_name == "uint256"));
        assert!(matches!(err.root(), AbiError::UnsupportedType { .. }));

        let err = load_from_json(r#"[{"address": null}]"#).unwrap_err();
        assert!(matches!(err.root(), AbiError::UnsupportedType { found: "null", .. }));
    }
}
