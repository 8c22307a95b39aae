//! Per-type wire conversion for command fields.

use serde_json::Value;

use super::DecodeError;
use crate::color::ColorToken;
use crate::pool::{StringPool, TextRef};
use crate::schema::FieldKind;

/// Why a single field failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldError {
    Mismatch,
    PoolExhausted,
}

impl FieldError {
    pub(crate) fn into_decode_error(
        self,
        tool: &'static str,
        field: &'static str,
        kind: FieldKind,
    ) -> DecodeError {
        match self {
            FieldError::Mismatch => DecodeError::TypeMismatch {
                tool,
                field,
                expected: kind.expected(),
            },
            FieldError::PoolExhausted => DecodeError::PoolExhausted { tool },
        }
    }
}

/// A value type that can appear as a draw command field.
pub(crate) trait WireField: Sized {
    const KIND: FieldKind;

    fn from_wire(value: &Value, pool: &mut StringPool) -> Result<Self, FieldError>;

    fn write_wire(&self, pool: &StringPool, out: &mut String);
}

impl WireField for f32 {
    const KIND: FieldKind = FieldKind::Number;

    fn from_wire(value: &Value, _pool: &mut StringPool) -> Result<Self, FieldError> {
        number(value).ok_or(FieldError::Mismatch)
    }

    fn write_wire(&self, _pool: &StringPool, out: &mut String) {
        if self.is_finite() {
            out.push_str(&self.to_string());
        } else {
            out.push('0');
        }
    }
}

impl WireField for ColorToken {
    const KIND: FieldKind = FieldKind::Color;

    fn from_wire(value: &Value, _pool: &mut StringPool) -> Result<Self, FieldError> {
        value
            .as_str()
            .and_then(ColorToken::parse)
            .ok_or(FieldError::Mismatch)
    }

    fn write_wire(&self, _pool: &StringPool, out: &mut String) {
        out.push('"');
        out.push_str(&self.to_wire());
        out.push('"');
    }
}

/// Text is stored in the pool; the command keeps only the reference.
impl WireField for TextRef {
    const KIND: FieldKind = FieldKind::Text;

    fn from_wire(value: &Value, pool: &mut StringPool) -> Result<Self, FieldError> {
        let text = value.as_str().ok_or(FieldError::Mismatch)?;
        pool.alloc(text).ok_or(FieldError::PoolExhausted)
    }

    fn write_wire(&self, pool: &StringPool, out: &mut String) {
        write_json_string(out, pool.get(*self));
    }
}

/// Whether `value` has the shape `kind` requires, without allocating.
pub(crate) fn accepts(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Number => number(value).is_some(),
        FieldKind::Color => value.as_str().and_then(ColorToken::parse).is_some(),
        FieldKind::Text => value.is_string(),
    }
}

fn number(value: &Value) -> Option<f32> {
    let n = value.as_f64()? as f32;
    n.is_finite().then_some(n)
}

pub(crate) fn write_key(out: &mut String, key: &str) {
    out.push(',');
    write_json_string(out, key);
    out.push(':');
}

pub(crate) fn write_json_string(out: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => out.push_str("\"\""),
    }
}
