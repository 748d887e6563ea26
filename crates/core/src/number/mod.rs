use crate::{impl_from, impl_from_cast};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// JSON number, integral defaults stay `Int` so they render as `0` and not `0.0`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl_from! {
    i64, Number, Number::Int;
    f64, Number, Number::Float;
}

impl_from_cast! {
    i8 as i64, Number, Number::Int;
    i16 as i64, Number, Number::Int;
    i32 as i64, Number, Number::Int;
    u8 as i64, Number, Number::Int;
    u16 as i64, Number, Number::Int;
    u32 as i64, Number, Number::Int;
    f32 as f64, Number, Number::Float;
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Int(v) => v.hash(state),
            Number::Float(v) => v.to_bits().hash(state),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

// Int(0) and Float(0.0) render differently, so they are not equal here.
impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (&Number::Int(a), &Number::Int(b)) => a == b,
            (&Number::Float(a), &Number::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Number {
    #[inline]
    pub fn zero() -> Number {
        Number::Int(0)
    }

    #[inline]
    pub fn float_zero() -> Number {
        Number::Float(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    #[inline]
    pub fn to_int(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Float(f) => f as i64,
        }
    }

    #[inline]
    pub fn to_float(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}
