// crates/misbfp-core/src/sentinel.rs

/// Reserved lead-byte patterns for IEEE special values.
///
/// A sentinel occupies byte 0 of the field; the encoder zero-fills the rest.
/// The decoder only inspects byte 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
    PosInfinity,
    NegInfinity,
    NaN,
}

const POS_INFINITY_BYTE: u8 = 0xC8;
const NEG_INFINITY_BYTE: u8 = 0xE8;
const NAN_BYTE: u8 = 0xD0;

impl Sentinel {
    pub fn from_value(value: f64) -> Option<Sentinel> {
        if value.is_nan() {
            Some(Sentinel::NaN)
        } else if value == f64::INFINITY {
            Some(Sentinel::PosInfinity)
        } else if value == f64::NEG_INFINITY {
            Some(Sentinel::NegInfinity)
        } else {
            None
        }
    }

    pub fn from_lead_byte(byte: u8) -> Option<Sentinel> {
        match byte {
            POS_INFINITY_BYTE => Some(Sentinel::PosInfinity),
            NEG_INFINITY_BYTE => Some(Sentinel::NegInfinity),
            NAN_BYTE => Some(Sentinel::NaN),
            _ => None,
        }
    }

    #[inline]
    pub const fn lead_byte(self) -> u8 {
        match self {
            Sentinel::PosInfinity => POS_INFINITY_BYTE,
            Sentinel::NegInfinity => NEG_INFINITY_BYTE,
            Sentinel::NaN => NAN_BYTE,
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Sentinel::PosInfinity => f64::INFINITY,
            Sentinel::NegInfinity => f64::NEG_INFINITY,
            Sentinel::NaN => f64::NAN,
        }
    }
}
