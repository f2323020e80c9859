use thiserror::Error;

pub type Result<T> = std::result::Result<T, FpError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FpError {
    #[error("invalid field width: {width} (only 1, 2, 4 and 8 bytes are valid)")]
    InvalidFieldWidth { width: i64 },

    #[error(
        "range [{min}, {max}] at precision {precision} cannot be represented in 64 bits"
    )]
    PrecisionUnrepresentable { min: f64, max: f64, precision: f64 },

    #[error("value {value} outside range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("field length mismatch: expected {expected} bytes, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("decoded value {value} outside range [{min}, {max}]")]
    DecodedOutOfRange { value: f64, min: f64, max: f64 },
}
