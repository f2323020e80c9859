//! MISB ST 1201 floating point to integer mapping.
//!
//! A real value in `[min, max]` is quantized onto an unsigned big-endian
//! integer field of 1, 2, 4 or 8 bytes. Positive infinity, negative infinity
//! and NaN are carried as reserved lead-byte sentinels.

pub mod error;

pub mod codec;
pub mod sentinel;
pub mod width;
pub mod wire;

pub use crate::codec::FpCodec;
pub use crate::error::{FpError, Result};
pub use crate::sentinel::Sentinel;
pub use crate::width::FieldWidth;
