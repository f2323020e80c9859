// crates/misbfp-core/src/codec.rs

use tracing::{debug, trace};

use crate::error::{FpError, Result};
use crate::sentinel::Sentinel;
use crate::width::{log2, FieldWidth};
use crate::wire::{read_be, write_be};

/// Range-bounded float codec for a fixed field width.
///
/// All scale constants are derived once at construction; encode and decode
/// are pure functions of those constants and their input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpCodec {
    min: f64,
    max: f64,
    width: FieldWidth,
    domain_bits: f64,
    code_bits: f64,
    scale_forward: f64,
    scale_reverse: f64,
    zero_offset: f64,
}

impl FpCodec {
    /// Build a codec over `[min, max]` with a `width`-byte field.
    ///
    /// Fails with `InvalidFieldWidth` unless `width` is 1, 2, 4 or 8.
    pub fn new(min: f64, max: f64, width: usize) -> Result<FpCodec> {
        let width = FieldWidth::try_from(width)?;
        Ok(FpCodec::with_width(min, max, width))
    }

    /// Build a codec with the smallest supported field that resolves
    /// `precision` over `[min, max]`.
    pub fn with_precision(min: f64, max: f64, precision: f64) -> Result<FpCodec> {
        let width = FieldWidth::for_precision(min, max, precision)?;
        debug!(min, max, precision, width = width.bytes(), "resolved field width");
        Ok(FpCodec::with_width(min, max, width))
    }

    pub fn with_width(min: f64, max: f64, width: FieldWidth) -> FpCodec {
        let domain_bits = log2(max - min).ceil();
        let code_bits = width.code_bits() as f64;
        let scale_forward = 2f64.powf(code_bits - domain_bits);
        let scale_reverse = 2f64.powf(domain_bits - code_bits);

        // Shift the grid so that 0.0 lands on an integer code.
        let zero_offset = if min < 0.0 && max > 0.0 {
            scale_forward * min - (scale_forward * min).floor()
        } else {
            0.0
        };

        debug!(
            min,
            max,
            width = width.bytes(),
            domain_bits,
            code_bits,
            scale_forward,
            zero_offset,
            "codec constructed"
        );

        FpCodec {
            min,
            max,
            width,
            domain_bits,
            code_bits,
            scale_forward,
            scale_reverse,
            zero_offset,
        }
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn field_width(&self) -> FieldWidth {
        self.width
    }

    /// `ceil(log2(max - min))`; negative infinity for an empty range.
    #[inline]
    pub fn domain_bits(&self) -> f64 {
        self.domain_bits
    }

    #[inline]
    pub fn code_bits(&self) -> f64 {
        self.code_bits
    }

    #[inline]
    pub fn scale_forward(&self) -> f64 {
        self.scale_forward
    }

    #[inline]
    pub fn scale_reverse(&self) -> f64 {
        self.scale_reverse
    }

    #[inline]
    pub fn zero_offset(&self) -> f64 {
        self.zero_offset
    }

    /// Spacing between adjacent decoded values.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.scale_reverse
    }

    /// Encode `value` into a new field of `field_width().bytes()` bytes.
    pub fn encode(&self, value: f64) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.width.bytes()];
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    /// Encode `value` into `out`, which must be exactly one field long.
    ///
    /// Infinities and NaN are written as a lead sentinel byte followed by zeros.
    /// On error `out` is left untouched.
    pub fn encode_into(&self, value: f64, out: &mut [u8]) -> Result<()> {
        self.check_len(out.len())?;

        if let Some(s) = Sentinel::from_value(value) {
            trace!(?s, "encoding sentinel");
            out.fill(0);
            out[0] = s.lead_byte();
            return Ok(());
        }

        let code = self.encode_code(value)?;
        write_be(code, out)
    }

    /// Integer code for a finite `value` in `[min, max]`.
    ///
    /// The code is not clamped to the field: a value at the very top of the
    /// range may land one unit past `2^code_bits`, and byte packing keeps only
    /// the low field bytes.
    pub fn encode_code(&self, value: f64) -> Result<u64> {
        if !(value >= self.min && value <= self.max) {
            return Err(FpError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        let d = (self.scale_forward * (value - self.min) + self.zero_offset).floor();
        Ok(d as u64)
    }

    /// Decode one field back to a real value.
    ///
    /// Only byte 0 is inspected for a sentinel.
    pub fn decode(&self, bytes: &[u8]) -> Result<f64> {
        self.check_len(bytes.len())?;

        if let Some(s) = Sentinel::from_lead_byte(bytes[0]) {
            trace!(?s, "decoded sentinel");
            return Ok(s.value());
        }

        let code = read_be(bytes)?;
        self.decode_code(code)
    }

    /// Real value for an integer code, rejected if it falls outside `[min, max]`.
    pub fn decode_code(&self, code: u64) -> Result<f64> {
        let value = self.scale_reverse * (code as f64 - self.zero_offset) + self.min;

        if !(value >= self.min && value <= self.max) {
            return Err(FpError::DecodedOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    #[inline]
    fn check_len(&self, got: usize) -> Result<()> {
        let expected = self.width.bytes();
        if got != expected {
            return Err(FpError::LengthMismatch { expected, got });
        }
        Ok(())
    }
}
