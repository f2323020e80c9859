// crates/misbfp-core/src/width.rs

use crate::error::{FpError, Result};

/// Byte width of an encoded field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldWidth {
    One,
    Two,
    Four,
    Eight,
}

impl FieldWidth {
    pub const ALL: [FieldWidth; 4] = [
        FieldWidth::One,
        FieldWidth::Two,
        FieldWidth::Four,
        FieldWidth::Eight,
    ];

    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            FieldWidth::One => 1,
            FieldWidth::Two => 2,
            FieldWidth::Four => 4,
            FieldWidth::Eight => 8,
        }
    }

    /// Bits used for magnitude scaling: `8 * bytes - 1`.
    #[inline]
    pub const fn code_bits(self) -> u32 {
        8 * self.bytes() as u32 - 1
    }

    /// Smallest supported width that holds `precision` over `[min, max]`.
    ///
    /// `bits = ceil(log2((max - min) / precision) + 1)`, `len = ceil(bits / 8)`.
    /// Lengths up to 2 are used as-is, 3..=4 round up to 4 and 5..=8 to 8.
    /// A precision coarser than the range yields a length below 1, which is
    /// rejected like any other invalid width.
    pub fn for_precision(min: f64, max: f64, precision: f64) -> Result<FieldWidth> {
        let bits = (log2((max - min) / precision) + 1.0).ceil();
        let len = (bits / 8.0).ceil();

        if len <= 2.0 {
            return FieldWidth::from_len(len as i64);
        }
        if len <= 4.0 {
            return Ok(FieldWidth::Four);
        }
        if len <= 8.0 {
            return Ok(FieldWidth::Eight);
        }

        Err(FpError::PrecisionUnrepresentable {
            min,
            max,
            precision,
        })
    }

    fn from_len(len: i64) -> Result<FieldWidth> {
        match len {
            1 => Ok(FieldWidth::One),
            2 => Ok(FieldWidth::Two),
            4 => Ok(FieldWidth::Four),
            8 => Ok(FieldWidth::Eight),
            width => Err(FpError::InvalidFieldWidth { width }),
        }
    }
}

impl TryFrom<usize> for FieldWidth {
    type Error = FpError;

    fn try_from(len: usize) -> Result<FieldWidth> {
        FieldWidth::from_len(i64::try_from(len).unwrap_or(i64::MAX))
    }
}

impl std::fmt::Display for FieldWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// `ln(x) / ln(2)`.
#[inline]
pub(crate) fn log2(x: f64) -> f64 {
    x.ln() / std::f64::consts::LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_bits_reserve_one_bit() {
        assert_eq!(FieldWidth::One.code_bits(), 7);
        assert_eq!(FieldWidth::Two.code_bits(), 15);
        assert_eq!(FieldWidth::Four.code_bits(), 31);
        assert_eq!(FieldWidth::Eight.code_bits(), 63);
    }

    #[test]
    fn try_from_accepts_only_supported_lengths() {
        for w in FieldWidth::ALL {
            assert_eq!(FieldWidth::try_from(w.bytes()).unwrap(), w);
        }
        for bad in [0usize, 3, 5, 6, 7, 9, 16] {
            assert_eq!(
                FieldWidth::try_from(bad).unwrap_err(),
                FpError::InvalidFieldWidth { width: bad as i64 }
            );
        }
    }

    #[test]
    fn log2_of_powers() {
        assert_eq!(log2(1.0), 0.0);
        assert!((log2(1024.0) - 10.0).abs() < 1e-12);
    }
}
