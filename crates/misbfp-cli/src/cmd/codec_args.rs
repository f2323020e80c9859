use clap::Args;
use misbfp_core::FpCodec;

/// Range and field sizing shared by every subcommand.
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Lower bound of the representable range
    #[arg(long, allow_negative_numbers = true)]
    pub min: f64,

    /// Upper bound of the representable range
    #[arg(long, allow_negative_numbers = true)]
    pub max: f64,

    /// Field width in bytes (1, 2, 4 or 8)
    #[arg(long, conflicts_with = "precision", required_unless_present = "precision")]
    pub width: Option<usize>,

    /// Absolute precision; picks the smallest field that resolves it
    #[arg(long)]
    pub precision: Option<f64>,
}

impl CodecArgs {
    pub fn build(&self) -> anyhow::Result<FpCodec> {
        let codec = match (self.width, self.precision) {
            (Some(w), _) => FpCodec::new(self.min, self.max, w)?,
            (None, Some(p)) => FpCodec::with_precision(self.min, self.max, p)?,
            (None, None) => anyhow::bail!("one of --width or --precision is required"),
        };
        Ok(codec)
    }
}
