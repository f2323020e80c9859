use anyhow::Context;
use clap::Args;

use crate::cmd::codec_args::CodecArgs;
use crate::io::hex;

#[derive(Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    /// Hex fields to decode, one per value (optional 0x prefix)
    #[arg(required = true)]
    pub fields: Vec<String>,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let codec = args.codec.build()?;

    for raw in &args.fields {
        let bytes = hex::parse_hex(raw).with_context(|| format!("decode field {raw:?}"))?;
        let value = codec.decode(&bytes)?;
        println!("{value}");
    }

    eprintln!(
        "decode ok: fields={} width={}",
        args.fields.len(),
        codec.field_width()
    );
    Ok(())
}
