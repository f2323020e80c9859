use clap::Args;

use crate::cmd::codec_args::CodecArgs;
use crate::io::hex;

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    /// Values to encode (`inf`, `-inf` and `nan` are accepted)
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let codec = args.codec.build()?;

    for raw in &args.values {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("bad value {raw:?}: {e}"))?;
        let field = codec.encode(value)?;
        println!("{}", hex::to_hex(&field));
    }

    eprintln!(
        "encode ok: values={} width={}",
        args.values.len(),
        codec.field_width()
    );
    Ok(())
}
