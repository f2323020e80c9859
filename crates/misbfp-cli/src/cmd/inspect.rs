use clap::Args;

use crate::cmd::codec_args::CodecArgs;

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub codec: CodecArgs,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let c = args.codec.build()?;

    println!("min           = {}", c.min());
    println!("max           = {}", c.max());
    println!("field_width   = {}", c.field_width());
    println!("domain_bits   = {}", c.domain_bits());
    println!("code_bits     = {}", c.code_bits());
    println!("scale_forward = {:e}", c.scale_forward());
    println!("scale_reverse = {:e}", c.scale_reverse());
    println!("zero_offset   = {}", c.zero_offset());
    println!("resolution    = {:e}", c.resolution());
    Ok(())
}
