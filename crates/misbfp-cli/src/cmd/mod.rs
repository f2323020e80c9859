// crates/misbfp-cli/src/cmd/mod.rs

pub mod codec_args;
pub mod decode;
pub mod encode;
pub mod inspect;
