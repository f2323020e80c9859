// crates/misbfp-cli/src/io/hex.rs

use anyhow::bail;

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse a hex string, with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if s.len() % 2 != 0 {
        bail!("odd hex length: {}", s.len());
    }

    let mut out = Vec::with_capacity(s.len() / 2);
    for i in (0..s.len()).step_by(2) {
        let pair = s.get(i..i + 2).ok_or_else(|| anyhow::anyhow!("non-ascii hex"))?;
        let b = u8::from_str_radix(pair, 16)
            .map_err(|e| anyhow::anyhow!("bad hex byte {pair:?}: {e}"))?;
        out.push(b);
    }
    Ok(out)
}
