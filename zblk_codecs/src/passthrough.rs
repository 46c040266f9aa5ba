use zblk_core::Codec;

/// No-op codec: stores blocks verbatim, with no compression.
///
/// Useful for verifying the container round-trip and the wave machinery
/// independently of any real compressor.
pub struct PassThroughCodec;

impl Codec for PassThroughCodec {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, coded: &[u8], original_size: usize) -> anyhow::Result<Vec<u8>> {
        if coded.len() != original_size {
            anyhow::bail!(
                "stored block is {} bytes but the block table says {}",
                coded.len(),
                original_size
            );
        }
        Ok(coded.to_vec())
    }
}
