use std::io::Write;

use flate2::write::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;

use zblk_core::Codec;

/// Zlib-stream block codec, the pipeline's default compressor.
///
/// Each block becomes its own complete zlib stream, so any block can be
/// decompressed knowing only its payload and recorded original size. The
/// zlib framing carries an adler-32 of the raw bytes, which is the only
/// corruption check in the whole pipeline (the container itself has none).
pub struct DeflateCodec {
    /// Compression level (0 = store, 9 = smallest).
    level: Compression,
}

impl DeflateCodec {
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl Codec for DeflateCodec {
    fn name(&self) -> &'static str {
        "deflate"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut enc = ZlibEncoder::new(Vec::new(), self.level);
        enc.write_all(raw)?;
        let coded = enc.finish()?;
        Ok(coded)
    }

    fn decompress(&self, coded: &[u8], original_size: usize) -> anyhow::Result<Vec<u8>> {
        let mut dec = ZlibDecoder::new(Vec::with_capacity(original_size));
        dec.write_all(coded)?;
        let raw = dec.finish()?;
        if raw.len() != original_size {
            anyhow::bail!(
                "decompressed to {} bytes but the block table says {}",
                raw.len(),
                original_size
            );
        }
        Ok(raw)
    }
}
