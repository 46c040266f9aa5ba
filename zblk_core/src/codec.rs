/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Must compress/decompress individual blocks independently — no
///   cross-block state is permitted. This is the invariant that lets one
///   worker own one block and lets blocks be reassembled in index order.
/// - Produces payloads that are NOT self-describing: the container's block
///   table records the original size, and `decompress` is handed it back.
///   An implementation must fail if its output does not come out to exactly
///   `original_size` bytes.
pub trait Codec: Send + Sync {
    /// Human-readable codec name for CLI display.
    fn name(&self) -> &'static str;

    /// Compress a single independent block.
    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>>;

    /// Decompress a single independent block.
    ///
    /// `original_size` is the exact uncompressed length recorded in the
    /// container's block table when the block was written.
    fn decompress(&self, coded: &[u8], original_size: usize) -> anyhow::Result<Vec<u8>>;
}
