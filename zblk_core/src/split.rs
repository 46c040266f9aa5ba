/// Per-block result of a worker's codec call.
///
/// Transitions Pending → Success or Pending → Failure exactly once; each
/// block is touched by exactly one worker, so the transition cannot race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Success,
    Failure(String),
}

/// Unit of parallel work: one contiguous slice of the original file.
///
/// On the compress path `raw` is the input side and a worker fills `coded`;
/// on the decompress path the container parser fills `coded` (and the
/// recorded sizes) and a worker fills `raw`. After the last wave barrier the
/// pipeline reads the output side in index order and the block is dropped.
#[derive(Debug, Clone)]
pub struct Block {
    /// 0-based position in the file and in the container.
    pub index: usize,
    /// Original (uncompressed) bytes.
    pub raw: Vec<u8>,
    /// Compressed bytes.
    pub coded: Vec<u8>,
    pub original_size: u32,
    pub coded_size: u32,
    pub outcome: Outcome,
}

impl Block {
    /// A block on the compress path: raw bytes known, coded side empty.
    ///
    /// # Panics
    /// If `raw` exceeds `u32::MAX` bytes — the container's size fields are
    /// u32 and a longer block has no representation. The pipeline rejects
    /// such block sizes before any block is built.
    pub fn from_raw(index: usize, raw: Vec<u8>) -> Self {
        assert!(
            raw.len() <= u32::MAX as usize,
            "block of {} bytes overflows the u32 size field",
            raw.len()
        );
        let original_size = raw.len() as u32;
        Self {
            index,
            raw,
            coded: Vec::new(),
            original_size,
            coded_size: 0,
            outcome: Outcome::Pending,
        }
    }

    /// A block shell on the decompress path: sizes known from the block
    /// table, payload attached by the container parser.
    pub fn from_coded(index: usize, coded: Vec<u8>, original_size: u32) -> Self {
        let coded_size = coded.len() as u32;
        Self {
            index,
            raw: Vec::new(),
            coded,
            original_size,
            coded_size,
            outcome: Outcome::Pending,
        }
    }
}

/// Partition `data` into blocks of `block_size` bytes, the last block taking
/// the remainder. Produces `ceil(len / block_size)` blocks; empty input
/// produces none.
///
/// Each block owns a copy of its slice so a worker can consume it without
/// borrowing the whole file (the O(file size) footprint is a stated design
/// limit, not an accident).
///
/// # Panics
/// If `block_size` is zero or exceeds `u32::MAX`. Both are caller errors;
/// the pipeline validates its options and reports them as usage errors
/// before splitting, so this fires only on direct misuse.
pub fn split_blocks(data: &[u8], block_size: usize) -> Vec<Block> {
    assert!(block_size > 0, "block_size must be positive");
    assert!(
        block_size <= u32::MAX as usize,
        "block_size overflows the u32 size field"
    );
    data.chunks(block_size)
        .enumerate()
        .map(|(index, chunk)| Block::from_raw(index, chunk.to_vec()))
        .collect()
}
