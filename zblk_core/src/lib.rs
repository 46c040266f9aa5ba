pub mod codec;
pub mod container;
pub mod pipeline;
pub mod split;
pub mod verify;
pub mod wave;

pub use codec::Codec;
pub use container::{parse, serialize, HEADER_FIELD_SIZE, TABLE_ENTRY_SIZE};
pub use pipeline::{
    compress_file, decompress_file, CompressReport, DecompressReport, PipelineOptions,
    DEFAULT_BLOCK_SIZE,
};
pub use split::{split_blocks, Block, Outcome};
pub use verify::{verify, Verdict};
pub use wave::{run_wave, Direction};
