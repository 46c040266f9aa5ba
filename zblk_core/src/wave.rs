use crate::codec::Codec;
use crate::split::{Block, Outcome};

/// Which way a wave pushes its blocks through the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

/// Run one wave: one worker thread per block in `blocks`, all in parallel,
/// returning only once every worker has finished (the scope's implicit join
/// is the wave barrier).
///
/// The caller bounds concurrency by the length of the slice it passes in;
/// the pipeline feeds waves of at most `min(requested_threads, num_blocks)`
/// blocks. Each worker holds the only `&mut` to its block, so block state is
/// race-free by construction, and a codec failure is recorded on that block
/// alone — sibling workers run to completion. Workers never touch the
/// console; the pipeline reports failures after the barrier.
pub fn run_wave(blocks: &mut [Block], codec: &dyn Codec, direction: Direction) {
    std::thread::scope(|scope| {
        for block in blocks.iter_mut() {
            scope.spawn(move || run_block(block, codec, direction));
        }
    });
}

fn run_block(block: &mut Block, codec: &dyn Codec, direction: Direction) {
    match direction {
        Direction::Compress => match codec.compress(&block.raw) {
            // Even with block_size capped at u32::MAX, a codec may expand
            // its input past the size field; that is a block failure, not a
            // truncated table entry.
            Ok(coded) => match u32::try_from(coded.len()) {
                Ok(coded_size) => {
                    block.coded_size = coded_size;
                    block.coded = coded;
                    block.outcome = Outcome::Success;
                }
                Err(_) => {
                    block.outcome = Outcome::Failure(format!(
                        "coded output is {} bytes, exceeding the container's u32 size field",
                        coded.len()
                    ))
                }
            },
            Err(e) => block.outcome = Outcome::Failure(e.to_string()),
        },
        Direction::Decompress => {
            match codec.decompress(&block.coded, block.original_size as usize) {
                Ok(raw) => {
                    block.raw = raw;
                    block.outcome = Outcome::Success;
                }
                Err(e) => block.outcome = Outcome::Failure(e.to_string()),
            }
        }
    }
}
