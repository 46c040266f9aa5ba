use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::codec::Codec;
use crate::container;
use crate::split::{split_blocks, Block, Outcome};
use crate::wave::{run_wave, Direction};

/// Default raw bytes per block: 1 MiB.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// Tuning knobs for one compress/decompress run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Requested worker count; clamped to the number of blocks and surfaced
    /// in the report as an adjustment, never an error.
    pub threads: usize,
    /// Raw bytes per block (compress path only; decompress recovers block
    /// boundaries from the container's table).
    pub block_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompressReport {
    pub original_size: u64,
    pub compressed_size: u64,
    pub block_count: usize,
    pub requested_threads: usize,
    pub effective_threads: usize,
    pub waves: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct DecompressReport {
    pub decompressed_size: u64,
    pub block_count: usize,
    pub requested_threads: usize,
    pub effective_threads: usize,
    pub waves: usize,
    pub elapsed: Duration,
}

/// Compress `input` into a container at `output`.
///
/// Flow: whole-file read, split into fixed-size blocks, drive worker waves
/// of at most `min(threads, blocks)` concurrent workers, then — only after
/// every wave has passed its barrier and every block reports Success —
/// serialize the container in memory and write it in one shot. A failed
/// block aborts before any output I/O, so no partial container is ever left
/// on disk.
pub fn compress_file(
    input: &Path,
    output: &Path,
    codec: &dyn Codec,
    options: &PipelineOptions,
) -> anyhow::Result<CompressReport> {
    check_options(options)?;
    let t0 = Instant::now();

    let data = std::fs::read(input).with_context(|| format!("reading input file {:?}", input))?;
    let original_size = data.len() as u64;

    let mut blocks = split_blocks(&data, options.block_size);
    drop(data);

    let (effective_threads, waves) = drive_waves(&mut blocks, codec, options.threads, Direction::Compress);
    check_outcomes(&blocks, "compress")?;

    let bytes = container::serialize(&blocks)?;
    let compressed_size = bytes.len() as u64;
    std::fs::write(output, &bytes).with_context(|| format!("writing output file {:?}", output))?;

    Ok(CompressReport {
        original_size,
        compressed_size,
        block_count: blocks.len(),
        requested_threads: options.threads,
        effective_threads,
        waves,
        elapsed: t0.elapsed(),
    })
}

/// Decompress the container at `input` back into the original bytes at
/// `output`.
///
/// The container is parsed into block shells (sizes from the table, payloads
/// attached), worker waves decompress them, and after the outcome scan the
/// raw payloads are concatenated in index order and written once.
pub fn decompress_file(
    input: &Path,
    output: &Path,
    codec: &dyn Codec,
    options: &PipelineOptions,
) -> anyhow::Result<DecompressReport> {
    check_options(options)?;
    let t0 = Instant::now();

    let bytes =
        std::fs::read(input).with_context(|| format!("reading container file {:?}", input))?;
    let mut blocks = container::parse(&bytes)
        .with_context(|| format!("parsing container file {:?}", input))?;
    drop(bytes);

    let (effective_threads, waves) = drive_waves(&mut blocks, codec, options.threads, Direction::Decompress);
    check_outcomes(&blocks, "decompress")?;

    let total: usize = blocks.iter().map(|b| b.raw.len()).sum();
    let mut out = Vec::with_capacity(total);
    for block in &blocks {
        out.extend_from_slice(&block.raw);
    }
    std::fs::write(output, &out).with_context(|| format!("writing output file {:?}", output))?;

    Ok(DecompressReport {
        decompressed_size: out.len() as u64,
        block_count: blocks.len(),
        requested_threads: options.threads,
        effective_threads,
        waves,
        elapsed: t0.elapsed(),
    })
}

fn check_options(options: &PipelineOptions) -> anyhow::Result<()> {
    if options.threads == 0 {
        anyhow::bail!("thread count must be greater than zero");
    }
    if options.block_size == 0 {
        anyhow::bail!("block size must be greater than zero");
    }
    // The container records sizes as u32; a bigger block would truncate.
    if options.block_size > u32::MAX as usize {
        anyhow::bail!(
            "block size {} exceeds the container's u32 size field",
            options.block_size
        );
    }
    Ok(())
}

/// Run successive waves over `blocks`, each wave at most `requested` blocks
/// wide (clamped to the block count). Returns (effective concurrency, wave
/// count). A zero-block file runs zero waves.
fn drive_waves(
    blocks: &mut [Block],
    codec: &dyn Codec,
    requested: usize,
    direction: Direction,
) -> (usize, usize) {
    let effective = requested.min(blocks.len());
    if effective == 0 {
        return (0, 0);
    }
    let mut waves = 0;
    for wave in blocks.chunks_mut(effective) {
        run_wave(wave, codec, direction);
        waves += 1;
    }
    (effective, waves)
}

/// Abort on the first block flagged Failure. Runs after all waves, so every
/// sibling block has finished regardless of which ones failed.
fn check_outcomes(blocks: &[Block], verb: &str) -> anyhow::Result<()> {
    for block in blocks {
        match &block.outcome {
            Outcome::Success => {}
            Outcome::Failure(msg) => {
                anyhow::bail!("failed to {} block {}: {}", verb, block.index, msg)
            }
            Outcome::Pending => {
                anyhow::bail!("block {} never ran (internal scheduling bug)", block.index)
            }
        }
    }
    Ok(())
}
