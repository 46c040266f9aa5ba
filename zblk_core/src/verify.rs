use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;

/// Comparison window: both files are streamed in chunks of this size.
const WINDOW_SIZE: usize = 64 * 1024;

/// Result of a byte-exact comparison between two files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match,
    SizeMismatch { left: u64, right: u64 },
    ContentMismatch { offset: u64 },
}

/// Compare two files for exact byte equality.
///
/// Sizes are compared first (cheap short-circuit from metadata); only on
/// equal sizes are the files streamed in fixed windows and compared
/// byte-for-byte, stopping at the first difference. The mismatch offset is
/// absolute from the start of the files. I/O failures are errors, never
/// verdicts.
pub fn verify(left: &Path, right: &Path) -> anyhow::Result<Verdict> {
    let left_file = File::open(left).with_context(|| format!("opening {:?}", left))?;
    let right_file = File::open(right).with_context(|| format!("opening {:?}", right))?;

    let left_len = left_file.metadata()?.len();
    let right_len = right_file.metadata()?.len();
    if left_len != right_len {
        return Ok(Verdict::SizeMismatch {
            left: left_len,
            right: right_len,
        });
    }

    let mut a = BufReader::new(left_file);
    let mut b = BufReader::new(right_file);
    let mut buf_a = vec![0u8; WINDOW_SIZE];
    let mut buf_b = vec![0u8; WINDOW_SIZE];
    let mut offset = 0u64;

    loop {
        let n = read_window(&mut a, &mut buf_a)?;
        if n == 0 {
            return Ok(Verdict::Match);
        }
        read_exact_window(&mut b, &mut buf_b[..n])?;

        if buf_a[..n] != buf_b[..n] {
            let delta = buf_a[..n]
                .iter()
                .zip(&buf_b[..n])
                .position(|(x, y)| x != y)
                .unwrap_or(0) as u64;
            return Ok(Verdict::ContentMismatch {
                offset: offset + delta,
            });
        }
        offset += n as u64;
    }
}

/// Fill `buf` as far as the reader allows; 0 means clean EOF.
fn read_window(reader: &mut impl Read, buf: &mut [u8]) -> anyhow::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// The sizes already matched, so the second file must yield a full window.
fn read_exact_window(reader: &mut impl Read, buf: &mut [u8]) -> anyhow::Result<()> {
    reader
        .read_exact(buf)
        .context("file shrank while being compared")?;
    Ok(())
}
