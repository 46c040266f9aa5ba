use crate::split::Block;

/// Size of the leading block-count field, in bytes.
pub const HEADER_FIELD_SIZE: usize = 4;

/// Size of each block-table entry: original_size:u32 + coded_size:u32.
pub const TABLE_ENTRY_SIZE: usize = 8;

/// Serialize blocks into the on-disk container, byte-exact layout:
///
/// ```text
/// [ block_count : u32 LE ]
/// [ original_size : u32 LE ][ coded_size : u32 LE ]   × block_count
/// [ coded payloads, concatenated in index order, no padding ]
/// ```
///
/// There is deliberately no magic number, version tag, or checksum; block
/// boundaries are recoverable only through the size table. Callers must pass
/// blocks already in index order with their coded payloads filled. Fails if
/// the block count or any coded payload overflows its u32 field — the table
/// must never be written with truncated sizes.
pub fn serialize(blocks: &[Block]) -> anyhow::Result<Vec<u8>> {
    if blocks.len() > u32::MAX as usize {
        anyhow::bail!(
            "{} blocks exceed the container's u32 block-count field",
            blocks.len()
        );
    }
    for block in blocks {
        if block.coded.len() != block.coded_size as usize {
            anyhow::bail!(
                "block {} carries {} coded bytes but records coded_size {}",
                block.index,
                block.coded.len(),
                block.coded_size
            );
        }
    }
    let payload_len: usize = blocks.iter().map(|b| b.coded.len()).sum();
    let mut out =
        Vec::with_capacity(HEADER_FIELD_SIZE + blocks.len() * TABLE_ENTRY_SIZE + payload_len);

    out.extend_from_slice(&(blocks.len() as u32).to_le_bytes());
    for block in blocks {
        out.extend_from_slice(&block.original_size.to_le_bytes());
        out.extend_from_slice(&block.coded_size.to_le_bytes());
    }
    for block in blocks {
        out.extend_from_slice(&block.coded);
    }
    Ok(out)
}

/// Parse a container into block shells: sizes and coded payloads filled,
/// raw side empty until a decompress wave runs.
///
/// Fails with a framing error when the bytes are inconsistent with the
/// header: a truncated block table, a payload region shorter than the summed
/// `coded_size` values, or trailing bytes past the last payload. With no
/// magic or checksum in the format, these length checks are the only
/// corruption detection available.
pub fn parse(bytes: &[u8]) -> anyhow::Result<Vec<Block>> {
    if bytes.len() < HEADER_FIELD_SIZE {
        anyhow::bail!(
            "container too short: {} bytes, need at least {} for the block count",
            bytes.len(),
            HEADER_FIELD_SIZE
        );
    }
    let block_count = u32::from_le_bytes(bytes[..HEADER_FIELD_SIZE].try_into()?) as usize;

    let table_end = HEADER_FIELD_SIZE + block_count * TABLE_ENTRY_SIZE;
    if bytes.len() < table_end {
        anyhow::bail!(
            "container declares {} blocks but holds only {} of {} table bytes",
            block_count,
            bytes.len() - HEADER_FIELD_SIZE,
            block_count * TABLE_ENTRY_SIZE
        );
    }

    let mut table = Vec::with_capacity(block_count);
    for i in 0..block_count {
        let at = HEADER_FIELD_SIZE + i * TABLE_ENTRY_SIZE;
        let original_size = u32::from_le_bytes(bytes[at..at + 4].try_into()?);
        let coded_size = u32::from_le_bytes(bytes[at + 4..at + 8].try_into()?);
        table.push((original_size, coded_size));
    }

    let payload = &bytes[table_end..];
    let expected: u64 = table.iter().map(|&(_, coded)| coded as u64).sum();
    if (payload.len() as u64) != expected {
        anyhow::bail!(
            "payload region is {} bytes but the block table declares {}",
            payload.len(),
            expected
        );
    }

    let mut blocks = Vec::with_capacity(block_count);
    let mut offset = 0usize;
    for (index, (original_size, coded_size)) in table.into_iter().enumerate() {
        let end = offset + coded_size as usize;
        blocks.push(Block::from_coded(
            index,
            payload[offset..end].to_vec(),
            original_size,
        ));
        offset = end;
    }
    Ok(blocks)
}
