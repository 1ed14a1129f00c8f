use tracing::debug;

use crate::codec::BlockCodec;
use crate::error::{Error, Result};
use crate::format::{ContainerHeader, HEADER_SIZE, MAX_EXPANSION_RATIO, SIZE_PREFIX_LEN};
use crate::lz4_codec::Lz4Codec;

/// Decode a mozlz4 container into its uncompressed payload.
///
/// # Layout read
/// ```text
/// [MAGIC: "mozLz40\0"]                    ← checked before anything else
/// [SIZE: u32 LE]                          ← exact length of the output
/// [LZ4 BLOCK]                             ← decompresses to SIZE bytes
/// ```
pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
    decode_with(&Lz4Codec, raw)
}

/// Encode `data` into a mozlz4 container. Empty input is valid.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    encode_with(&Lz4Codec, data)
}

/// [`decode`] with an explicit block codec.
pub fn decode_with(codec: &dyn BlockCodec, raw: &[u8]) -> Result<Vec<u8>> {
    // Magic is checked before the size prefix is read.
    let header = ContainerHeader::parse(raw)?;
    let block = &raw[HEADER_SIZE..];
    let size = header.uncompressed_size as usize;

    if size > block.len().saturating_mul(MAX_EXPANSION_RATIO) {
        return Err(Error::Decompression(format!(
            "size prefix declares {} bytes, more than a {}-byte block can expand to",
            size,
            block.len()
        )));
    }

    let out = codec.decompress_block(block, size)?;
    if out.len() != size {
        return Err(Error::Decompression(format!(
            "decompressed {} bytes but size prefix says {}",
            out.len(),
            size
        )));
    }

    debug!(
        codec = codec.name(),
        container_len = raw.len(),
        uncompressed_len = out.len(),
        "decoded mozlz4 container"
    );
    Ok(out)
}

/// [`encode`] with an explicit block codec.
pub fn encode_with(codec: &dyn BlockCodec, data: &[u8]) -> Result<Vec<u8>> {
    let uncompressed_size = u32::try_from(data.len()).map_err(|_| {
        Error::Compression(format!(
            "input is {} bytes, larger than the {}-byte size prefix can describe",
            data.len(),
            SIZE_PREFIX_LEN
        ))
    })?;

    let block = codec.compress_block(data)?;
    let header = ContainerHeader { uncompressed_size };

    let mut out = Vec::with_capacity(HEADER_SIZE + block.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&block);

    debug!(
        codec = codec.name(),
        uncompressed_len = data.len(),
        container_len = out.len(),
        "encoded mozlz4 container"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::MAGIC;
    use crate::ErrorKind;

    #[test]
    fn empty_payload_roundtrip() {
        let container = encode(b"").unwrap();
        assert_eq!(&container[..8], MAGIC);
        assert_eq!(&container[8..12], &[0, 0, 0, 0]);
        assert!(decode(&container).unwrap().is_empty());
    }

    #[test]
    fn small_json_roundtrip() {
        let container = encode(br#"{"a":1}"#).unwrap();
        assert_eq!(&container[8..12], &7u32.to_le_bytes());
        assert_eq!(decode(&container).unwrap(), br#"{"a":1}"#);
    }

    #[test]
    fn implausible_size_rejected_before_decompressing() {
        let mut container = encode(b"abc").unwrap();
        container[8..12].copy_from_slice(&u32::MAX.to_le_bytes());
        let err = decode(&container).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decompression);
        assert!(err.to_string().contains("expand"), "got: {err}");
    }

    #[test]
    fn lz4_frame_is_not_a_container() {
        // LZ4 frame magic followed by junk
        let frame = [0x04, 0x22, 0x4D, 0x18, 0x64, 0x40, 0xA7, 0x00, 0x00];
        assert_eq!(decode(&frame).unwrap_err().kind(), ErrorKind::HeaderMismatch);
    }
}
