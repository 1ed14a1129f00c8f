use lz4_flex::block::{compress, decompress};

use crate::codec::BlockCodec;
use crate::error::{Error, Result};

/// LZ4 block codec, the only payload compression mozlz4 files use.
///
/// Backed by `lz4_flex` with its safe decoder, so a hostile block can at
/// worst produce an error, never an out-of-bounds write.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz4Codec;

impl BlockCodec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress_block(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(compress(raw))
    }

    fn decompress_block(&self, compressed: &[u8], uncompressed_size: usize) -> Result<Vec<u8>> {
        // lz4_flex treats the size as a minimum, so a short block would
        // otherwise slip through.
        let raw = decompress(compressed, uncompressed_size)
            .map_err(|e| Error::Decompression(format!("lz4 decompress error: {}", e)))?;
        if raw.len() != uncompressed_size {
            return Err(Error::Decompression(format!(
                "block decompressed to {} bytes but size prefix says {}",
                raw.len(),
                uncompressed_size
            )));
        }
        Ok(raw)
    }
}
