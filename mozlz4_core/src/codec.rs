use crate::error::Result;

/// Block compression abstraction behind the container.
///
/// Each `BlockCodec` implementation:
/// - Compresses a whole buffer into one raw block with no framing of its own.
///   The container writes the size prefix, so the codec never sees it.
/// - Decompresses a raw block given the exact uncompressed size from the
///   size prefix. Returning fewer or more bytes than `uncompressed_size` is
///   a decompression error; the container checks this too.
/// - Holds no per-call state, so one instance can serve any number of threads.
pub trait BlockCodec: Send + Sync {
    /// Human-readable codec name for logs and CLI display.
    fn name(&self) -> &'static str;

    /// Compress `raw` into a single raw block.
    fn compress_block(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a single raw block that should expand to exactly
    /// `uncompressed_size` bytes.
    fn decompress_block(&self, compressed: &[u8], uncompressed_size: usize) -> Result<Vec<u8>>;
}
