use crate::error::{Error, Result};

/// Magic bytes that open every jsonlz4/mozlz4 file.
/// 8 bytes: "mozLz40" followed by a single null byte.
pub const MAGIC: &[u8; 8] = b"mozLz40\x00";

/// Length of the magic in bytes.
pub const MAGIC_LEN: usize = 8;

/// Length of the little-endian `u32` uncompressed-size prefix that follows the magic.
pub const SIZE_PREFIX_LEN: usize = 4;

/// Fixed size of the container header in bytes.
///   magic[8] + uncompressed_size:u32
///   = 8 + 4 = 12
pub const HEADER_SIZE: usize = MAGIC_LEN + SIZE_PREFIX_LEN;

/// Upper bound on how much output a single LZ4 block byte can expand to.
/// Match lengths are extended in steps of 255 per input byte.
pub const MAX_EXPANSION_RATIO: usize = 255;

/// Returns true if `raw` starts with the mozlz4 magic.
pub fn is_mozlz4(raw: &[u8]) -> bool {
    raw.len() >= MAGIC_LEN && &raw[..MAGIC_LEN] == MAGIC
}

/// Check the magic at the start of `raw`, returning everything after it.
pub(crate) fn strip_magic(raw: &[u8]) -> Result<&[u8]> {
    if raw.len() < MAGIC_LEN {
        return Err(Error::HeaderMismatch(format!(
            "Invalid jsonlz4 header: input is {} bytes, need at least {}",
            raw.len(),
            MAGIC_LEN
        )));
    }
    if &raw[..MAGIC_LEN] != MAGIC {
        return Err(Error::HeaderMismatch(
            "Invalid jsonlz4 header: magic bytes do not match mozLz40\\0".to_string(),
        ));
    }
    Ok(&raw[MAGIC_LEN..])
}

// ── Header ─────────────────────────────────────────────────────────────────

/// Decoded representation of the 12-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Exact length of the payload once decompressed.
    pub uncompressed_size: u32,
}

impl ContainerHeader {
    /// Serialize to exactly `HEADER_SIZE` bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..MAGIC_LEN].copy_from_slice(MAGIC);
        buf[MAGIC_LEN..HEADER_SIZE].copy_from_slice(&self.uncompressed_size.to_le_bytes());
        buf
    }

    /// Parse the header at the start of a container.
    ///
    /// The magic is checked first; a missing or short size prefix after a
    /// valid magic is a decompression error, since the payload is what is
    /// truncated.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let payload = strip_magic(raw)?;
        let prefix: [u8; SIZE_PREFIX_LEN] = payload
            .get(..SIZE_PREFIX_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| {
                Error::Decompression(format!(
                    "payload is {} bytes, too short for the {}-byte size prefix",
                    payload.len(),
                    SIZE_PREFIX_LEN
                ))
            })?;
        Ok(Self {
            uncompressed_size: u32::from_le_bytes(prefix),
        })
    }
}

// ── Inspection ─────────────────────────────────────────────────────────────

/// Header-level summary of a container, obtained without decompressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    pub header: ContainerHeader,
    /// Length of the LZ4 block after the size prefix.
    pub block_len: usize,
    /// Length of the whole container, header included.
    pub container_len: usize,
}

impl ContainerInfo {
    /// Declared uncompressed size in bytes.
    pub fn uncompressed_size(&self) -> u64 {
        self.header.uncompressed_size as u64
    }

    /// Compression ratio (uncompressed / container).
    pub fn ratio(&self) -> f64 {
        if self.container_len == 0 {
            return 1.0;
        }
        self.uncompressed_size() as f64 / self.container_len as f64
    }
}

/// Summarize a container from its header alone.
pub fn inspect(raw: &[u8]) -> Result<ContainerInfo> {
    let header = ContainerHeader::parse(raw)?;
    Ok(ContainerInfo {
        header,
        block_len: raw.len() - HEADER_SIZE,
        container_len: raw.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bytes_layout() {
        let header = ContainerHeader {
            uncompressed_size: 0x0102_0304,
        };
        let bytes = header.to_bytes();
        assert_eq!(&bytes[..8], &[0x6D, 0x6F, 0x7A, 0x4C, 0x7A, 0x34, 0x30, 0x00]);
        assert_eq!(&bytes[8..], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(ContainerHeader::parse(&bytes).unwrap(), header);
    }

    #[test]
    fn short_input_is_header_error() {
        let err = ContainerHeader::parse(b"mozLz4").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::HeaderMismatch);
    }

    #[test]
    fn missing_size_prefix_is_decompression_error() {
        let err = ContainerHeader::parse(b"mozLz40\x00\x01\x02").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Decompression);
    }

    #[test]
    fn sniff_magic() {
        assert!(is_mozlz4(b"mozLz40\x00"));
        assert!(is_mozlz4(b"mozLz40\x00\x05\x00\x00\x00"));
        assert!(!is_mozlz4(b"mozLz40"));
        assert!(!is_mozlz4(b"mozLz41\x00\x00\x00\x00\x00"));
        // standard LZ4 frame magic
        assert!(!is_mozlz4(&[0x04, 0x22, 0x4D, 0x18, 0, 0, 0, 0]));
    }

    #[test]
    fn inspect_reports_lengths() {
        let mut raw = ContainerHeader {
            uncompressed_size: 300,
        }
        .to_bytes()
        .to_vec();
        raw.extend_from_slice(&[0u8; 18]);
        let info = inspect(&raw).unwrap();
        assert_eq!(info.uncompressed_size(), 300);
        assert_eq!(info.block_len, 18);
        assert_eq!(info.container_len, 30);
        assert!((info.ratio() - 10.0).abs() < f64::EPSILON);
    }
}
