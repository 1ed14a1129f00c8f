//! Codec for Mozilla's jsonlz4/mozlz4 container.
//!
//! Firefox and Thunderbird store profile JSON (sessionstore, search engines,
//! add-on state) as `mozLz40\0`, a little-endian `u32` uncompressed size, and
//! a raw LZ4 block. This is not the standard LZ4 frame format; `lz4 -d` will
//! not read these files.

pub mod codec;
pub mod container;
pub mod error;
pub mod format;
pub mod json;
pub mod lz4_codec;

pub use codec::BlockCodec;
pub use container::{decode, decode_with, encode, encode_with};
pub use error::{Error, ErrorKind, Result};
pub use format::{inspect, is_mozlz4, ContainerHeader, ContainerInfo, HEADER_SIZE, MAGIC};
pub use json::{decode_json, encode_json};
pub use lz4_codec::Lz4Codec;
