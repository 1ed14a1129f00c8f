//! JSON convenience layer over the byte-level container codec.

use serde::Serialize;
use serde_json::Value;

use crate::container::{decode, encode};
use crate::error::{Error, Result};

/// Decode a container and parse its payload as UTF-8 JSON.
///
/// Header and decompression failures surface unchanged; only a payload that
/// is not valid UTF-8 JSON yields [`Error::JsonDecode`].
pub fn decode_json(raw: &[u8]) -> Result<Value> {
    let bytes = decode(raw)?;
    serde_json::from_slice(&bytes).map_err(Error::JsonDecode)
}

/// Serialize `value` as compact JSON and encode it into a container.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(value).map_err(Error::JsonEncode)?;
    encode(&bytes)
}
