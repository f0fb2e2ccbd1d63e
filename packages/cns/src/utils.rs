use thiserror::Error;
use tiny_keccak::Keccak;

/// Base node. Holds records for the registry itself and never gets a chain record.
pub const ROOT_NODE: [u8; 32] = [0u8; 32];

/// Data and text key under which the chain identifier of a label is exposed.
pub const CHAIN_ID_KEY: &str = "chain-id";

/// Text key prefix for reverse lookups: `chain-name:<hex chain identifier>`.
pub const REVERSE_TEXT_PREFIX: &str = "chain-name:";

/// Sentinel label holding reverse entries.
pub const REVERSE_LABEL: &str = "reverse";

#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("MalformedName: invalid encoding at offset {offset}.")]
    Malformed { offset: usize },
}

/// Returned by `dns_encode` for a label that does not fit a length byte.
#[derive(Error, Debug, PartialEq)]
#[error("LabelTooLong: label {label} is {length} bytes, at most 255 allowed.")]
pub struct LabelTooLong {
    pub label: String,
    pub length: usize,
}

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    o
}

/// Storage key of a single label.
pub fn labelhash(label: &str) -> Vec<u8> {
    keccak256(label.as_bytes())
}

pub fn reverse_node() -> Vec<u8> {
    labelhash(REVERSE_LABEL)
}

pub fn namehash(name: &str) -> Vec<u8> {
    let mut node = ROOT_NODE.to_vec();
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        node.extend_from_slice(&keccak256(label.as_bytes()));
        node = keccak256(&node);
    }
    node
}

pub fn node_to_hex(node: &[u8]) -> String {
    hex::encode(node)
}

/// Text key of the reverse entry for `chain_identifier`.
pub fn reverse_text_key(chain_identifier: &[u8]) -> String {
    format!("{}{}", REVERSE_TEXT_PREFIX, hex::encode(chain_identifier))
}

/// Inverse of `reverse_text_key`. Accepts an optional `0x` before the hex part.
pub fn parse_reverse_text_key(key: &str) -> Option<Vec<u8>> {
    let encoded = key.strip_prefix(REVERSE_TEXT_PREFIX)?;
    let encoded = encoded.strip_prefix("0x").unwrap_or(encoded);
    hex::decode(encoded).ok()
}

/// DNS wire encoding of a dotted name: length-prefixed labels, zero terminated.
pub fn dns_encode(name: &str) -> Result<Vec<u8>, LabelTooLong> {
    let mut encoded = Vec::with_capacity(name.len() + 2);
    if !name.is_empty() {
        for label in name.split('.') {
            if label.len() > u8::MAX as usize {
                return Err(LabelTooLong {
                    label: label.to_string(),
                    length: label.len(),
                });
            }
            encoded.push(label.len() as u8);
            encoded.extend_from_slice(label.as_bytes());
        }
    }
    encoded.push(0);
    Ok(encoded)
}

/// Splits a DNS-encoded name into its labels, leftmost first.
///
/// The whole buffer must be consumed: a missing terminator, a length byte
/// running past the end or bytes after the terminator are all rejected.
/// The root name (a single zero byte) yields no labels.
pub fn decode_name(name: &[u8]) -> Result<Vec<&[u8]>, NameError> {
    let mut labels = Vec::new();
    let mut offset = 0;
    loop {
        let length = match name.get(offset) {
            Some(length) => *length as usize,
            None => return Err(NameError::Malformed { offset }),
        };
        if length == 0 {
            if offset + 1 != name.len() {
                return Err(NameError::Malformed { offset });
            }
            return Ok(labels);
        }
        let end = offset + 1 + length;
        if end > name.len() {
            return Err(NameError::Malformed { offset });
        }
        labels.push(&name[offset + 1..end]);
        offset = end;
    }
}
