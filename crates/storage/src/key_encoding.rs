//! Key encoding for composite types
//!
//! Scalar (string) keys are stored verbatim. Composite types are emulated with
//! namespaced physical keys:
//!
//! - Existence marker: `{ns:2}{key}\x01`
//! - Member:           `{ns:2}{key}\x01{member}`
//!
//! Every namespace prefix starts with `0xFF`, so all encoded keys sort after
//! user keys whose first byte is below `0xFF`. Users must not create scalar keys
//! starting with `0xFF`; the engine does not reserve that range on its own.

/// Key prefixes
pub mod key_prefix {
    /// First byte of every namespaced key
    pub const NAMESPACE_MARK: u8 = 0xFF;
    pub const HASH: [u8; 2] = [0xFF, 0x01];
    pub const ZSET: [u8; 2] = [0xFF, 0x02];
    pub const SET: [u8; 2] = [0xFF, 0x03];
    /// Separates the logical key from the member
    pub const MEMBER: u8 = 0x01;
}

/// Sentinel value stored under an existence marker
pub const EXISTENCE_MARKER_VALUE: &[u8] = b"1";

/// Composite-type key space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Hash,
    ZSet,
    Set,
}

impl Namespace {
    pub const fn prefix(self) -> [u8; 2] {
        match self {
            Namespace::Hash => key_prefix::HASH,
            Namespace::ZSet => key_prefix::ZSET,
            Namespace::Set => key_prefix::SET,
        }
    }
}

/// Build an encoded key: `{ns}{key}\x01[{member}]`
pub fn encode(ns: Namespace, key: &[u8], member: Option<&[u8]>) -> Vec<u8> {
    let member = member.unwrap_or_default();
    let mut result = Vec::with_capacity(3 + key.len() + member.len());
    result.extend_from_slice(&ns.prefix());
    result.extend_from_slice(key);
    result.push(key_prefix::MEMBER);
    result.extend_from_slice(member);
    result
}

/// Build the existence marker key for `key` in `ns`
pub fn existence_marker_key(ns: Namespace, key: &[u8]) -> Vec<u8> {
    encode(ns, key, None)
}

/// Build hash field key: `\xFF\x01{key}\x01{field}`
pub fn hash_field_key(key: &[u8], field: &[u8]) -> Vec<u8> {
    encode(Namespace::Hash, key, Some(field))
}

/// Whether a physical key lies in the namespaced (composite-type) key space
pub fn is_namespaced(physical: &[u8]) -> bool {
    physical.first() == Some(&key_prefix::NAMESPACE_MARK)
}
