/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes `bytes` with the 64-bit FNV-1a function.
///
/// FNV-1a folds each byte into the running hash with an xor followed by a
/// multiply by the FNV prime. It is small, fast on short keys, and
/// deterministic across runs, which keeps derived hash keys stable.
///
/// ## Example
/// ```
/// use sable::util::hash::{FNV_OFFSET_BASIS, fnv1a_64};
///
/// // The empty input hashes to the offset basis.
/// assert_eq!(fnv1a_64(b""), FNV_OFFSET_BASIS);
///
/// // Equal content gives equal hashes; different content (almost
/// // certainly) does not.
/// assert_eq!(fnv1a_64(b"sable"), fnv1a_64(b"sable"));
/// assert_ne!(fnv1a_64(b"sable"), fnv1a_64(b"stable"));
/// ```
#[must_use]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut index = 0;

    while index < bytes.len() {
        hash ^= bytes[index] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        index += 1;
    }

    hash
}
