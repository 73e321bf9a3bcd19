use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
    util::hash::fnv1a_64,
};

/// The subset of value types usable as hash keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// An integer key.
    Integer,
    /// A boolean key.
    Bool,
    /// A string key.
    Str,
}

/// A derived hash key: the key's type tag plus 64 bits computed from its
/// value.
///
/// Integers contribute their raw bits, booleans 0 or 1, and strings the
/// FNV-1a hash of their UTF-8 bytes. The tag keeps keys of different types
/// apart even when the bits collide (`1` and `true`, say).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The key's type tag.
    pub kind: HashKind,
    /// The derived 64-bit payload.
    pub raw:  u64,
}

/// One entry of a hash value.
///
/// The original key is stored next to the value so the hash can be printed
/// the way it was written; the derived [`HashKey`] only drives the map.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as the program wrote it.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Derives the hash key for this value.
    ///
    /// Only integers, booleans, and strings are hashable; any other type
    /// used as a key (in a hash literal or an index expression) is
    /// reported as unusable.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnusableHashKey` for unhashable types.
    ///
    /// # Example
    /// ```
    /// use sable::interpreter::value::core::Value;
    ///
    /// let int_key = Value::Integer(7).hash_key(1).unwrap();
    /// let str_key = Value::from("7").hash_key(1).unwrap();
    ///
    /// // Same-looking keys of different types stay distinct.
    /// assert_ne!(int_key, str_key);
    /// assert!(Value::Null.hash_key(1).is_err());
    /// ```
    #[allow(clippy::cast_sign_loss)]
    pub fn hash_key(&self, line: usize) -> Result<HashKey, RuntimeError> {
        match self {
            Self::Integer(value) => Ok(HashKey { kind: HashKind::Integer,
                                                 raw:  *value as u64, }),
            Self::Bool(value) => Ok(HashKey { kind: HashKind::Bool,
                                              raw:  u64::from(*value), }),
            Self::Str(value) => Ok(HashKey { kind: HashKind::Str,
                                             raw:  fnv1a_64(value.as_bytes()), }),
            _ => Err(RuntimeError::UnusableHashKey { kind: self.kind(),
                                                     line }),
        }
    }
}
