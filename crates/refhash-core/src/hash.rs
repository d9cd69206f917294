//! The content identifier.
//!
//! A [`Hash`] is the first 20 bytes of SHA-512 over some content. Two pieces
//! of content with the same bytes have the same `Hash`.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha512};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::HashError;

/// Length of a digest in bytes.
pub const BYTE_LEN: usize = 20;

/// A 20-byte content identifier.
///
/// Ordering is byte-wise lexicographic over unsigned bytes, most significant
/// byte first. The all-zero value is [`Hash::EMPTY`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash([u8; BYTE_LEN]);

impl Hash {
    /// The empty identifier, standing for "no content".
    pub const EMPTY: Self = Self([0u8; BYTE_LEN]);

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a digest out of a slice.
    ///
    /// Fails unless the slice is exactly [`BYTE_LEN`] bytes; nothing is
    /// truncated or padded.
    pub fn from_slice(slice: &[u8]) -> Result<Self, HashError> {
        HashRef::new(slice).map(HashRef::to_hash)
    }

    /// Hash arbitrary content.
    pub fn of(data: &[u8]) -> Self {
        let full = Sha512::digest(data);
        let mut bytes = [0u8; BYTE_LEN];
        bytes.copy_from_slice(&full[..BYTE_LEN]);
        Self(bytes)
    }

    /// Parse the canonical text form.
    ///
    /// Returns `None` for anything that is not exactly 32 characters from
    /// `0-9a-v`.
    pub fn parse(s: &str) -> Option<Self> {
        codec::decode(s).map(Self)
    }

    /// Get the raw digest.
    pub const fn digest(&self) -> &[u8; BYTE_LEN] {
        &self.0
    }

    /// Whether this is the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Borrow as a [`HashRef`].
    pub const fn as_hash_ref(&self) -> HashRef<'_> {
        HashRef(&self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(&self.0, f)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl FromStr for Hash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| HashError::InvalidString(s.to_string()))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BYTE_LEN]> for Hash {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; BYTE_LEN] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = HashError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

/// A borrowed view over a digest stored elsewhere.
///
/// Nothing is copied: the view points into the caller's buffer, which must
/// outlive it and cannot be mutated while it exists. Use this when digests
/// sit inside a larger buffer (a packed chunk, a mapped file) and copying
/// every one would be wasteful. Call [`HashRef::to_hash`] to detach.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashRef<'a>(&'a [u8; BYTE_LEN]);

impl<'a> HashRef<'a> {
    /// View an exact-length digest array.
    pub const fn from_array(bytes: &'a [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// View a slice as a digest without copying.
    ///
    /// Fails unless the slice is exactly [`BYTE_LEN`] bytes.
    pub fn new(slice: &'a [u8]) -> Result<Self, HashError> {
        let bytes: &'a [u8; BYTE_LEN] =
            slice.try_into().map_err(|_| HashError::InvalidLength {
                expected: BYTE_LEN,
                actual: slice.len(),
            })?;
        Ok(Self(bytes))
    }

    /// View every digest in a buffer of back-to-back digests.
    ///
    /// Fails if the buffer length is not a multiple of [`BYTE_LEN`].
    pub fn split_packed(buf: &'a [u8]) -> Result<Vec<Self>, HashError> {
        if buf.len() % BYTE_LEN != 0 {
            return Err(HashError::NotMultipleOf {
                unit: BYTE_LEN,
                actual: buf.len(),
            });
        }
        buf.chunks_exact(BYTE_LEN).map(Self::new).collect()
    }

    /// Get the raw digest.
    pub const fn digest(&self) -> &'a [u8; BYTE_LEN] {
        self.0
    }

    /// Whether this is the empty identifier.
    pub fn is_empty(&self) -> bool {
        *self.0 == Hash::EMPTY.0
    }

    /// Copy into an owned [`Hash`].
    pub fn to_hash(self) -> Hash {
        Hash(*self.0)
    }
}

impl fmt::Display for HashRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(self.0, f)
    }
}

impl fmt::Debug for HashRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashRef({})", self)
    }
}

impl AsRef<[u8]> for HashRef<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl<'a> From<&'a Hash> for HashRef<'a> {
    fn from(hash: &'a Hash) -> Self {
        hash.as_hash_ref()
    }
}

impl From<HashRef<'_>> for Hash {
    fn from(view: HashRef<'_>) -> Self {
        view.to_hash()
    }
}

impl PartialEq<HashRef<'_>> for Hash {
    fn eq(&self, other: &HashRef<'_>) -> bool {
        self.0 == *other.0
    }
}

impl PartialEq<Hash> for HashRef<'_> {
    fn eq(&self, other: &Hash) -> bool {
        *self.0 == other.0
    }
}

impl PartialOrd<HashRef<'_>> for Hash {
    fn partial_cmp(&self, other: &HashRef<'_>) -> Option<Ordering> {
        Some(self.0.cmp(other.0))
    }
}

impl PartialOrd<Hash> for HashRef<'_> {
    fn partial_cmp(&self, other: &Hash) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

fn write_canonical(digest: &[u8; BYTE_LEN], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let symbols = codec::encode(digest);
    // The alphabet is ASCII.
    let s = std::str::from_utf8(&symbols).map_err(|_| fmt::Error)?;
    f.pad(s)
}

// Text formats carry the canonical string, binary formats the raw 20 bytes.

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(HashVisitor)
        } else {
            deserializer.deserialize_bytes(HashVisitor)
        }
    }
}

struct HashVisitor;

impl<'de> Visitor<'de> for HashVisitor {
    type Value = Hash;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a {}-character base32 string or {} raw bytes",
            codec::STRING_LEN,
            BYTE_LEN
        )
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Hash, E> {
        Hash::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Hash, E> {
        Hash::from_slice(v).map_err(|_| E::invalid_length(v.len(), &self))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Hash, A::Error> {
        let mut bytes = [0u8; BYTE_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(BYTE_LEN + 1, &self));
        }
        Ok(Hash(bytes))
    }
}
