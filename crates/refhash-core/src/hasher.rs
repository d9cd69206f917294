//! Incremental hashing.

use sha2::{Digest, Sha512};
use std::fmt;
use std::io;

use crate::hash::{Hash, BYTE_LEN};

/// Computes a [`Hash`] over content fed in pieces.
///
/// Feeding `a` then `b` gives the same result as [`Hash::of`] over `a ++ b`.
#[derive(Clone, Default)]
pub struct Hasher {
    inner: Sha512,
    len: u64,
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed more content.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
        self.len += data.len() as u64;
    }

    /// Number of bytes fed so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consume the hasher and produce the identifier.
    pub fn finalize(self) -> Hash {
        let full = self.inner.finalize();
        let mut bytes = [0u8; BYTE_LEN];
        bytes.copy_from_slice(&full[..BYTE_LEN]);
        Hash::from_bytes(bytes)
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hasher(len={})", self.len)
    }
}
