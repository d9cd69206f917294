//! Operations behind the command-line tool.
//!
//! Each operation returns a plain value; printing is left to the caller.

use refhash_core::{Hash, Hasher};
use serde::Serialize;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::config::RefhashConfig;
use crate::error::{RefhashError, Result};

/// The identifier computed for one source of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashReport {
    /// Where the content came from (a path, or `-` for stdin).
    pub source: String,
    pub hash: Hash,
    /// Number of bytes hashed.
    pub bytes: u64,
}

/// The result of parsing one candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub input: String,
    /// `None` if the input is not in canonical form.
    pub hash: Option<Hash>,
    /// Raw digest as hex, when valid.
    pub digest_hex: Option<String>,
    pub is_empty: bool,
}

/// Hash everything a reader produces, `config.chunk_size` bytes at a time.
pub fn hash_reader<R: Read>(
    source: &str,
    mut reader: R,
    config: &RefhashConfig,
) -> Result<HashReport> {
    config.validate()?;

    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; config.chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(error) => {
                return Err(RefhashError::Io {
                    source_name: source.to_string(),
                    error,
                })
            }
        };
        hasher.update(&buf[..n]);
    }

    let bytes = hasher.len();
    let hash = hasher.finalize();
    tracing::debug!(source, bytes, %hash, "hashed content");

    Ok(HashReport {
        source: source.to_string(),
        hash,
        bytes,
    })
}

/// Hash the contents of a file.
pub fn hash_path(path: impl AsRef<Path>, config: &RefhashConfig) -> Result<HashReport> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|error| RefhashError::Io {
        source_name: source.clone(),
        error,
    })?;
    hash_reader(&source, file, config)
}

/// Parse each input, keeping rejected strings in the result.
pub fn parse_all<I, S>(inputs: I) -> Vec<ParseOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            let hash = Hash::parse(input);
            if hash.is_none() {
                tracing::warn!(input, "rejected non-canonical hash string");
            }
            ParseOutcome {
                input: input.to_string(),
                hash,
                digest_hex: hash.map(|h| hex::encode(h.digest())),
                is_empty: hash.is_some_and(|h| h.is_empty()),
            }
        })
        .collect()
}

/// Compare two hashes given in canonical form.
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    let parse = |s: &str| Hash::parse(s).ok_or_else(|| RefhashError::InvalidHash(s.to_string()));
    let (a, b) = (parse(a)?, parse(b)?);
    Ok(a.cmp(&b))
}
