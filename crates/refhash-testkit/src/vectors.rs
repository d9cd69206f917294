//! Golden test vectors.
//!
//! Any implementation of this identifier must reproduce these digests and
//! strings exactly.

use refhash_core::Hash;

/// Content and the identifier it must hash to.
#[derive(Debug, Clone)]
pub struct ContentVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Content to hash.
    pub content: &'static [u8],
    /// Expected digest (hex).
    pub expected_digest: &'static str,
    /// Expected canonical string.
    pub expected_string: &'static str,
}

/// A raw digest and the string it must render as.
#[derive(Debug, Clone)]
pub struct DigestVector {
    pub name: &'static str,
    pub digest: [u8; 20],
    pub expected_string: &'static str,
    pub expected_empty: bool,
}

/// Vectors for hashing content.
pub fn content_vectors() -> Vec<ContentVector> {
    vec![
        ContentVector {
            name: "empty content",
            content: b"",
            expected_digest: "cf83e1357eefb8bdf1542850d66d8007d620e405",
            expected_string: "pu1u2dbutusbrsak518dcrc00vb21p05",
        },
        ContentVector {
            name: "abc",
            content: b"abc",
            expected_digest: "ddaf35a193617abacc417349ae20413112e6fa4e",
            expected_string: "rmnjb8cjc5tblj21ed4qs821649eduie",
        },
        ContentVector {
            name: "hello",
            content: b"hello",
            expected_digest: "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2",
            expected_string: "jdot495tcbpngncmqhld7qhtecopnuu2",
        },
        ContentVector {
            name: "hello world",
            content: b"hello world",
            expected_digest: "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee",
            expected_string: "62fcoi4s2bbemj641t8ci0nimj8eqtve",
        },
    ]
}

/// Vectors for rendering raw digests.
pub fn digest_vectors() -> Vec<DigestVector> {
    let mut counting = [0u8; 20];
    for (i, b) in counting.iter_mut().enumerate() {
        *b = i as u8;
    }

    vec![
        DigestVector {
            name: "all zero (empty sentinel)",
            digest: [0x00; 20],
            expected_string: "00000000000000000000000000000000",
            expected_empty: true,
        },
        DigestVector {
            name: "all ones",
            digest: [0xff; 20],
            expected_string: "vvvvvvvvvvvvvvvvvvvvvvvvvvvvvvvv",
            expected_empty: false,
        },
        DigestVector {
            name: "repeated 0x42",
            digest: [0x42; 20],
            expected_string: "89144gi289144gi289144gi289144gi2",
            expected_empty: false,
        },
        DigestVector {
            name: "counting bytes",
            digest: counting,
            expected_string: "000g40o40k30e209185go38e1s8124gj",
            expected_empty: false,
        },
    ]
}

/// Check every vector against this implementation.
///
/// Returns `(name, matches, actual_string)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let content = content_vectors().into_iter().map(|v| {
        let h = Hash::of(v.content);
        let actual = h.to_string();
        let matches =
            actual == v.expected_string && hex::encode(h.digest()) == v.expected_digest;
        (v.name.to_string(), matches, actual)
    });

    let digests = digest_vectors().into_iter().map(|v| {
        let h = Hash::from_bytes(v.digest);
        let actual = h.to_string();
        let matches = actual == v.expected_string && h.is_empty() == v.expected_empty;
        (v.name.to_string(), matches, actual)
    });

    content.chain(digests).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, actual) in verify_all_vectors() {
            assert!(matches, "Vector '{}' produced {}", name, actual);
        }
    }

    #[test]
    fn test_vector_strings_parse_back() {
        for v in content_vectors() {
            let parsed = Hash::parse(v.expected_string)
                .unwrap_or_else(|| panic!("Vector '{}' string did not parse", v.name));
            assert_eq!(hex::encode(parsed.digest()), v.expected_digest);
        }
        for v in digest_vectors() {
            assert_eq!(Hash::parse(v.expected_string), Some(Hash::from_bytes(v.digest)));
        }
    }
}
