//! Proptest generators for property-based testing.

use proptest::prelude::*;

use refhash_core::{Hash, BYTE_LEN};

/// Generate an arbitrary hash.
pub fn hash() -> impl Strategy<Value = Hash> {
    any::<[u8; BYTE_LEN]>().prop_map(Hash::from_bytes)
}

/// Generate a hash that is not the empty sentinel.
pub fn non_empty_hash() -> impl Strategy<Value = Hash> {
    hash().prop_filter("not the empty hash", |h| !h.is_empty())
}

/// Generate content to hash.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a string in canonical form.
pub fn canonical_string() -> impl Strategy<Value = String> {
    "[0-9a-v]{32}".prop_map(String::from)
}

/// Generate strings that must never parse.
pub fn non_canonical_string() -> impl Strategy<Value = String> {
    prop_oneof![
        // wrong length
        "[0-9a-v]{0,31}",
        "[0-9a-v]{33,64}",
        // one symbol outside the alphabet
        "[0-9a-v]{0,31}".prop_flat_map(|prefix| {
            let rest = 31 - prefix.len();
            ("[w-zA-Z_\\-+/=]", proptest::string::string_regex(&format!("[0-9a-v]{{{rest}}}"))
                .expect("valid regex"))
                .prop_map(move |(bad, suffix)| format!("{prefix}{bad}{suffix}"))
        }),
        any::<String>().prop_filter("not canonical", |s| !refhash_core::is_canonical(s)),
    ]
}

/// Generate a buffer of back-to-back digests.
pub fn packed_digests(max_count: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<[u8; BYTE_LEN]>(), 0..=max_count)
        .prop_map(|digests| digests.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use refhash_core::{HashRef, HashSet};

    proptest! {
        #[test]
        fn test_hash_roundtrips_through_text(h in hash()) {
            prop_assert_eq!(Hash::parse(&h.to_string()), Some(h));
        }

        #[test]
        fn test_canonical_strings_parse(s in canonical_string()) {
            prop_assert!(Hash::parse(&s).is_some());
        }

        #[test]
        fn test_non_canonical_strings_never_parse(s in non_canonical_string()) {
            prop_assert_eq!(Hash::parse(&s), None);
        }

        #[test]
        fn test_non_empty_hashes(h in non_empty_hash()) {
            prop_assert!(!h.is_empty());
            prop_assert_ne!(h, Hash::EMPTY);
        }

        #[test]
        fn test_of_is_deterministic(data in content(256)) {
            prop_assert_eq!(Hash::of(&data), Hash::of(&data));
        }

        #[test]
        fn test_packed_views_match_copies(buf in packed_digests(8)) {
            let views = HashRef::split_packed(&buf).unwrap();
            prop_assert_eq!(views.len(), buf.len() / BYTE_LEN);
            for (view, chunk) in views.iter().zip(buf.chunks_exact(BYTE_LEN)) {
                prop_assert_eq!(view.to_hash(), Hash::from_slice(chunk).unwrap());
            }
        }

        #[test]
        fn test_set_is_sorted(hashes in prop::collection::vec(hash(), 0..32)) {
            let set: HashSet = hashes.iter().copied().collect();
            let listed: Vec<Hash> = set.iter().copied().collect();
            let mut expected = hashes.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(listed, expected);
        }
    }
}
