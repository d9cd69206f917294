//! # refhash Testkit
//!
//! Testing utilities for refhash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with their expected digests and strings, for
//!   checking that independent implementations agree
//! - **Generators**: Proptest strategies for hashes and hash-like strings
//!
//! ## Golden Vectors
//!
//! ```rust
//! use refhash_testkit::vectors::{content_vectors, verify_all_vectors};
//!
//! for vector in content_vectors() {
//!     println!("{}: {}", vector.name, vector.expected_string);
//! }
//! assert!(verify_all_vectors().iter().all(|(_, ok, _)| *ok));
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use refhash_testkit::generators::hash;
//!
//! proptest! {
//!     #[test]
//!     fn text_roundtrip(h in hash()) {
//!         prop_assert_eq!(refhash_core::Hash::parse(&h.to_string()), Some(h));
//!     }
//! }
//! ```

pub mod generators;
pub mod vectors;

pub use vectors::{content_vectors, digest_vectors, verify_all_vectors, ContentVector, DigestVector};
