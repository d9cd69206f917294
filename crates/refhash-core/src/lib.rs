//! # refhash Core
//!
//! Content-addressed identifiers: a 20-byte digest computed over arbitrary
//! bytes, with a canonical 32-character base32 text form.
//!
//! This crate contains no I/O. It is pure computation over digests.
//!
//! ## Key Types
//!
//! - [`Hash`] - Owned 20-byte identifier
//! - [`HashRef`] - Borrowed view over 20 bytes owned by someone else
//! - [`Hasher`] - Incremental hashing for content that arrives in chunks
//! - [`HashSet`] - Ordered set of identifiers
//!
//! ## Text Form
//!
//! Identifiers render as 32 characters from `0-9a-v`. See [`codec`].
//!
//! ```rust
//! use refhash_core::Hash;
//!
//! let h = Hash::of(b"");
//! assert_eq!(h.to_string(), "pu1u2dbutusbrsak518dcrc00vb21p05");
//! assert_eq!(Hash::parse(&h.to_string()), Some(h));
//! assert!(Hash::EMPTY.is_empty());
//! ```

pub mod codec;
pub mod error;
pub mod hash;
pub mod hasher;
pub mod set;

pub use codec::{is_canonical, STRING_LEN};
pub use error::HashError;
pub use hash::{Hash, HashRef, BYTE_LEN};
pub use hasher::Hasher;
pub use set::HashSet;
