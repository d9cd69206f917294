//! # refhash
//!
//! Content-addressed identifiers for stored objects: a 20-byte digest of the
//! content, written as 32 base32 characters.
//!
//! ## Overview
//!
//! - **Hash**: Names content by its bytes. Same bytes, same name.
//! - **Canonical form**: Exactly 32 characters from `0-9a-v`. Anything else is
//!   not a hash.
//! - **Empty hash**: All-zero digest, meaning "no content".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use refhash::{ops, RefhashConfig};
//!
//! fn example() -> refhash::Result<()> {
//!     let config = RefhashConfig::default();
//!
//!     // Hash a file in chunks
//!     let report = ops::hash_path("data.bin", &config)?;
//!     println!("{} {}", report.hash, report.source);
//!
//!     // Parse the canonical form
//!     let outcomes = ops::parse_all(["pu1u2dbutusbrsak518dcrc00vb21p05", "nope"]);
//!     assert!(outcomes[0].hash.is_some());
//!     assert!(outcomes[1].hash.is_none());
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `refhash::core` - The identifier types

pub mod config;
pub mod error;
pub mod ops;

pub use refhash_core as core;

pub use config::{OutputFormat, RefhashConfig};
pub use error::{RefhashError, Result};
pub use ops::{HashReport, ParseOutcome};

pub use refhash_core::{Hash, HashError, HashRef, HashSet, Hasher};
