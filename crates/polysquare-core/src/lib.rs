//! Core types for the polysquare alphabet-square codec.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the table builder and the codec: grid
//! coordinates, the unknown-symbol policy, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod policy;

pub use coord::Coord;
pub use error::{CodecError, MalformedReason, TableError};
pub use policy::{ParsePolicyError, UnknownSymbolPolicy};
