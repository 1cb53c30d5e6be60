//! Coordinate-token encoding over a square table.
//!
//! [`PolybiusCodec`] turns text into space-separated 1-based `row-col`
//! tokens and back, using a [`Table`](polysquare_table::Table) built once
//! up front. The [`SquareCipher`] trait is the seam for alternative square
//! ciphers; callers that hold a `Box<dyn SquareCipher>` never see which
//! one they have.
//!
//! # Token grammar
//!
//! ```text
//! token   := digits "-" digits
//! message := token (" " token)*
//! ```
//!
//! # Example
//!
//! ```
//! use polysquare_codec::{CodecConfig, PolybiusCodec, SquareCipher};
//!
//! let codec = PolybiusCodec::lowercase(CodecConfig::skip_unknown());
//! let message = codec.encode("hello my friend").unwrap();
//! assert_eq!(message.split(' ').count(), 13);
//! assert_eq!(codec.decode(&message).unwrap(), "hellomyfriend");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cipher;
pub mod config;
pub mod polybius;
pub mod token;

pub use cipher::SquareCipher;
pub use config::CodecConfig;
pub use polybius::PolybiusCodec;
