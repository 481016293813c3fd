//! # jsonc-core
//!
//! Parser, serializer, and traversal utilities for a lenient JSON dialect:
//! standard JSON plus C-style `/* ... */` comments, hexadecimal integer
//! literals, and tolerance for stray commas. Built for configuration-style
//! documents that humans edit and programs consume.
//!
//! Parsing is strict about everything else: any grammar violation aborts
//! with a [`ParseError`] carrying the line, column, and offending source
//! line. Reading a parsed tree is the opposite: coercing getters and path
//! lookups never fail, falling back to caller-supplied defaults.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonc_core::{parse, to_text, get_value_for_path};
//!
//! let doc = parse(r#"{
//!     /* retry budget */
//!     "retries": 0x10,
//!     "backoff": { "base_ms": 250, "jitter": true, },
//! }"#).unwrap();
//!
//! let base = get_value_for_path(&doc, "backoff/base_ms").unwrap();
//! assert_eq!(base.as_integer(0), 250);
//!
//! // Comments are gone and commas normalized on the way back out.
//! assert_eq!(
//!     to_text(&doc, false),
//!     r#"{"retries": 16,"backoff": {"base_ms": 250,"jitter": true}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the closed `Value` tree of ordered objects and arrays
//! - [`parser`]: recursive-descent parser with position-tracked diagnostics
//! - [`serializer`]: indented or compact text output
//! - [`path`]: slash/dot path lookup and tree flattening
//! - [`convert`]: serde / `serde_json::Value` bridges
//! - [`error`]: [`ParseError`] and the crate `Result` alias

pub mod convert;
pub mod error;
pub mod parser;
pub mod path;
pub mod serializer;
pub mod value;

pub use error::ParseError;
pub use parser::{parse, parse_with_options, ParseOptions};
pub use path::{flatten, flatten_with_separator, get_value_for_path, get_value_for_segments};
pub use serializer::to_text;
pub use value::{Array, KeyMatch, KeyValue, Object, Value};
