//! Converts Valve Data Format (KeyValues) text into a JSON-shaped tree.
//!
//! ```
//! let node = vdf2json::parse_with(r#""list" { "0" { "x" "1" } }"#, true).unwrap();
//! assert_eq!(node.to_string(), "{\n  \"list\": [\n    {\n      \"x\": \"1\"\n    }\n  ]\n}");
//! ```

pub mod error;
pub mod escape;
mod format;
pub mod lexer;
pub mod node;
mod normalize;
mod parse;

pub use error::{Error, ErrorKind, Result};
pub use node::Node;
pub use parse::{parse, parse_with, parse_with_options, Options, DEFAULT_MAX_DEPTH};
