//! XML document layer.
//!
//! ```text
//! raw bytes + decoded text
//!        │
//!        ▼
//! parse_resilient ── strict ─▶ decoded text ─▶ namespace-stripped
//!        │
//!        ▼
//! Document (arena, document order) ── find / find_all (path.rs)
//! ```

mod document;
mod parser;
mod path;
pub mod recover;

pub use document::{Document, Node, NodeId, local_name};
pub use parser::{ParseOutcome, ParseStrategy, parse_bytes, parse_resilient, parse_str};
pub use path::Path;
