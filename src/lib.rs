//! Best-effort JSON repair and parsing helpers.
//!
//! The core is a pure function pipeline: a preprocessor strips comments and
//! wraps bare input, a lossless tokenizer scans the text, a single-pass
//! rewriter quotes bare words and normalizes quoting and literals, a final
//! pass drops trailing commas, and the result is handed to `serde_json` for
//! strict parsing. Every stage is a pure function of its input; calls are
//! independently reentrant with no shared state.
//!
//! ```
//! let out = jsonmend::parse_json_with_repair("{'a': None, b: 007, // note\n}").unwrap();
//! assert!(out.repaired);
//! assert_eq!(out.value, serde_json::json!({"a": null, "b": "007"}));
//! ```

pub mod cli;
pub mod error;
mod parse;
mod preprocess;
mod repair;
mod rewrite;
mod stats;
pub mod tokenizer;

pub use error::JsonError;
pub use parse::{
    JsonOutput, JsonResult, format_json_with_repair, minify_json_with_repair, parse_json,
    parse_json_with_repair,
};
pub use repair::{RepairLogEntry, repair_json, repair_json_with_log};
pub use stats::{JsonStats, json_stats};

#[cfg(test)]
mod tests;
