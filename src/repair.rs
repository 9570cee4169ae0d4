//! Pipeline composition: preprocess, tokenize, rebuild, strip trailing
//! commas. Pure text-to-text; callers re-parse the result themselves or go
//! through [`crate::parse_json_with_repair`].

use crate::preprocess::preprocess;
use crate::rewrite::{rebuild, strip_trailing_commas};
use crate::tokenizer::tokenize;
use serde::Serialize;

/// One repair applied during a pipeline run.
///
/// `position` is a byte offset into the text of the stage that made the
/// change (original input for preprocessing, preprocessed text for the
/// rewriter, rewritten text for comma removal), so treat it as a coarse
/// locator rather than an exact input offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool) -> Self {
        Self {
            enable,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn log(&mut self, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry { position, message });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

/// Normalize loosely-formed JSON-like text into (best-effort) strict JSON.
///
/// Handles single quotes, unquoted keys and values, trailing commas, `//`
/// and `/* */` comments, Python/JS literals (`None`, `True`, `NaN`,
/// `undefined`, `Infinity`) and bare scalar input. The result is not
/// guaranteed to parse for arbitrarily malformed input.
///
/// ```
/// assert_eq!(jsonmend::repair_json("{foo:bar}"), r#"{"foo":"bar"}"#);
/// ```
pub fn repair_json(input: &str) -> String {
    let mut log = Logger::new(false);
    repair_impl(input, &mut log)
}

/// Like [`repair_json`], but also reports which repairs were applied.
pub fn repair_json_with_log(input: &str) -> (String, Vec<RepairLogEntry>) {
    let mut log = Logger::new(true);
    let out = repair_impl(input, &mut log);
    (out, log.into_entries())
}

pub(crate) fn repair_impl(input: &str, log: &mut Logger) -> String {
    let pre = preprocess(input, log);
    let tokens = tokenize(&pre);
    let rebuilt = rebuild(&tokens, log);
    strip_trailing_commas(&rebuilt, log)
}
