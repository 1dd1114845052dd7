use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::parse::{parse_report, preprocess, serialize_report};

/// Counters reported after an import conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Projects emitted in the output
    pub projects: usize,
    /// Repeated project/activity keys merged into an existing entry
    pub groupings: usize,
    /// Identical tasks/details discarded
    pub duplicates_removed: usize,
    /// Non-blank lines in the output
    pub total_lines: usize,
}

/// A reportable conversion problem. Unrecognized lines are dropped rather
/// than reported, so conversions currently produce no entries; the field
/// exists so callers have a stable result shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionError {
    pub line: usize,
    pub message: String,
    pub original: String,
}

/// Outcome of one import conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub text: String,
    pub stats: ConversionStats,
    pub errors: Vec<ConversionError>,
}

/// Line/character counts of the raw input buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputStats {
    pub lines: usize,
    pub chars: usize,
}

/// Run the full import pipeline: preprocess → parse/group/dedup → serialize.
/// Whitespace-only input yields an empty result with zero stats. Each call
/// is independent and idempotent for identical input.
pub fn convert_report(input: &str) -> ConversionResult {
    if input.trim().is_empty() {
        return ConversionResult::default();
    }

    let cleaned = preprocess(input);
    let (tree, counter) = parse_report(&cleaned);
    let text = serialize_report(&tree);

    let stats = ConversionStats {
        projects: tree.emitted_project_count(),
        groupings: counter.groupings,
        duplicates_removed: counter.duplicates,
        total_lines: text.split('\n').filter(|l| !l.trim().is_empty()).count(),
    };

    ConversionResult {
        text,
        stats,
        errors: Vec::new(),
    }
}

/// Import pipeline facade: holds the raw paste buffer and the latest
/// conversion outcome. Pure state container — no I/O, no deferred work;
/// callers that want to keep a UI responsive can schedule `convert` however
/// they like without changing its result.
#[derive(Debug, Default)]
pub struct ImportSession {
    input: String,
    result: ConversionResult,
}

impl ImportSession {
    pub fn new() -> Self {
        ImportSession::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Line and grapheme counts of the current input (0 lines when empty)
    pub fn input_stats(&self) -> InputStats {
        InputStats {
            lines: if self.input.is_empty() {
                0
            } else {
                self.input.split('\n').count()
            },
            chars: self.input.graphemes(true).count(),
        }
    }

    /// Convert the current input and keep the outcome
    pub fn convert(&mut self) -> &ConversionResult {
        self.result = convert_report(&self.input);
        &self.result
    }

    pub fn converted_text(&self) -> &str {
        &self.result.text
    }

    pub fn stats(&self) -> ConversionStats {
        self.result.stats
    }

    pub fn errors(&self) -> &[ConversionError] {
        &self.result.errors
    }

    /// Clear input, output, stats, and errors
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = ConversionResult::default();
    }
}
