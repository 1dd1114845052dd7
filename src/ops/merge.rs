/// How converted import output is combined with an existing editor buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Replace the buffer
    Overwrite,
    /// Buffer first, then a blank line, then the incoming text
    Append,
    /// Incoming text first, then a blank line, then the buffer
    Prepend,
}

/// Combine `incoming` with `existing` according to the merge mode. The
/// blank-line separator is skipped when the existing buffer is blank.
pub fn apply_merge(existing: &str, incoming: &str, mode: MergeMode) -> String {
    match mode {
        MergeMode::Overwrite => incoming.to_string(),
        MergeMode::Append => {
            if existing.trim().is_empty() {
                incoming.to_string()
            } else {
                format!("{}\n\n{}", existing, incoming)
            }
        }
        MergeMode::Prepend => {
            if existing.trim().is_empty() {
                incoming.to_string()
            } else {
                format!("{}\n\n{}", incoming, existing)
            }
        }
    }
}
