/// Editor slash shortcuts, tested in order: typing `/N ` produces the
/// level-N heading marker.
pub const SLASH_SHORTCUTS: &[(&str, &str)] = &[
    ("/1 ", "# "),
    ("/2 ", "## "),
    ("/3 ", "### "),
    ("/4 ", "#### "),
];

/// If `text` ends with a shortcut trigger, return it with the trigger
/// rewritten to its replacement. First matching trigger wins.
pub fn expand_trailing_shortcut(text: &str) -> Option<String> {
    for (trigger, replacement) in SLASH_SHORTCUTS {
        if let Some(head) = text.strip_suffix(trigger) {
            return Some(format!("{}{}", head, replacement));
        }
    }
    None
}
