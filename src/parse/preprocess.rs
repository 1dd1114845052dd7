use std::sync::LazyLock;

use regex::Regex;

/// Stand-in for an escaped quote while separator quotes are stripped
const QUOTE_PLACEHOLDER: &str = "\u{0}QUOTE\u{0}";

// Patterns are literals; construction cannot fail.
static SEPARATOR_QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""\s*""#).unwrap());
static LINE_LEADING_QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)^""#).unwrap());
static LINE_TRAILING_QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?m)"$"#).unwrap());
static UNSEPARATED_RECORD: LazyLock<Regex> = LazyLock::new(|| Regex::new("([^\n])▶").unwrap());

/// Normalize pasted multi-record input before parsing.
///
/// Export tools wrap each day's report in quotes and escape inner quotes by
/// doubling them; pasting several reports back-to-back also loses the
/// newline between records. The rewrite order matters — each step operates
/// on the previous step's result:
///
/// 1. `""` → placeholder (escaped quote, to be restored as a literal `"`)
/// 2. `"` + optional whitespace + `"` → removed (adjacent record separators;
///    the whitespace may span the newline between records)
/// 3. line-leading `"` → removed
/// 4. line-trailing `"` → removed
/// 5. placeholder → `"`
/// 6. a `▶` not preceded by a newline gets one (restores the record
///    boundary deleted by steps 2/3)
pub fn preprocess(raw: &str) -> String {
    let escaped = raw.replace("\"\"", QUOTE_PLACEHOLDER);
    let no_separators = SEPARATOR_QUOTES.replace_all(&escaped, "");
    let no_leading = LINE_LEADING_QUOTE.replace_all(&no_separators, "");
    let no_trailing = LINE_TRAILING_QUOTE.replace_all(&no_leading, "");
    let restored = no_trailing.replace(QUOTE_PLACEHOLDER, "\"");
    UNSEPARATED_RECORD
        .replace_all(&restored, "${1}\n▶")
        .into_owned()
}
