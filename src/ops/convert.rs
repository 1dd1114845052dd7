use crate::model::level::{LevelConfig, default_levels, resolve_levels};

/// Convert markdown-heading text to report format using the given level
/// markers. Total over all string inputs: lines that are not headings pass
/// through verbatim (untrimmed), blank lines stay blank, and the line count
/// never changes.
///
/// Heading markers are tested against the trimmed line deepest-first, so
/// `#### ` is never misread as `## `. A matched line becomes
/// `indent + prefix + " " + content`; a bare `#` is a level-1 heading with
/// empty content.
pub fn convert_with_config(markdown: &str, levels: &[LevelConfig]) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let resolved = resolve_levels(levels);
    let mut result: Vec<String> = Vec::new();

    for line in markdown.split('\n') {
        let trimmed = line.trim();

        if let Some(content) = trimmed.strip_prefix("#### ") {
            result.push(marker_line(&resolved[3], content));
        } else if let Some(content) = trimmed.strip_prefix("### ") {
            result.push(marker_line(&resolved[2], content));
        } else if let Some(content) = trimmed.strip_prefix("## ") {
            result.push(marker_line(&resolved[1], content));
        } else if let Some(content) = trimmed.strip_prefix("# ") {
            result.push(marker_line(&resolved[0], content));
        } else if trimmed == "#" {
            result.push(marker_line(&resolved[0], ""));
        } else if trimmed.is_empty() {
            result.push(String::new());
        } else {
            result.push(line.to_string());
        }
    }

    result.join("\n")
}

/// Direct conversion with the built-in default markers (`▶`/`-`/`+`/`.`)
pub fn convert_markdown_to_report(markdown: &str) -> String {
    convert_with_config(markdown, &default_levels())
}

fn marker_line(config: &LevelConfig, content: &str) -> String {
    format!("{}{} {}", " ".repeat(config.indent), config.prefix, content)
}
