use serde::{Deserialize, Serialize};

/// Marker prefix and indentation for one heading level (1–4)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Heading level, 1 (top) through 4 (deepest)
    pub level: u8,
    /// Literal marker prepended to the line content, e.g. `▶` or `-`
    pub prefix: String,
    /// Leading spaces before the marker
    pub indent: usize,
}

impl LevelConfig {
    pub fn new(level: u8, prefix: &str, indent: usize) -> Self {
        LevelConfig {
            level,
            prefix: prefix.to_string(),
            indent,
        }
    }
}

/// The built-in level set: `▶`/0, `-`/2, `+`/4, `.`/6
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new(1, "▶", 0),
        LevelConfig::new(2, "-", 2),
        LevelConfig::new(3, "+", 4),
        LevelConfig::new(4, ".", 6),
    ]
}

/// Built-in fallback for a single level
fn default_level(level: u8) -> LevelConfig {
    match level {
        1 => LevelConfig::new(1, "▶", 0),
        2 => LevelConfig::new(2, "-", 2),
        3 => LevelConfig::new(3, "+", 4),
        _ => LevelConfig::new(4, ".", 6),
    }
}

/// Resolve a possibly-partial level set into one entry per level 1–4.
/// Each missing level falls back to the built-in default independently.
pub fn resolve_levels(levels: &[LevelConfig]) -> [LevelConfig; 4] {
    [1u8, 2, 3, 4].map(|n| {
        levels
            .iter()
            .find(|l| l.level == n)
            .cloned()
            .unwrap_or_else(|| default_level(n))
    })
}
