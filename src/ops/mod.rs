pub mod convert;
pub mod import;
pub mod merge;
pub mod shortcuts;

pub use convert::{convert_markdown_to_report, convert_with_config};
pub use import::{ConversionResult, ConversionStats, ImportSession, convert_report};
pub use merge::{MergeMode, apply_merge};
pub use shortcuts::expand_trailing_shortcut;
