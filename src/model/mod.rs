pub mod level;
pub mod preset;
pub mod report;

pub use level::*;
pub use preset::*;
pub use report::*;
