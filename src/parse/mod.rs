pub mod preprocess;
pub mod report_parser;
pub mod report_serializer;

pub use preprocess::preprocess;
pub use report_parser::parse_report;
pub use report_serializer::serialize_report;
