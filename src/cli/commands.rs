use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdr", about = concat!("[#] mdreport v", env!("CARGO_PKG_VERSION"), " - markdown in, report out"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert markdown headings to report format
    Convert(ConvertArgs),
    /// Normalize a pasted report dump: group, dedup, re-emit markdown
    Import(ImportArgs),
    /// List the built-in presets
    Presets,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input file (stdin when omitted)
    pub file: Option<String>,

    /// Take level markers from an exported preset JSON file
    #[arg(long)]
    pub preset: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Input file (stdin when omitted)
    pub file: Option<String>,

    /// Print conversion statistics to stderr
    #[arg(long)]
    pub stats: bool,
}
