use std::fs;
use std::io::Read;

use crate::cli::commands::{Cli, Commands, ConvertArgs, ImportArgs};
use crate::cli::output::{ConvertJson, ImportJson, PresetJson};
use crate::model::level::{LevelConfig, default_levels};
use crate::model::preset::{PresetStore, built_in_presets};
use crate::ops::convert::convert_with_config;
use crate::ops::import::convert_report;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        Commands::Convert(args) => cmd_convert(args, json),
        Commands::Import(args) => cmd_import(args, json),
        Commands::Presets => cmd_presets(json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read the given file, or stdin when no file was named
fn read_input(file: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e).into())
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Load level markers from an exported preset JSON file
fn load_preset_levels(path: &str) -> Result<Vec<LevelConfig>, Box<dyn std::error::Error>> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))?;
    let mut store = PresetStore::new();
    store
        .import_json(&json)
        .map_err(|e| format!("preset '{}': {}", path, e))?;
    Ok(store.current().levels.clone())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_convert(args: ConvertArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = read_input(args.file.as_deref())?;
    let levels = match args.preset.as_deref() {
        Some(path) => load_preset_levels(path)?,
        None => default_levels(),
    };

    let text = convert_with_config(&markdown, &levels);
    if json {
        println!("{}", serde_json::to_string_pretty(&ConvertJson { text })?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_import(args: ImportArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_deref())?;
    let result = convert_report(&input);

    if args.stats {
        eprintln!(
            "{} projects, {} grouped, {} duplicates removed, {} lines",
            result.stats.projects,
            result.stats.groupings,
            result.stats.duplicates_removed,
            result.stats.total_lines
        );
    }

    if json {
        let out = ImportJson {
            text: result.text,
            stats: result.stats,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", result.text);
    }
    Ok(())
}

fn cmd_presets(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let presets = built_in_presets();

    if json {
        let out: Vec<PresetJson> = presets
            .into_iter()
            .map(|p| PresetJson {
                id: p.id,
                name: p.name,
                levels: p.levels,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for preset in presets {
            let markers: Vec<String> = preset
                .levels
                .iter()
                .map(|l| format!("{}/{}", l.prefix, l.indent))
                .collect();
            println!("{:<10} {:<10} {}", preset.id, preset.name, markers.join(" "));
        }
    }
    Ok(())
}
