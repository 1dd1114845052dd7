use serde::Serialize;

use crate::model::level::LevelConfig;
use crate::ops::import::ConversionStats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ConvertJson {
    pub text: String,
}

#[derive(Serialize)]
pub struct ImportJson {
    pub text: String,
    pub stats: ConversionStats,
}

#[derive(Serialize)]
pub struct PresetJson {
    pub id: String,
    pub name: String,
    pub levels: Vec<LevelConfig>,
}
