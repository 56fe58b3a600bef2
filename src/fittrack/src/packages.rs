use std::{fs, path::Path};

use anyhow::Context as _;
use fittrack_types::trainings::TrainingPackage;

/// Packets bundled with the binary, used when no input file is given.
pub fn default_packages() -> Vec<TrainingPackage> {
    vec![
        TrainingPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        TrainingPackage::new("RUN", [15000.0, 1.0, 75.0]),
        TrainingPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of packets, e.g.
/// `[{"workout_type": "RUN", "data": [15000, 1, 75]}]`.
pub fn load_packages(path: &Path) -> anyhow::Result<Vec<TrainingPackage>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read packages from `{}`", path.display()))?;
    parse_packages(&raw).with_context(|| format!("Invalid packages file `{}`", path.display()))
}

pub fn parse_packages(raw: &str) -> anyhow::Result<Vec<TrainingPackage>> {
    Ok(serde_json::from_str(raw)?)
}
