use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{IconFeed, RawEntry};

#[derive(Deserialize)]
struct Manifest {
    font_file: String,
    abbreviation: Option<String>,
    min: Option<u32>,
    max_16: Option<u32>,
    max: Option<u32>,
    #[serde(default, rename = "icon")]
    icons: Vec<RawEntry>,
}

/// Parse a TOML manifest feed.
///
/// ```toml
/// font_file = "kenney-icon-font.ttf"
/// abbreviation = "KI"
/// min = 0xe900
/// max = 0xe9e3
///
/// [[icon]]
/// name = "home"
/// codepoint = "U+E900"
/// ```
///
/// # Errors
/// Returns an error if the TOML does not match the manifest layout.
pub fn parse(text: &str) -> Result<IconFeed> {
    let manifest: Manifest = toml::from_str(text).context("Manifeste TOML illisible")?;
    Ok(IconFeed {
        font_file: manifest.font_file,
        abbreviation: manifest.abbreviation,
        min: manifest.min,
        max_16: manifest.max_16,
        max: manifest.max,
        entries: manifest.icons,
    })
}
