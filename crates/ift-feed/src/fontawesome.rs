use anyhow::{Context, Result};
use indexmap::IndexMap;
use ift_core::codepoint;
use serde::Deserialize;

use crate::{IconFeed, RawEntry};

/// One icon of Font Awesome's `metadata/icons.json`. Unused fields are ignored.
#[derive(Deserialize)]
struct FaIcon {
    /// Digits-only hex codepoint, e.g. "f09b".
    unicode: String,
    #[serde(default)]
    styles: Vec<String>,
    #[serde(default)]
    aliases: Option<FaAliases>,
}

#[derive(Deserialize)]
struct FaAliases {
    #[serde(default)]
    names: Vec<String>,
}

/// Webfont file and font tag shipped for a Font Awesome style.
#[must_use]
pub fn font_for_style(style: &str) -> (&'static str, &'static str) {
    match style {
        "brands" => ("fa-brands-400.ttf", "FAB"),
        "regular" => ("fa-regular-400.ttf", "FAR"),
        _ => ("fa-solid-900.ttf", "FAS"),
    }
}

/// Parse `icons.json`, keeping icons that ship in `style`.
///
/// Icons keep the order of the metadata file. With `include_aliases`, each
/// alias name becomes an extra entry sharing the primary codepoint, right
/// after its icon.
///
/// # Errors
/// Returns an error if the text is not a Font Awesome metadata object.
///
/// # Example
/// ```
/// use ift_feed::fontawesome::parse;
/// let json = r#"{"github": {"unicode": "f09b", "styles": ["brands"]},
///                "house": {"unicode": "f015", "styles": ["solid"]}}"#;
/// let feed = parse(json, "brands", false).unwrap();
/// assert_eq!(feed.font_file, "fa-brands-400.ttf");
/// assert_eq!(feed.entries.len(), 1);
/// ```
pub fn parse(json: &str, style: &str, include_aliases: bool) -> Result<IconFeed> {
    let icons: IndexMap<String, FaIcon> =
        serde_json::from_str(json).context("Métadonnées Font Awesome illisibles")?;

    let mut entries = Vec::with_capacity(icons.len());
    let mut skipped = 0usize;
    for (id, icon) in icons {
        if !icon.styles.iter().any(|s| s == style) {
            skipped += 1;
            continue;
        }
        // Unreadable fields pass through so the builder names the entry.
        let unicode = codepoint::from_hex(&icon.unicode)
            .map_or(icon.unicode, |ch| format!("\\u{{{:x}}}", u32::from(ch)));
        if include_aliases {
            let aliases = icon.aliases.map(|a| a.names).unwrap_or_default();
            entries.push(RawEntry::new(id, unicode.clone()));
            entries.extend(
                aliases
                    .into_iter()
                    .map(|alias| RawEntry::new(alias, unicode.clone())),
            );
        } else {
            entries.push(RawEntry::new(id, unicode));
        }
    }
    log::debug!("Font Awesome {style} : {} icônes retenues, {skipped} ignorées", entries.len());

    let (font_file, abbreviation) = font_for_style(style);
    Ok(IconFeed {
        font_file: font_file.to_string(),
        abbreviation: Some(abbreviation.to_string()),
        entries,
        ..IconFeed::default()
    })
}
