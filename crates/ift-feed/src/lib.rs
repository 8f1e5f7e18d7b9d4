/// Icon metadata feed readers.
///
/// A feed is the raw `(name, codepoint literal)` sequence of one icon font plus
/// whatever the source declares about the font. Readers never validate
/// codepoints: that is the job of `ift_core::TableBuilder`.

pub mod css;
pub mod fontawesome;
pub mod manifest;

use std::path::Path;

use anyhow::{Context, Result};
use ift_core::codepoint::{self, BMP_MAX};
use ift_core::config::{FeedFormat, IconSetConfig};
use ift_core::table::Bounds;
use ift_core::{IconError, IconTable, TableBuilder};
use serde::Deserialize;

/// One raw feed entry, as read from the source.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    /// Icon name as the source spells it.
    pub name: String,
    /// Codepoint literal in any form `ift_core::codepoint::parse_literal` accepts.
    pub codepoint: String,
}

impl RawEntry {
    /// Convenience constructor.
    #[must_use]
    pub fn new(name: impl Into<String>, codepoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            codepoint: codepoint.into(),
        }
    }
}

/// Raw metadata of one icon font.
///
/// # Example
/// ```
/// use ift_feed::{IconFeed, RawEntry};
/// let feed = IconFeed {
///     font_file: "kenney-icon-font.ttf".into(),
///     entries: vec![RawEntry::new("home", "\u{e900}"), RawEntry::new("cog", "\u{e903}")],
///     ..IconFeed::default()
/// };
/// let table = feed.into_table().unwrap();
/// assert_eq!(table.range(), ('\u{e900}', '\u{e903}'));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconFeed {
    /// Webfont file name.
    pub font_file: String,
    /// Font tag for emitted constants.
    pub abbreviation: Option<String>,
    /// Declared lower bound, if the source has one.
    pub min: Option<u32>,
    /// Declared 16-bit upper bound, if the source has one.
    pub max_16: Option<u32>,
    /// Declared upper bound, if the source has one.
    pub max: Option<u32>,
    /// Entries in source order.
    pub entries: Vec<RawEntry>,
}

impl IconFeed {
    /// Config values take precedence over what the feed declares.
    pub fn apply_config(&mut self, config: &IconSetConfig) {
        if let Some(v) = &config.font_file {
            self.font_file.clone_from(v);
        }
        if let Some(v) = &config.abbreviation {
            self.abbreviation = Some(v.clone());
        }
        self.min = config.min.or(self.min);
        self.max_16 = config.max_16.or(self.max_16);
        self.max = config.max.or(self.max);
    }

    /// Declared bounds, completing missing ones from the entries: `min` and
    /// `max` are the extreme codepoints, `max_16` the largest one in the BMP.
    ///
    /// # Errors
    /// Returns [`IconError::InvalidBounds`] if a bound is missing and no entry
    /// has a readable codepoint to derive it from.
    pub fn bounds(&self) -> Result<(u32, u32, u32), IconError> {
        let parsed: Vec<u32> = self
            .entries
            .iter()
            .filter_map(|e| codepoint::parse_literal(&e.codepoint))
            .map(u32::from)
            .collect();
        let missing = || {
            IconError::InvalidBounds(format!(
                "{} : bornes absentes et aucun codepoint lisible",
                self.font_file
            ))
        };

        let min = match self.min {
            Some(v) => v,
            None => parsed.iter().copied().min().ok_or_else(missing)?,
        };
        let max = match self.max {
            Some(v) => v,
            None => parsed.iter().copied().max().ok_or_else(missing)?,
        };
        let max_16 = self.max_16.unwrap_or_else(|| {
            parsed
                .iter()
                .copied()
                .filter(|&cp| cp <= BMP_MAX.min(max))
                .max()
                .unwrap_or_else(|| Bounds::default_max_16(max))
        });
        Ok((min, max_16, max))
    }

    /// Build the table for this feed.
    ///
    /// # Errors
    /// Any construction error of [`TableBuilder::build`], or missing bounds.
    pub fn into_table(self) -> Result<IconTable, IconError> {
        let (min, max_16, max) = self.bounds()?;
        let mut builder = TableBuilder::new(self.font_file, min, max).max_16(max_16);
        if let Some(abbr) = self.abbreviation {
            builder = builder.abbreviation(abbr);
        }
        builder.build(self.entries.iter().map(|e| (&e.name, &e.codepoint)))
    }
}

/// Parse feed text in the format the config names.
///
/// # Errors
/// Returns an error if the text is not valid for that format.
pub fn parse_feed(text: &str, config: &IconSetConfig) -> Result<IconFeed> {
    let mut feed = match config.feed_format {
        FeedFormat::FontAwesome => fontawesome::parse(text, &config.style, config.include_aliases)?,
        FeedFormat::Css => css::parse(text, &config.css_prefix)?,
        FeedFormat::Manifest => manifest::parse(text)?,
    };
    feed.apply_config(config);
    if feed.font_file.is_empty() {
        anyhow::bail!("Nom du fichier de police inconnu : renseignez [font] file_name");
    }
    log::debug!(
        "Feed {:?} lu : {} entrées pour {}",
        config.feed_format,
        feed.entries.len(),
        feed.font_file
    );
    Ok(feed)
}

/// Read the feed file a config points to.
///
/// # Errors
/// Returns an error if no feed path is configured, or the file cannot be read
/// or parsed.
pub fn load_feed(config: &IconSetConfig) -> Result<IconFeed> {
    let Some(path) = config.feed_path.as_deref() else {
        anyhow::bail!("Aucun feed configuré : renseignez [feed] path ou --feed");
    };
    load_feed_from(path, config)
}

/// Read a feed file, with the format and overrides of `config`.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_feed_from(path: &Path, config: &IconSetConfig) -> Result<IconFeed> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_feed(&text, config).with_context(|| format!("Feed invalide : {}", path.display()))
}

/// Read and build in one step.
///
/// # Errors
/// Returns an error if the feed cannot be loaded or the table cannot be built.
pub fn build_table(config: &IconSetConfig) -> Result<IconTable> {
    let feed = load_feed(config)?;
    let table = feed.into_table()?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ift_core::config::FeedFormat;

    #[test]
    fn derives_bounds_like_upstream_headers() {
        let feed = IconFeed {
            font_file: "icons.ttf".into(),
            entries: vec![
                RawEntry::new("b", "\u{f8e8}"),
                RawEntry::new("a", "\u{e007}"),
                RawEntry::new("smile", "\u{1f600}"),
            ],
            ..IconFeed::default()
        };
        assert_eq!(feed.bounds().unwrap(), (0xe007, 0xf8e8, 0x1f600));
    }

    #[test]
    fn declared_bounds_win() {
        let feed = IconFeed {
            font_file: "icons.ttf".into(),
            min: Some(0xe000),
            max: Some(0xf8ff),
            entries: vec![RawEntry::new("a", "\u{e007}")],
            ..IconFeed::default()
        };
        assert_eq!(feed.bounds().unwrap(), (0xe000, 0xe007, 0xf8ff));
    }

    #[test]
    fn empty_feed_without_bounds_fails() {
        let feed = IconFeed {
            font_file: "icons.ttf".into(),
            ..IconFeed::default()
        };
        assert!(matches!(feed.into_table(), Err(IconError::InvalidBounds(_))));
    }

    #[test]
    fn config_overrides_feed() {
        let mut feed = IconFeed {
            font_file: "a.ttf".into(),
            min: Some(0xe000),
            ..IconFeed::default()
        };
        let config = IconSetConfig {
            font_file: Some("b.ttf".into()),
            abbreviation: Some("B".into()),
            min: Some(0xe100),
            ..IconSetConfig::default()
        };
        feed.apply_config(&config);
        assert_eq!(feed.font_file, "b.ttf");
        assert_eq!(feed.abbreviation.as_deref(), Some("B"));
        assert_eq!(feed.min, Some(0xe100));
    }

    #[test]
    fn css_feed_needs_font_file() {
        let config = IconSetConfig {
            feed_format: FeedFormat::Css,
            ..IconSetConfig::default()
        };
        let text = r#".ki-home:before { content: "\e900"; }"#;
        assert!(parse_feed(text, &config).is_err());

        let config = IconSetConfig {
            font_file: Some("kenney-icon-font.ttf".into()),
            css_prefix: "ki-".into(),
            ..config
        };
        let table = parse_feed(text, &config).unwrap().into_table().unwrap();
        assert_eq!(table.lookup("HOME").unwrap(), '\u{e900}');
    }

    #[test]
    fn load_feed_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        std::fs::write(
            &path,
            "font_file = \"k.ttf\"\n[[icon]]\nname = \"home\"\ncodepoint = \"U+E900\"\n",
        )
        .unwrap();
        let config = IconSetConfig {
            feed_format: FeedFormat::Manifest,
            feed_path: Some(path),
            ..IconSetConfig::default()
        };
        let table = build_table(&config).unwrap();
        assert_eq!(table.font_file(), "k.ttf");
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn missing_feed_path_is_reported() {
        let err = load_feed(&IconSetConfig::default()).unwrap_err();
        assert!(err.to_string().contains("feed"));
    }

    #[test]
    fn entry_above_declared_max_is_out_of_range() {
        let feed = manifest::parse(
            r#"
font_file = "x.ttf"
min = 0xe000
max = 0xe0ff

[[icon]]
name = "home"
codepoint = "U+E000"

[[icon]]
name = "stray"
codepoint = "U+F000"
"#,
        )
        .unwrap();
        assert_eq!(feed.bounds().unwrap(), (0xe000, 0xe000, 0xe0ff));
        assert_eq!(
            feed.into_table().unwrap_err(),
            IconError::OutOfRange {
                name: "STRAY".into(),
                codepoint: 0xf000,
                min: 0xe000,
                max: 0xe0ff,
            }
        );
    }
}
