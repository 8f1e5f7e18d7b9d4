use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::validator::ValidatorOptions;

/// Description complète d'un jeu d'icônes à générer.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ift_core::config::{IconSetConfig, Language};
/// let config = IconSetConfig::default();
/// assert_eq!(config.prefix, "ICON_");
/// assert_eq!(config.language, Language::Rust);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct IconSetConfig {
    // === Police ===
    /// Webfont file name. `None` = take it from the feed.
    pub font_file: Option<String>,
    /// Font tag suffixing the font-file constant (`FAB`, `KI`).
    pub abbreviation: Option<String>,
    /// Declared lower bound. `None` = smallest codepoint of the feed.
    pub min: Option<u32>,
    /// Declared 16-bit upper bound. `None` = largest BMP codepoint of the feed.
    pub max_16: Option<u32>,
    /// Declared upper bound. `None` = largest codepoint of the feed.
    pub max: Option<u32>,

    // === Feed ===
    /// Metadata file to read.
    pub feed_path: Option<PathBuf>,
    /// Format of `feed_path`.
    pub feed_format: FeedFormat,
    /// Font Awesome style to keep ("brands", "solid", "regular").
    pub style: String,
    /// CSS class prefix stripped from rule names ("ki-").
    pub css_prefix: String,
    /// Emit Font Awesome alias names as extra entries.
    pub include_aliases: bool,

    // === Validation ===
    /// Record shared codepoints as aliases instead of errors.
    pub allow_aliases: bool,
    /// Treat warnings as errors.
    pub strict: bool,

    // === Emission ===
    /// Output language.
    pub language: Language,
    /// Prefix of every generated constant.
    pub prefix: String,
    /// Output file. `None` = stdout.
    pub output: Option<PathBuf>,
}

/// Metadata feed format.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// Font Awesome `icons.json`.
    #[default]
    FontAwesome,
    /// Stylesheet with `.prefix-name:before { content: "\e900"; }` rules.
    Css,
    /// TOML manifest with `[[icon]]` entries.
    Manifest,
}

/// Generated source language.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Rust module of `pub const` items.
    #[default]
    Rust,
    /// C/C++ header of `#define`s.
    C,
    /// Python class.
    Python,
    /// C# static class.
    CSharp,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            font_file: None,
            abbreviation: None,
            min: None,
            max_16: None,
            max: None,
            feed_path: None,
            feed_format: FeedFormat::FontAwesome,
            style: "brands".to_string(),
            css_prefix: String::new(),
            include_aliases: false,
            allow_aliases: true,
            strict: false,
            language: Language::Rust,
            prefix: "ICON_".to_string(),
            output: None,
        }
    }
}

impl IconSetConfig {
    /// Normalize free-form fields after deserialization.
    pub fn sanitize(&mut self) {
        if let Some(abbr) = self.abbreviation.as_mut() {
            *abbr = abbr.trim().to_ascii_uppercase();
        }
        if self.abbreviation.as_deref() == Some("") {
            self.abbreviation = None;
        }
        self.style = self.style.trim().to_ascii_lowercase();
        self.css_prefix = self.css_prefix.trim().trim_start_matches('.').to_string();
        self.prefix.retain(|c| c.is_ascii_alphanumeric() || c == '_');
    }

    /// Validator options derived from the `[validate]` section.
    #[must_use]
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            allow_aliases: self.allow_aliases,
            strict: self.strict,
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    font: Option<FontSection>,
    feed: Option<FeedSection>,
    validate: Option<ValidateSection>,
    emit: Option<EmitSection>,
}

#[derive(Deserialize)]
struct FontSection {
    file_name: Option<String>,
    abbreviation: Option<String>,
    min: Option<u32>,
    max_16: Option<u32>,
    max: Option<u32>,
}

#[derive(Deserialize)]
struct FeedSection {
    path: Option<PathBuf>,
    format: Option<FeedFormat>,
    style: Option<String>,
    css_prefix: Option<String>,
    include_aliases: Option<bool>,
}

#[derive(Deserialize)]
struct ValidateSection {
    allow_aliases: Option<bool>,
    strict: Option<bool>,
}

#[derive(Deserialize)]
struct EmitSection {
    language: Option<Language>,
    prefix: Option<String>,
    output: Option<PathBuf>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// Relative feed and output paths are resolved against the directory of the
/// config file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ift_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/fa-brands.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<IconSetConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    parse_config(&content, base)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse TOML text; relative paths are joined onto `base`.
///
/// # Errors
/// Returns an error if the text is not a valid config.
pub fn parse_config(content: &str, base: &Path) -> Result<IconSetConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = IconSetConfig::default();

    if let Some(f) = file.font {
        if let Some(v) = f.file_name {
            config.font_file = Some(v);
        }
        if let Some(v) = f.abbreviation {
            config.abbreviation = Some(v);
        }
        config.min = f.min.or(config.min);
        config.max_16 = f.max_16.or(config.max_16);
        config.max = f.max.or(config.max);
    }

    if let Some(f) = file.feed {
        if let Some(v) = f.path {
            config.feed_path = Some(resolve(base, v));
        }
        if let Some(v) = f.format {
            config.feed_format = v;
        }
        if let Some(v) = f.style {
            config.style = v;
        }
        if let Some(v) = f.css_prefix {
            config.css_prefix = v;
        }
        if let Some(v) = f.include_aliases {
            config.include_aliases = v;
        }
    }

    if let Some(v) = file.validate {
        if let Some(b) = v.allow_aliases {
            config.allow_aliases = b;
        }
        if let Some(b) = v.strict {
            config.strict = b;
        }
    }

    if let Some(e) = file.emit {
        if let Some(v) = e.language {
            config.language = v;
        }
        if let Some(v) = e.prefix {
            config.prefix = v;
        }
        if let Some(v) = e.output {
            config.output = Some(resolve(base, v));
        }
    }

    config.sanitize();
    Ok(config)
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRANDS: &str = r#"
[font]
file_name = "fa-brands-400.ttf"
abbreviation = "fab"
min = 0xe007
max_16 = 0xf8e8
max = 0xf8e8

[feed]
path = "metadata/icons.json"
format = "fontawesome"
style = "Brands"

[emit]
language = "csharp"
"#;

    #[test]
    fn full_file_overrides_defaults() {
        let config = parse_config(BRANDS, Path::new("/sets")).unwrap();
        assert_eq!(config.font_file.as_deref(), Some("fa-brands-400.ttf"));
        assert_eq!(config.abbreviation.as_deref(), Some("FAB"));
        assert_eq!(config.min, Some(0xe007));
        assert_eq!(config.max_16, Some(0xf8e8));
        assert_eq!(config.style, "brands");
        assert_eq!(config.language, Language::CSharp);
        assert_eq!(
            config.feed_path.as_deref(),
            Some(Path::new("/sets/metadata/icons.json"))
        );
        // Untouched sections keep their defaults.
        assert!(config.allow_aliases);
        assert_eq!(config.prefix, "ICON_");
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("", Path::new(".")).unwrap();
        assert_eq!(config, IconSetConfig::default());
    }

    #[test]
    fn css_feed_section() {
        let config = parse_config(
            "[feed]\nformat = \"css\"\ncss_prefix = \".ki-\"\n[validate]\nstrict = true\n",
            Path::new("."),
        )
        .unwrap();
        assert_eq!(config.feed_format, FeedFormat::Css);
        assert_eq!(config.css_prefix, "ki-");
        assert!(config.validator_options().strict);
    }

    #[test]
    fn unknown_language_is_an_error() {
        assert!(parse_config("[emit]\nlanguage = \"cobol\"\n", Path::new(".")).is_err());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brands.toml");
        std::fs::write(&path, BRANDS).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.feed_path, Some(dir.path().join("metadata/icons.json")));
    }

    #[test]
    fn prefix_sanitized_to_identifier_chars() {
        let config = parse_config("[emit]\nprefix = \"ICON-\"\n", Path::new(".")).unwrap();
        assert_eq!(config.prefix, "ICON");
    }
}
