/// Constants-module emitters for icon tables.

pub mod c;
pub mod csharp;
pub mod python;
pub mod rust;

use std::path::Path;

use anyhow::{Context, Result};
use ift_core::IconTable;
use ift_core::config::{IconSetConfig, Language};

/// Tool name written in generated-file banners.
pub const GENERATOR: &str = "iftgen";

/// Emission settings.
///
/// # Example
/// ```
/// use ift_emit::EmitOptions;
/// let opts = EmitOptions::default();
/// assert_eq!(opts.prefix, "ICON_");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prefix of every icon constant.
    pub prefix: String,
    /// Type/class name for languages that wrap constants (Python, C#).
    /// `None` = derived from the font tag or file name.
    pub type_name: Option<String>,
    /// Where the codepoints came from, for the banner.
    pub source: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            prefix: "ICON_".to_string(),
            type_name: None,
            source: None,
        }
    }
}

impl EmitOptions {
    /// Options from the `[emit]` section of a config.
    #[must_use]
    pub fn from_config(config: &IconSetConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            type_name: None,
            source: config
                .feed_path
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned()),
        }
    }

    /// Name of the wrapping type: `Icons` + the PascalCase font tag (or file stem).
    #[must_use]
    pub fn type_name_for(&self, table: &IconTable) -> String {
        if let Some(name) = &self.type_name {
            return name.clone();
        }
        let tag = table.abbreviation().map_or_else(
            || {
                let file = table.font_file();
                file.rsplit_once('.').map_or(file, |(stem, _)| stem).to_string()
            },
            str::to_string,
        );
        let tag = ift_core::naming::canonicalize(&tag).unwrap_or_default();
        format!("Icons{}", pascal_case(&tag).trim_start_matches('_'))
    }
}

/// Render a table in `language`.
///
/// # Errors
/// Returns an error if formatting fails.
///
/// # Example
/// ```
/// use ift_core::builder::build;
/// use ift_core::config::Language;
/// use ift_emit::{EmitOptions, emit};
/// let table = build("fa-brands-400.ttf", 0xe007, 0xf8e8, [("github", "\u{f09b}")]).unwrap();
/// let code = emit(&table, Language::Rust, &EmitOptions::default()).unwrap();
/// assert!(code.contains("pub const ICON_GITHUB: &str = \"\\u{f09b}\";"));
/// ```
pub fn emit(table: &IconTable, language: Language, options: &EmitOptions) -> Result<String> {
    let rendered = match language {
        Language::Rust => rust::render(table, options),
        Language::C => c::render(table, options),
        Language::Python => python::render(table, options),
        Language::CSharp => csharp::render(table, options),
    };
    rendered.with_context(|| format!("Génération {language:?} pour {}", table.font_file()))
}

/// Render and write to `path`.
///
/// # Errors
/// Returns an error if rendering fails or the file cannot be written.
pub fn emit_to_file(
    table: &IconTable,
    language: Language,
    options: &EmitOptions,
    path: &Path,
) -> Result<()> {
    let code = emit(table, language, options)?;
    std::fs::write(path, code).with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!("{} constantes écrites dans {}", table.size(), path.display());
    Ok(())
}

/// Constant identifier for a canonical name: `prefix` + name. A name made
/// identifier-safe with a leading `_` drops it when a prefix is present.
///
/// # Example
/// ```
/// use ift_emit::constant_name;
/// assert_eq!(constant_name("ICON_", "_42_GROUP"), "ICON_42_GROUP");
/// assert_eq!(constant_name("", "_42_GROUP"), "_42_GROUP");
/// assert_eq!(constant_name("ICON_FA_", "GITHUB"), "ICON_FA_GITHUB");
/// ```
#[must_use]
pub fn constant_name(prefix: &str, canonical: &str) -> String {
    if prefix.is_empty() {
        canonical.to_string()
    } else {
        format!("{prefix}{}", canonical.trim_start_matches('_'))
    }
}

/// Suffix `_TAG` for names that share a global namespace (C headers).
#[must_use]
pub fn tagged(name: &str, table: &IconTable) -> String {
    match table.abbreviation() {
        Some(tag) => format!("{name}_{tag}"),
        None => name.to_string(),
    }
}

/// PascalCase form of an uppercase snake-case identifier. A leading digit
/// keeps an `_` in front.
///
/// # Example
/// ```
/// use ift_emit::pascal_case;
/// assert_eq!(pascal_case("SHOPPING_CART"), "ShoppingCart");
/// assert_eq!(pascal_case("_42_GROUP"), "_42Group");
/// assert_eq!(pascal_case("BUTTON_L1"), "ButtonL1");
/// ```
#[must_use]
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split('_').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Body of a quoted string literal for C-family and Python sources:
/// backslashes, the quote character and line breaks are escaped.
///
/// # Example
/// ```
/// use ift_emit::quoted;
/// assert_eq!(quoted("it's \"odd\".ttf", '"'), "it's \\\"odd\\\".ttf");
/// assert_eq!(quoted("it's.ttf", '\''), "it\\'s.ttf");
/// ```
#[must_use]
pub fn quoted(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Banner lines shared by every language, without comment markers.
pub(crate) fn banner(table: &IconTable, options: &EmitOptions, language: &str) -> Vec<String> {
    let mut lines = vec![format!("Generated by {GENERATOR} for {language}. Do not edit.")];
    if let Some(source) = &options.source {
        lines.push(format!("from codepoints {source}"));
    }
    lines.push(format!("for use with font {}", table.font_file()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ift_core::TableBuilder;

    #[test]
    fn type_name_prefers_abbreviation() {
        let table = TableBuilder::new("fa-brands-400.ttf", 0xe007, 0xf8e8)
            .abbreviation("FAB")
            .build([("github", "\u{f09b}")])
            .unwrap();
        assert_eq!(EmitOptions::default().type_name_for(&table), "IconsFab");
    }

    #[test]
    fn type_name_from_file_stem() {
        let table = TableBuilder::new("kenney-icon-font.ttf", 0xe900, 0xe9e3)
            .build([("home", "\u{e900}")])
            .unwrap();
        assert_eq!(EmitOptions::default().type_name_for(&table), "IconsKenneyIconFont");
    }

    #[test]
    fn explicit_type_name_wins() {
        let table = TableBuilder::new("a.ttf", 0xe000, 0xe000).build([("a", "\u{e000}")]).unwrap();
        let opts = EmitOptions {
            type_name: Some("Kenney".into()),
            ..EmitOptions::default()
        };
        assert_eq!(opts.type_name_for(&table), "Kenney");
    }

    #[test]
    fn emit_to_file_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.py");
        let table = TableBuilder::new("a.ttf", 0xe000, 0xe000).build([("a", "\u{e000}")]).unwrap();
        emit_to_file(&table, Language::Python, &EmitOptions::default(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("ICON_A = '\\ue000'"));
    }

    #[test]
    fn options_from_config_name_the_feed() {
        let config = IconSetConfig {
            feed_path: Some("/data/metadata/icons.json".into()),
            prefix: "ICON_FA_".into(),
            ..IconSetConfig::default()
        };
        let opts = EmitOptions::from_config(&config);
        assert_eq!(opts.source.as_deref(), Some("icons.json"));
        assert_eq!(opts.prefix, "ICON_FA_");
    }

    #[test]
    fn odd_tag_and_file_name_stay_valid_source() {
        let table = TableBuilder::new("it's \"odd\".ttf", 0xe900, 0xe900)
            .abbreviation("k-i")
            .build([("home", "\u{e900}")])
            .unwrap();
        let opts = EmitOptions::default();

        let rust = emit(&table, Language::Rust, &opts).unwrap();
        assert!(rust.contains("pub const FONT_ICON_FILE_NAME_K_I: &str = \"it's \\\"odd\\\".ttf\";"));

        let c = emit(&table, Language::C, &opts).unwrap();
        assert!(c.contains("#define FONT_ICON_FILE_NAME_K_I \"it's \\\"odd\\\".ttf\""));
        assert!(c.contains("#define ICON_MIN_K_I 0xe900"));

        let py = emit(&table, Language::Python, &opts).unwrap();
        assert!(py.contains("    FONT_ICON_FILE_NAME_K_I = 'it\\'s \"odd\".ttf'"));
        assert!(py.contains("class IconsKI:"));

        let cs = emit(&table, Language::CSharp, &opts).unwrap();
        assert!(cs.contains("public const string FontIconFileNameK_I = \"it's \\\"odd\\\".ttf\";"));
    }
}
