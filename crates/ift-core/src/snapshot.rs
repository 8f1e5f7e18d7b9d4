use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codepoint;
use crate::error::IconError;
use crate::table::{Bounds, IconEntry, IconTable};

/// Serialized form of an [`IconTable`]. Codepoints are written in `U+XXXX`
/// notation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Webfont file name.
    pub font_file: String,
    /// Font tag, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    /// Lower bound.
    pub min: String,
    /// 16-bit upper bound.
    pub max_16: String,
    /// Upper bound.
    pub max: String,
    /// Entries in table order.
    pub entries: Vec<SnapshotEntry>,
}

/// One serialized entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// Canonical name.
    pub name: String,
    /// Codepoint in `U+XXXX` notation.
    pub codepoint: String,
}

impl From<&IconTable> for TableSnapshot {
    fn from(table: &IconTable) -> Self {
        let bounds = table.bounds();
        Self {
            font_file: table.font_file().to_string(),
            abbreviation: table.abbreviation().map(str::to_string),
            min: codepoint::notation(bounds.min),
            max_16: codepoint::notation(bounds.max_16),
            max: codepoint::notation(bounds.max),
            entries: table
                .entries()
                .map(|(name, cp)| SnapshotEntry {
                    name: name.to_string(),
                    codepoint: codepoint::notation(cp),
                })
                .collect(),
        }
    }
}

impl TryFrom<TableSnapshot> for IconTable {
    type Error = IconError;

    /// Structural checks only: bounds must parse and be ordered, every
    /// codepoint must be one scalar, names must be non-empty. Range, alias and
    /// duplicate checks belong to the validator.
    fn try_from(snapshot: TableSnapshot) -> Result<Self, Self::Error> {
        let bound = |label: &str, text: &str| {
            codepoint::parse_literal(text)
                .map(u32::from)
                .ok_or_else(|| IconError::Unreadable(format!("borne {label} illisible : {text:?}")))
        };
        let bounds = Bounds::new(
            bound("min", &snapshot.min)?,
            bound("max_16", &snapshot.max_16)?,
            bound("max", &snapshot.max)?,
        )
        .map_err(|e| IconError::Unreadable(e.to_string()))?;

        let entries = snapshot
            .entries
            .into_iter()
            .map(|e| {
                if e.name.is_empty() {
                    return Err(IconError::Unreadable("entrée sans nom".to_string()));
                }
                let cp = codepoint::parse_literal(&e.codepoint).ok_or_else(|| {
                    IconError::Unreadable(format!("{} : codepoint {:?}", e.name, e.codepoint))
                })?;
                Ok(IconEntry {
                    name: e.name,
                    codepoint: cp,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IconTable::from_parts(
            snapshot.font_file,
            snapshot.abbreviation,
            bounds,
            entries,
        ))
    }
}

/// Serialize a table to pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(table: &IconTable) -> Result<String> {
    serde_json::to_string_pretty(&TableSnapshot::from(table)).context("Sérialisation JSON de la table")
}

/// Read a table back from JSON.
///
/// # Errors
/// Returns [`IconError::Unreadable`] if the JSON does not describe a table.
///
/// # Example
/// ```
/// use ift_core::builder::build;
/// use ift_core::snapshot::{from_json, to_json};
/// let table = build("fa-brands-400.ttf", 0xe007, 0xf8e8, [("github", "\u{f09b}")]).unwrap();
/// let back = from_json(&to_json(&table).unwrap()).unwrap();
/// assert_eq!(back.lookup("GITHUB").unwrap(), '\u{f09b}');
/// ```
pub fn from_json(json: &str) -> Result<IconTable, IconError> {
    let snapshot: TableSnapshot =
        serde_json::from_str(json).map_err(|e| IconError::Unreadable(e.to_string()))?;
    IconTable::try_from(snapshot)
}

/// Write a snapshot file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn save(table: &IconTable, path: &Path) -> Result<()> {
    let json = to_json(table)?;
    std::fs::write(path, json).with_context(|| format!("Impossible d'écrire {}", path.display()))
}

/// Read a snapshot file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a table.
pub fn load(path: &Path) -> Result<IconTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    from_json(&content).with_context(|| format!("Snapshot invalide : {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TableBuilder;
    use crate::validator::{IssueKind, validate};

    #[test]
    fn snapshot_uses_u_plus_notation() {
        let table = TableBuilder::new("fa-brands-400.ttf", 0xe007, 0xf8e8)
            .abbreviation("FAB")
            .build([("github", "\u{f09b}")])
            .unwrap();
        let snap = TableSnapshot::from(&table);
        assert_eq!(snap.min, "U+E007");
        assert_eq!(snap.entries[0].codepoint, "U+F09B");
        assert_eq!(snap.entries[0].name, "GITHUB");
        assert_eq!(snap.abbreviation.as_deref(), Some("FAB"));
    }

    #[test]
    fn garbage_is_unreadable() {
        assert!(matches!(from_json("{"), Err(IconError::Unreadable(_))));
        assert!(matches!(from_json("[]"), Err(IconError::Unreadable(_))));
    }

    #[test]
    fn inverted_bounds_are_unreadable() {
        let json = r#"{"font_file":"x.ttf","min":"U+F000","max_16":"U+E000","max":"U+E000","entries":[]}"#;
        assert!(matches!(from_json(json), Err(IconError::Unreadable(_))));
    }

    #[test]
    fn multi_scalar_codepoint_is_unreadable() {
        let json = r#"{"font_file":"x.ttf","min":"U+E000","max_16":"U+E0FF","max":"U+E0FF",
            "entries":[{"name":"A","codepoint":"U+E000 U+E001"}]}"#;
        assert!(matches!(from_json(json), Err(IconError::Unreadable(_))));
    }

    #[test]
    fn data_problems_survive_loading_for_the_validator() {
        let json = r#"{"font_file":"x.ttf","min":"U+E000","max_16":"U+E001","max":"U+E001",
            "entries":[{"name":"A","codepoint":"U+E000"},{"name":"B","codepoint":"U+F000"},
                       {"name":"A","codepoint":"U+E001"}]}"#;
        let table = from_json(json).unwrap();
        let report = validate(&table);
        let kinds: Vec<_> = report.errors.iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&IssueKind::OutOfRange));
        assert!(kinds.contains(&IssueKind::DuplicateName));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brands.json");
        let table = TableBuilder::new("fa-brands-400.ttf", 0xe007, 0xf8e8)
            .build([("github", "\u{f09b}"), ("twitter", "\u{f099}")])
            .unwrap();
        save(&table, &path).unwrap();
        let back = load(&path).unwrap();
        assert_eq!(back.as_slice(), table.as_slice());
        assert_eq!(back.bounds(), table.bounds());
    }
}
