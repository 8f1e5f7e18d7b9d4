use thiserror::Error;

/// Errors originating from table construction, lookup and snapshot loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// Raw icon name is empty or has no alphanumeric character left after normalization.
    #[error("Nom d'icône invalide : {raw:?}")]
    InvalidName {
        /// Name as supplied by the feed.
        raw: String,
    },

    /// Two raw names normalize to the same canonical name with different codepoints.
    #[error("Nom dupliqué : {name} (U+{first:04X} et U+{second:04X})")]
    DuplicateName {
        /// Canonical name shared by both entries.
        name: String,
        /// Codepoint of the entry seen first.
        first: u32,
        /// Codepoint of the conflicting entry.
        second: u32,
    },

    /// Literal does not denote exactly one Unicode scalar value.
    #[error("Codepoint mal formé pour {name} : {literal:?}")]
    MalformedCodepoint {
        /// Raw name of the offending entry.
        name: String,
        /// Literal as supplied by the feed.
        literal: String,
    },

    /// Codepoint falls outside the declared glyph range.
    #[error("Codepoint hors bornes pour {name} : U+{codepoint:04X} hors de [U+{min:04X}, U+{max:04X}]")]
    OutOfRange {
        /// Canonical name of the offending entry.
        name: String,
        /// The codepoint.
        codepoint: u32,
        /// Declared lower bound.
        min: u32,
        /// Declared upper bound.
        max: u32,
    },

    /// Declared bounds are not valid scalar values or are not ordered.
    #[error("Bornes invalides : {0}")]
    InvalidBounds(String),

    /// Lookup of a name the table does not contain.
    #[error("Icône inconnue : {0}")]
    UnknownIcon(String),

    /// Serialized table cannot be read back as a table.
    #[error("Table illisible : {0}")]
    Unreadable(String),
}
