use std::collections::HashMap;

use crate::codepoint::{self, BMP_MAX};
use crate::error::IconError;
use crate::naming;

/// One named glyph of an icon font.
///
/// # Example
/// ```
/// use ift_core::table::IconEntry;
/// let entry = IconEntry { name: "GITHUB".into(), codepoint: '\u{f09b}' };
/// assert_eq!(entry.code(), 0xf09b);
/// assert_eq!(entry.glyph(), "\u{f09b}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconEntry {
    /// Canonical name (uppercase snake-case).
    pub name: String,
    /// Unicode scalar value of the glyph.
    pub codepoint: char,
}

impl IconEntry {
    /// Numeric codepoint.
    #[inline]
    #[must_use]
    pub fn code(&self) -> u32 {
        u32::from(self.codepoint)
    }

    /// The glyph as a one-character string, ready to be inlined in text.
    #[must_use]
    pub fn glyph(&self) -> String {
        self.codepoint.to_string()
    }
}

/// Declared codepoint bounds of an icon font.
///
/// `max_16` is the upper bound usable by 16-bit glyph ranges. It is supplied
/// independently of `max` and only required not to exceed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Lowest codepoint.
    pub min: char,
    /// Highest codepoint reachable from 16-bit ranges.
    pub max_16: char,
    /// Highest codepoint.
    pub max: char,
}

impl Bounds {
    /// Check and convert numeric bounds.
    ///
    /// # Errors
    /// Returns [`IconError::InvalidBounds`] if a bound is not a scalar value,
    /// if `min > max`, or if `max_16 > max`.
    ///
    /// # Example
    /// ```
    /// use ift_core::table::Bounds;
    /// assert!(Bounds::new(0xe007, 0xf8e8, 0xf8e8).is_ok());
    /// assert!(Bounds::new(0xf8e8, 0xe007, 0xe007).is_err());
    /// ```
    pub fn new(min: u32, max_16: u32, max: u32) -> Result<Self, IconError> {
        let as_scalar = |label: &str, v: u32| {
            codepoint::scalar(v).ok_or_else(|| {
                IconError::InvalidBounds(format!("{label} = 0x{v:x} n'est pas un scalaire Unicode"))
            })
        };
        let bounds = Self {
            min: as_scalar("min", min)?,
            max_16: as_scalar("max_16", max_16)?,
            max: as_scalar("max", max)?,
        };
        if bounds.min > bounds.max {
            return Err(IconError::InvalidBounds(format!(
                "min 0x{min:x} > max 0x{max:x}"
            )));
        }
        if bounds.max_16 > bounds.max {
            return Err(IconError::InvalidBounds(format!(
                "max_16 0x{max_16:x} > max 0x{max:x}"
            )));
        }
        Ok(bounds)
    }

    /// Default 16-bit bound for a given `max`: `max` itself, capped to the BMP.
    #[inline]
    #[must_use]
    pub fn default_max_16(max: u32) -> u32 {
        max.min(BMP_MAX)
    }

    /// True if `ch` lies in `[min, max]`.
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        (self.min..=self.max).contains(&ch)
    }
}

/// Which upper bound a glyph range should stop at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Width {
    /// Stop at `max_16`, for atlases indexed by 16-bit code units.
    #[default]
    Bmp,
    /// Stop at `max`.
    Full,
}

/// Inclusive codepoint interval to register when loading the font asset.
///
/// # Example
/// ```
/// use ift_core::table::GlyphRange;
/// let range = GlyphRange { start: 0xe007, end: 0xf8e8 };
/// assert!(range.contains('\u{f09b}'));
/// assert_eq!(range.to_atlas_ranges(), [0xe007, 0xf8e8, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphRange {
    /// First codepoint (inclusive).
    pub start: u32,
    /// Last codepoint (inclusive).
    pub end: u32,
}

impl GlyphRange {
    /// True if `ch` is inside the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        (self.start..=self.end).contains(&u32::from(ch))
    }

    /// Number of codepoints covered.
    #[must_use]
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// True if `end < start`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Zero-terminated `[start, end, 0]` list, the layout font atlases of
    /// immediate-mode GUI libraries take for glyph ranges.
    #[must_use]
    pub fn to_atlas_ranges(&self) -> [u32; 3] {
        [self.start, self.end, 0]
    }
}

/// Immutable name → codepoint table of one icon font.
///
/// Built once by [`crate::builder::TableBuilder`] (or loaded from a snapshot)
/// and never mutated afterwards. Share it behind an `Arc`; replace it as a
/// whole through [`crate::registry::TableHandle`].
///
/// # Example
/// ```
/// use ift_core::builder::build;
/// let table = build("fa-brands-400.ttf", 0xe007, 0xf8e8, [("GITHUB", "\\uf09b")]).unwrap();
/// assert_eq!(table.lookup("github").unwrap(), '\u{f09b}');
/// assert_eq!(table.range(), ('\u{e007}', '\u{f8e8}'));
/// ```
#[derive(Clone, Debug)]
pub struct IconTable {
    font_file: String,
    abbreviation: Option<String>,
    bounds: Bounds,
    entries: Vec<IconEntry>,
    /// Canonical name → position in `entries`. First occurrence wins.
    index: HashMap<String, usize>,
}

impl IconTable {
    /// Assemble a table from already-checked parts. The font tag is reduced to
    /// its canonical identifier form since emitters splice it into names.
    pub(crate) fn from_parts(
        font_file: String,
        abbreviation: Option<String>,
        bounds: Bounds,
        entries: Vec<IconEntry>,
    ) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if let Some(key) = naming::lookup_key(&entry.name) {
                index.entry(key).or_insert(i);
            }
        }
        Self {
            font_file,
            abbreviation: abbreviation.as_deref().and_then(naming::canonicalize),
            bounds,
            entries,
            index,
        }
    }

    /// Resolve a name. The query is matched through its canonical form, so the
    /// raw feed id (`amazon-pay`) and the constant name (`AMAZON_PAY`) both
    /// resolve; there is no partial matching.
    ///
    /// # Errors
    /// Returns [`IconError::UnknownIcon`] if no entry has that name.
    pub fn lookup(&self, name: &str) -> Result<char, IconError> {
        self.get(name)
            .map(|e| e.codepoint)
            .ok_or_else(|| IconError::UnknownIcon(name.to_string()))
    }

    /// Resolve a name to the glyph string to render inline with text.
    ///
    /// # Errors
    /// Returns [`IconError::UnknownIcon`] if no entry has that name.
    pub fn lookup_str(&self, name: &str) -> Result<String, IconError> {
        self.lookup(name).map(String::from)
    }

    /// Entry for a name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        let key = naming::lookup_key(name)?;
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// True if `name` resolves.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Declared `(min, max)` bounds.
    #[must_use]
    pub fn range(&self) -> (char, char) {
        (self.bounds.min, self.bounds.max)
    }

    /// Declared `(min, max_16)` bounds.
    #[must_use]
    pub fn range_16(&self) -> (char, char) {
        (self.bounds.min, self.bounds.max_16)
    }

    /// All declared bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Glyph range to register with a font atlas.
    ///
    /// # Example
    /// ```
    /// use ift_core::builder::TableBuilder;
    /// use ift_core::table::Width;
    /// let table = TableBuilder::new("icons.ttf", 0xe000, 0x1f600)
    ///     .max_16(0xf8ff)
    ///     .build([("smile", "\\u{1f600}")])
    ///     .unwrap();
    /// assert_eq!(table.glyph_range(Width::Bmp).end, 0xf8ff);
    /// assert_eq!(table.glyph_range(Width::Full).end, 0x1f600);
    /// ```
    #[must_use]
    pub fn glyph_range(&self, width: Width) -> GlyphRange {
        let end = match width {
            Width::Bmp => self.bounds.max_16,
            Width::Full => self.bounds.max,
        };
        GlyphRange {
            start: u32::from(self.bounds.min),
            end: u32::from(end),
        }
    }

    /// Webfont file name the codepoints belong to.
    #[must_use]
    pub fn font_file(&self) -> &str {
        &self.font_file
    }

    /// Short font tag used to suffix generated constants (`FAB`, `KI`).
    #[must_use]
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    /// Number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Same as [`IconTable::size`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, codepoint)` pairs in feed order. Restartable: every call
    /// yields the same sequence.
    pub fn entries(&self) -> impl Iterator<Item = (&str, char)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.codepoint))
    }

    /// Entries as stored, in feed order.
    #[must_use]
    pub fn as_slice(&self) -> &[IconEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IconTable {
        IconTable::from_parts(
            "fa-brands-400.ttf".into(),
            Some("FAB".into()),
            Bounds::new(0xe007, 0xf8e8, 0xf8e8).unwrap(),
            vec![
                IconEntry { name: "GITHUB".into(), codepoint: '\u{f09b}' },
                IconEntry { name: "TWITTER".into(), codepoint: '\u{f099}' },
            ],
        )
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = sample();
        assert_eq!(table.lookup("GITHUB").unwrap(), '\u{f09b}');
        assert_eq!(table.lookup("github").unwrap(), '\u{f09b}');
        assert_eq!(table.lookup("GitHub").unwrap(), '\u{f09b}');
    }

    #[test]
    fn lookup_has_no_partial_match() {
        let table = sample();
        assert_eq!(table.lookup("GIT"), Err(IconError::UnknownIcon("GIT".into())));
        assert!(table.lookup("github-alt").is_err());
        assert!(!table.contains("FACEBOOK"));
    }

    #[test]
    fn raw_feed_ids_resolve_through_canonical_form() {
        let table = IconTable::from_parts(
            "fa-brands-400.ttf".into(),
            None,
            Bounds::new(0xe007, 0xf8e8, 0xf8e8).unwrap(),
            vec![
                IconEntry { name: "AMAZON_PAY".into(), codepoint: '\u{f42c}' },
                IconEntry { name: "_42_GROUP".into(), codepoint: '\u{e080}' },
            ],
        );
        assert_eq!(table.lookup("amazon-pay").unwrap(), '\u{f42c}');
        assert_eq!(table.lookup("Amazon Pay").unwrap(), '\u{f42c}');
        assert_eq!(table.lookup("42-group").unwrap(), '\u{e080}');
        assert_eq!(table.lookup("42_group").unwrap(), '\u{e080}');
        assert!(table.lookup("--").is_err());
    }

    #[test]
    fn abbreviation_is_identifier_safe() {
        let table = IconTable::from_parts(
            "kenney-icon-font.ttf".into(),
            Some("k-i".into()),
            Bounds::new(0xe900, 0xe9e3, 0xe9e3).unwrap(),
            Vec::new(),
        );
        assert_eq!(table.abbreviation(), Some("K_I"));
    }

    #[test]
    fn lookup_str_returns_one_char() {
        let glyph = sample().lookup_str("twitter").unwrap();
        assert_eq!(glyph.chars().count(), 1);
        assert_eq!(glyph, "\u{f099}");
    }

    #[test]
    fn entries_restartable_in_order() {
        let table = sample();
        let first: Vec<_> = table.entries().collect();
        let second: Vec<_> = table.entries().collect();
        assert_eq!(first, second);
        assert_eq!(first[0].0, "GITHUB");
        assert_eq!(first[1].0, "TWITTER");
    }

    #[test]
    fn first_occurrence_wins_in_index() {
        let table = IconTable::from_parts(
            "x.ttf".into(),
            None,
            Bounds::new(0xe000, 0xe0ff, 0xe0ff).unwrap(),
            vec![
                IconEntry { name: "A".into(), codepoint: '\u{e001}' },
                IconEntry { name: "A".into(), codepoint: '\u{e002}' },
            ],
        );
        assert_eq!(table.lookup("a").unwrap(), '\u{e001}');
        assert_eq!(table.size(), 2);
    }

    #[test]
    fn bounds_reject_surrogates_and_disorder() {
        assert!(matches!(Bounds::new(0xd800, 0xe000, 0xe000), Err(IconError::InvalidBounds(_))));
        assert!(matches!(Bounds::new(0xe000, 0xf000, 0xe100), Err(IconError::InvalidBounds(_))));
    }

    #[test]
    fn default_max_16_caps_at_bmp() {
        assert_eq!(Bounds::default_max_16(0xf8e8), 0xf8e8);
        assert_eq!(Bounds::default_max_16(0x1f600), 0xffff);
    }

    #[test]
    fn glyph_range_len() {
        let r = GlyphRange { start: 0xe900, end: 0xe9e3 };
        assert_eq!(r.len(), 0xe4);
        assert!(!r.is_empty());
    }

    #[test]
    fn table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconTable>();
    }
}
