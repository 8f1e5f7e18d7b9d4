use std::collections::HashMap;

use crate::codepoint;
use crate::error::IconError;
use crate::naming;
use crate::table::{Bounds, IconEntry, IconTable};

/// Builds an [`IconTable`] from raw `(name, codepoint literal)` pairs.
///
/// Pure over its inputs: the builder holds only the font description and can
/// be reused for several builds.
///
/// # Example
/// ```
/// use ift_core::builder::TableBuilder;
/// let table = TableBuilder::new("kenney-icon-font.ttf", 0xe900, 0xe9e3)
///     .abbreviation("KI")
///     .build([("home", "\\ue900"), ("shopping-cart", "\\ue909")])
///     .unwrap();
/// assert_eq!(table.lookup("SHOPPING_CART").unwrap(), '\u{e909}');
/// assert_eq!(table.abbreviation(), Some("KI"));
/// ```
#[derive(Clone, Debug)]
pub struct TableBuilder {
    font_file: String,
    abbreviation: Option<String>,
    min: u32,
    max_16: Option<u32>,
    max: u32,
}

impl TableBuilder {
    /// Describe the font. `max_16` defaults to `max` capped to the BMP.
    #[must_use]
    pub fn new(font_file: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            font_file: font_file.into(),
            abbreviation: None,
            min,
            max_16: None,
            max,
        }
    }

    /// Set the 16-bit upper bound explicitly.
    #[must_use]
    pub fn max_16(mut self, max_16: u32) -> Self {
        self.max_16 = Some(max_16);
        self
    }

    /// Set the font tag used by emitters.
    #[must_use]
    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Normalize, parse and check every raw entry, then assemble the table.
    ///
    /// An entry repeating an earlier canonical name with the same codepoint is
    /// dropped. Any other problem rejects the whole table.
    ///
    /// # Errors
    /// - [`IconError::InvalidBounds`] if the declared bounds are unusable.
    /// - [`IconError::InvalidName`] for an empty or symbol-only name.
    /// - [`IconError::MalformedCodepoint`] if a literal is not exactly one scalar.
    /// - [`IconError::OutOfRange`] if a codepoint is outside `[min, max]`.
    /// - [`IconError::DuplicateName`] if two names normalize to the same
    ///   identifier with different codepoints.
    pub fn build<I, N, L>(&self, raw_entries: I) -> Result<IconTable, IconError>
    where
        I: IntoIterator<Item = (N, L)>,
        N: AsRef<str>,
        L: AsRef<str>,
    {
        let bounds = Bounds::new(
            self.min,
            self.max_16.unwrap_or_else(|| Bounds::default_max_16(self.max)),
            self.max,
        )?;

        let raw_entries = raw_entries.into_iter();
        let mut entries: Vec<IconEntry> = Vec::with_capacity(raw_entries.size_hint().0);
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.capacity());

        for (raw_name, literal) in raw_entries {
            let raw_name = raw_name.as_ref();
            let literal = literal.as_ref();

            let name = naming::canonicalize(raw_name).ok_or_else(|| IconError::InvalidName {
                raw: raw_name.to_string(),
            })?;
            let codepoint =
                codepoint::parse_literal(literal).ok_or_else(|| IconError::MalformedCodepoint {
                    name: raw_name.to_string(),
                    literal: literal.to_string(),
                })?;
            if !bounds.contains(codepoint) {
                return Err(IconError::OutOfRange {
                    name,
                    codepoint: u32::from(codepoint),
                    min: u32::from(bounds.min),
                    max: u32::from(bounds.max),
                });
            }

            if let Some(&i) = seen.get(&name) {
                let first = entries[i].codepoint;
                if first == codepoint {
                    log::debug!("Entrée répétée ignorée : {raw_name} ({name})");
                    continue;
                }
                return Err(IconError::DuplicateName {
                    name,
                    first: u32::from(first),
                    second: u32::from(codepoint),
                });
            }

            if name != raw_name {
                log::trace!("{raw_name} → {name}");
            }
            seen.insert(name.clone(), entries.len());
            entries.push(IconEntry { name, codepoint });
        }

        log::debug!(
            "Table {} construite : {} entrées",
            self.font_file,
            entries.len()
        );

        Ok(IconTable::from_parts(
            self.font_file.clone(),
            self.abbreviation.clone(),
            bounds,
            entries,
        ))
    }
}

/// Build a table with default `max_16` and no abbreviation.
///
/// # Errors
/// Same as [`TableBuilder::build`].
///
/// # Example
/// ```
/// use ift_core::builder::build;
/// let table = build(
///     "fa-brands-400.ttf",
///     0xe007,
///     0xf8e8,
///     [("GITHUB", "\\uf09b"), ("TWITTER", "\\uf099")],
/// )
/// .unwrap();
/// assert_eq!(table.size(), 2);
/// assert!(table.lookup("FACEBOOK").is_err());
/// ```
pub fn build<I, N, L>(
    font_file: &str,
    min: u32,
    max: u32,
    raw_entries: I,
) -> Result<IconTable, IconError>
where
    I: IntoIterator<Item = (N, L)>,
    N: AsRef<str>,
    L: AsRef<str>,
{
    TableBuilder::new(font_file, min, max).build(raw_entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &str = "fa-brands-400.ttf";

    #[test]
    fn reference_example() {
        let table = build(FONT, 0xe007, 0xf8e8, [("GITHUB", "\u{f09b}"), ("TWITTER", "\u{f099}")])
            .unwrap();
        assert_eq!(table.size(), 2);
        assert_eq!(table.lookup("GITHUB").unwrap(), '\u{f09b}');
        assert_eq!(table.lookup("github").unwrap(), '\u{f09b}');
        assert_eq!(
            table.lookup("FACEBOOK"),
            Err(IconError::UnknownIcon("FACEBOOK".into()))
        );
        assert_eq!(table.font_file(), FONT);
        assert_eq!(table.range(), ('\u{e007}', '\u{f8e8}'));
    }

    #[test]
    fn round_trip_every_input_name() {
        let raw = [
            ("github", "\u{f09b}"),
            ("github-alt", "\\uf113"),
            ("square github", "U+F092"),
            ("42-group", "\\u{e080}"),
            ("amazon-pay", "\u{f42c}"),
        ];
        let table = build(FONT, 0xe007, 0xf8e8, raw).unwrap();
        for (name, literal) in raw {
            assert_eq!(
                table.lookup(name).unwrap(),
                codepoint::parse_literal(literal).unwrap(),
                "{name}"
            );
        }
    }

    #[test]
    fn every_codepoint_within_bounds() {
        let table = build(FONT, 0xe007, 0xf8e8, [("a", "\u{e007}"), ("b", "\u{f8e8}"), ("c", "\u{f000}")])
            .unwrap();
        let (min, max) = table.range();
        assert!(table.entries().all(|(_, cp)| (min..=max).contains(&cp)));
    }

    #[test]
    fn duplicate_after_normalization_fails() {
        let err = build(FONT, 0xe007, 0xf8e8, [("amazon-pay", "\u{f42c}"), ("Amazon Pay", "\u{f270}")])
            .unwrap_err();
        assert_eq!(
            err,
            IconError::DuplicateName {
                name: "AMAZON_PAY".into(),
                first: 0xf42c,
                second: 0xf270,
            }
        );
    }

    #[test]
    fn repeated_identical_entry_is_dropped() {
        let table = build(FONT, 0xe007, 0xf8e8, [("github", "\u{f09b}"), ("GITHUB", "\\uf09b")])
            .unwrap();
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn malformed_literals_fail() {
        for literal in ["", "\u{f09b}\u{f099}", "zzzz"] {
            let err = build(FONT, 0xe007, 0xf8e8, [("github", literal)]).unwrap_err();
            assert!(
                matches!(err, IconError::MalformedCodepoint { .. }),
                "literal {literal:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn unmarked_hex_is_not_a_codepoint() {
        let err = build(FONT, 0xb000, 0xf8e8, [("github", "\u{f09b}"), ("beef", "beef")])
            .unwrap_err();
        assert_eq!(
            err,
            IconError::MalformedCodepoint {
                name: "beef".into(),
                literal: "beef".into(),
            }
        );
    }

    #[test]
    fn empty_name_fails() {
        let err = build(FONT, 0xe007, 0xf8e8, [("", "\u{f09b}")]).unwrap_err();
        assert_eq!(err, IconError::InvalidName { raw: String::new() });
        assert!(build(FONT, 0xe007, 0xf8e8, [("--", "\u{f09b}")]).is_err());
    }

    #[test]
    fn out_of_range_fails() {
        let err = build(FONT, 0xe007, 0xf8e8, [("smile", "\\u{1f600}")]).unwrap_err();
        assert!(matches!(err, IconError::OutOfRange { codepoint: 0x1f600, .. }));
    }

    #[test]
    fn inverted_bounds_fail() {
        let err = build(FONT, 0xf8e8, 0xe007, [("github", "\u{f09b}")]).unwrap_err();
        assert!(matches!(err, IconError::InvalidBounds(_)));
    }

    #[test]
    fn max_16_supplied_independently() {
        let table = TableBuilder::new("icons.ttf", 0xe000, 0x1f600)
            .max_16(0xf8ff)
            .build([("home", "\u{e000}")])
            .unwrap();
        assert_eq!(table.range_16(), ('\u{e000}', '\u{f8ff}'));
        assert_eq!(table.range(), ('\u{e000}', '\u{1f600}'));
    }

    #[test]
    fn insertion_order_preserved() {
        let table = build(FONT, 0xe007, 0xf8e8, [("zhihu", "\u{f63f}"), ("adn", "\u{f170}"), ("yelp", "\u{f1e9}")])
            .unwrap();
        let names: Vec<&str> = table.entries().map(|(n, _)| n).collect();
        assert_eq!(names, ["ZHIHU", "ADN", "YELP"]);
    }

    #[test]
    fn empty_feed_builds_empty_table() {
        let table = build(FONT, 0xe007, 0xf8e8, Vec::<(&str, &str)>::new()).unwrap();
        assert!(table.is_empty());
    }
}
