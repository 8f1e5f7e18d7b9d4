/// Bundled icon sets, built on demand from their raw entries.

pub mod fa_brands;
pub mod kenney;

use ift_core::{IconError, IconTable, TableBuilder};

/// A bundled set, selectable by name from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BundledSet {
    FaBrands,
    Kenney,
}

impl BundledSet {
    pub const ALL: [Self; 2] = [Self::FaBrands, Self::Kenney];

    /// Command-line name of the set.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FaBrands => "fa-brands",
            Self::Kenney => "kenney",
        }
    }

    /// Parse a set name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Build the set's table.
    ///
    /// # Errors
    /// Returns the builder's error if the bundled entries are inconsistent.
    pub fn table(self) -> Result<IconTable, IconError> {
        match self {
            Self::FaBrands => fa_brands(),
            Self::Kenney => kenney(),
        }
    }
}

/// Font Awesome 6 Brands.
///
/// # Errors
/// Returns the builder's error if the bundled entries are inconsistent.
///
/// # Example
/// ```
/// let table = ift_sets::fa_brands().unwrap();
/// assert_eq!(table.lookup("GITHUB").unwrap(), '\u{f09b}');
/// assert_eq!(table.font_file(), "fa-brands-400.ttf");
/// ```
pub fn fa_brands() -> Result<IconTable, IconError> {
    let table = TableBuilder::new(fa_brands::FONT_FILE_NAME, fa_brands::ICON_MIN, fa_brands::ICON_MAX)
        .max_16(fa_brands::ICON_MAX_16)
        .abbreviation(fa_brands::ABBREVIATION)
        .build(fa_brands::ENTRIES.iter().copied())?;
    log::debug!("Jeu intégré fa-brands : {} icônes", table.size());
    Ok(table)
}

/// Kenney game icons.
///
/// # Errors
/// Returns the builder's error if the bundled entries are inconsistent.
pub fn kenney() -> Result<IconTable, IconError> {
    let table = TableBuilder::new(kenney::FONT_FILE_NAME, kenney::ICON_MIN, kenney::ICON_MAX)
        .max_16(kenney::ICON_MAX_16)
        .abbreviation(kenney::ABBREVIATION)
        .build(kenney::ENTRIES.iter().copied())?;
    log::debug!("Jeu intégré kenney : {} icônes", table.size());
    Ok(table)
}
