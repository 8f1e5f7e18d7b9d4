use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use thiserror::Error;

use crate::error::IconError;
use crate::table::IconTable;
use crate::validator::{ValidationReport, Validator};

/// A table the validator refused to publish.
#[derive(Error, Debug)]
#[error("Publication refusée : {} erreur(s) de validation", .report.errors.len())]
pub struct PublishRejected {
    /// Full report of the rejected table.
    pub report: ValidationReport,
}

/// Published icon table, replaceable as a whole.
///
/// Readers take an `Arc<IconTable>` snapshot without locking; a replacement
/// is a single pointer swap, so a reader sees either the old table or the new
/// one, never a mix.
///
/// # Example
/// ```
/// use ift_core::builder::build;
/// use ift_core::registry::TableHandle;
/// let handle = TableHandle::new(build("x.ttf", 0xe000, 0xe0ff, [("home", "\u{e000}")]).unwrap());
/// let reader = handle.load();
/// handle.replace(build("x.ttf", 0xe000, 0xe0ff, [("home", "\u{e001}")]).unwrap());
/// assert_eq!(reader.lookup("home").unwrap(), '\u{e000}');
/// assert_eq!(handle.lookup("home").unwrap(), '\u{e001}');
/// ```
pub struct TableHandle {
    current: ArcSwap<IconTable>,
    generation: AtomicU64,
}

impl TableHandle {
    /// Publish an initial table (generation 0).
    #[must_use]
    pub fn new(table: IconTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
            generation: AtomicU64::new(0),
        }
    }

    /// Current table.
    #[must_use]
    pub fn load(&self) -> Arc<IconTable> {
        self.current.load_full()
    }

    /// Lookup against the current table.
    ///
    /// # Errors
    /// Returns [`IconError::UnknownIcon`] if the name is absent.
    pub fn lookup(&self, name: &str) -> Result<char, IconError> {
        self.current.load().lookup(name)
    }

    /// Swap in a new table without validation. Returns the previous one.
    pub fn replace(&self, table: IconTable) -> Arc<IconTable> {
        let previous = self.current.swap(Arc::new(table));
        self.generation.fetch_add(1, Ordering::Release);
        previous
    }

    /// Validate `table` and swap it in only if the report has no errors.
    ///
    /// # Errors
    /// Returns [`PublishRejected`] (carrying the report) and keeps the current
    /// table when validation finds errors.
    pub fn publish(
        &self,
        table: IconTable,
        validator: &Validator,
    ) -> Result<ValidationReport, PublishRejected> {
        let report = validator.validate(&table);
        if !report.is_publishable() {
            return Err(PublishRejected { report });
        }
        let size = table.size();
        let font = table.font_file().to_string();
        self.replace(table);
        log::info!(
            "Table {font} publiée ({size} entrées, génération {})",
            self.generation()
        );
        Ok(report)
    }

    /// Number of replacements since creation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
