/// Tables, construction, validation and configuration for icon-font constants.
///
/// This crate contains the shared types used across the workspace: the
/// immutable `IconTable`, the `TableBuilder` that produces it from raw
/// metadata, the `Validator` run before publication and the `TableHandle`
/// through which a published table is swapped atomically.

pub mod builder;
pub mod codepoint;
pub mod config;
pub mod error;
pub mod naming;
pub mod registry;
pub mod snapshot;
pub mod table;
pub mod validator;

pub use builder::TableBuilder;
pub use config::IconSetConfig;
pub use error::IconError;
pub use registry::TableHandle;
pub use table::{GlyphRange, IconEntry, IconTable, Width};
pub use validator::{ValidationReport, Validator, ValidatorOptions};
