use std::fmt::{self, Write};

use ift_core::IconTable;

use crate::{EmitOptions, banner, constant_name};

/// Rust module of `pub const` items. Bounds are `u32`, icons `&str`.
///
/// # Errors
/// Returns an error if writing to the buffer fails.
pub fn render(table: &IconTable, options: &EmitOptions) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(64 * (table.size() + 8));
    for line in banner(table, options, "Rust") {
        writeln!(out, "//! {line}")?;
    }
    writeln!(out)?;

    let bounds = table.bounds();
    let file_const = match table.abbreviation() {
        Some(tag) => format!("FONT_ICON_FILE_NAME_{tag}"),
        None => "FONT_ICON_FILE_NAME".to_string(),
    };
    writeln!(out, "pub const {file_const}: &str = {:?};", table.font_file())?;
    writeln!(out)?;
    writeln!(out, "pub const ICON_MIN: u32 = 0x{:x};", u32::from(bounds.min))?;
    writeln!(out, "pub const ICON_MAX_16: u32 = 0x{:x};", u32::from(bounds.max_16))?;
    writeln!(out, "pub const ICON_MAX: u32 = 0x{:x};", u32::from(bounds.max))?;
    writeln!(out)?;

    for (name, cp) in table.entries() {
        writeln!(
            out,
            "pub const {}: &str = \"\\u{{{:x}}}\";",
            constant_name(&options.prefix, name),
            u32::from(cp)
        )?;
    }
    Ok(out)
}
