use std::fmt::{self, Write};

use ift_core::IconTable;
use ift_core::codepoint;

use crate::{EmitOptions, banner, constant_name, quoted, tagged};

/// C/C++ header. Icons are UTF-8 byte escapes so the header stays ASCII and
/// works with `char` string APIs; bounds carry the font tag since a header
/// shares one global namespace.
///
/// # Errors
/// Returns an error if writing to the buffer fails.
pub fn render(table: &IconTable, options: &EmitOptions) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(80 * (table.size() + 10));
    for line in banner(table, options, "C and C++") {
        writeln!(out, "// {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "#pragma once")?;
    writeln!(out)?;

    let bounds = table.bounds();
    writeln!(
        out,
        "#define {} \"{}\"",
        tagged("FONT_ICON_FILE_NAME", table),
        quoted(table.font_file(), '"')
    )?;
    writeln!(out)?;
    writeln!(out, "#define {} 0x{:x}", tagged("ICON_MIN", table), u32::from(bounds.min))?;
    writeln!(out, "#define {} 0x{:x}", tagged("ICON_MAX_16", table), u32::from(bounds.max_16))?;
    writeln!(out, "#define {} 0x{:x}", tagged("ICON_MAX", table), u32::from(bounds.max))?;

    for (name, cp) in table.entries() {
        writeln!(
            out,
            "#define {} \"{}\"\t// {}",
            constant_name(&options.prefix, name),
            utf8_escape(cp),
            codepoint::notation(cp)
        )?;
    }
    Ok(out)
}

/// `\xNN` escapes of the UTF-8 encoding of `ch`.
///
/// # Example
/// ```
/// use ift_emit::c::utf8_escape;
/// assert_eq!(utf8_escape('\u{f09b}'), "\\xef\\x82\\x9b");
/// ```
#[must_use]
pub fn utf8_escape(ch: char) -> String {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf)
        .bytes()
        .map(|b| format!("\\x{b:02x}"))
        .collect()
}
