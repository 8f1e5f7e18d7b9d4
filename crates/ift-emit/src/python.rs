use std::fmt::{self, Write};

use ift_core::IconTable;

use crate::{EmitOptions, banner, constant_name, quoted};

/// Python class holding the constants as attributes.
///
/// # Errors
/// Returns an error if writing to the buffer fails.
pub fn render(table: &IconTable, options: &EmitOptions) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(48 * (table.size() + 10));
    for line in banner(table, options, "Python") {
        writeln!(out, "# {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "class {}:", options.type_name_for(table))?;
    writeln!(out)?;

    let bounds = table.bounds();
    let file_const = match table.abbreviation() {
        Some(tag) => format!("FONT_ICON_FILE_NAME_{tag}"),
        None => "FONT_ICON_FILE_NAME".to_string(),
    };
    writeln!(out, "    {file_const} = '{}'", quoted(table.font_file(), '\''))?;
    writeln!(out)?;
    writeln!(out, "    ICON_MIN = 0x{:x}", u32::from(bounds.min))?;
    writeln!(out, "    ICON_MAX_16 = 0x{:x}", u32::from(bounds.max_16))?;
    writeln!(out, "    ICON_MAX = 0x{:x}", u32::from(bounds.max))?;
    writeln!(out)?;

    for (name, cp) in table.entries() {
        writeln!(
            out,
            "    {} = '{}'",
            constant_name(&options.prefix, name),
            escape(cp)
        )?;
    }
    Ok(out)
}

/// `\uXXXX` in the BMP, `\UXXXXXXXX` above.
fn escape(ch: char) -> String {
    let cp = u32::from(ch);
    if cp <= 0xFFFF {
        format!("\\u{cp:04x}")
    } else {
        format!("\\U{cp:08x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ift_core::TableBuilder;

    #[test]
    fn class_layout_matches_upstream_headers() {
        let table = TableBuilder::new("fa-brands-400.ttf", 0xe007, 0xf8e8)
            .abbreviation("FAB")
            .build([("42-group", "\u{e080}"), ("500px", "\u{f26e}")])
            .unwrap();
        let opts = EmitOptions {
            type_name: Some("IconsFontAwesome6Brands".into()),
            ..EmitOptions::default()
        };
        let code = render(&table, &opts).unwrap();
        assert!(code.contains("class IconsFontAwesome6Brands:"));
        assert!(code.contains("    FONT_ICON_FILE_NAME_FAB = 'fa-brands-400.ttf'"));
        assert!(code.contains("    ICON_MIN = 0xe007"));
        assert!(code.contains("    ICON_42_GROUP = '\\ue080'"));
        assert!(code.contains("    ICON_500PX = '\\uf26e'"));
    }

    #[test]
    fn astral_escape() {
        assert_eq!(escape('\u{1f600}'), "\\U0001f600");
        assert_eq!(escape('\u{e900}'), "\\ue900");
    }
}
