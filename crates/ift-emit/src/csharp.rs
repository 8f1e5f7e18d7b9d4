use std::fmt::{self, Write};

use ift_core::IconTable;

use crate::{EmitOptions, banner, constant_name, pascal_case, quoted};

/// C# static class in the `IconFonts` namespace, PascalCase member names.
///
/// # Errors
/// Returns an error if writing to the buffer fails.
pub fn render(table: &IconTable, options: &EmitOptions) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(64 * (table.size() + 12));
    writeln!(out, "// <auto-generated>")?;
    for line in banner(table, options, "C#") {
        writeln!(out, "// {line}")?;
    }
    writeln!(out, "// </auto-generated>")?;
    writeln!(out)?;
    writeln!(out, "namespace IconFonts")?;
    writeln!(out, "{{")?;
    writeln!(out, "    public static class {}", options.type_name_for(table))?;
    writeln!(out, "    {{")?;

    let bounds = table.bounds();
    let file_const = format!("FontIconFileName{}", table.abbreviation().unwrap_or_default());
    writeln!(
        out,
        "        public const string {file_const} = \"{}\";",
        quoted(table.font_file(), '"')
    )?;
    writeln!(out)?;
    writeln!(out, "        public const int IconMin = 0x{:x};", u32::from(bounds.min))?;
    writeln!(out, "        public const int IconMax16 = 0x{:x};", u32::from(bounds.max_16))?;
    writeln!(out, "        public const int IconMax = 0x{:x};", u32::from(bounds.max))?;
    writeln!(out)?;

    for (name, cp) in table.entries() {
        let member = pascal_case(&constant_name(&options.prefix, name));
        writeln!(
            out,
            "        public const string {member} = \"{}\";",
            escape(cp)
        )?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(out)
}

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

    fn kenney() -> IconTable {
        TableBuilder::new("kenney-icon-font.ttf", 0xe900, 0xe9e3)
            .abbreviation("KI")
            .build([("home", "\u{e900}"), ("shopping-cart", "\u{e909}"), ("button-l1", "\u{e9a0}")])
            .unwrap()
    }

    #[test]
    fn members_are_pascal_case_without_prefix() {
        let opts = EmitOptions {
            prefix: String::new(),
            type_name: Some("Kenney".into()),
            source: None,
        };
        let code = render(&kenney(), &opts).unwrap();
        assert!(code.contains("    public static class Kenney"));
        assert!(code.contains("public const string FontIconFileNameKI = \"kenney-icon-font.ttf\";"));
        assert!(code.contains("public const int IconMax16 = 0xe9e3;"));
        assert!(code.contains("public const string Home = \"\\ue900\";"));
        assert!(code.contains("public const string ShoppingCart = \"\\ue909\";"));
        assert!(code.contains("public const string ButtonL1 = \"\\ue9a0\";"));
    }

    #[test]
    fn default_prefix_becomes_icon() {
        let code = render(&kenney(), &EmitOptions::default()).unwrap();
        assert!(code.contains("public const string IconHome = \"\\ue900\";"));
    }

    #[test]
    fn braces_balanced() {
        let code = render(&kenney(), &EmitOptions::default()).unwrap();
        assert_eq!(code.matches('{').count(), code.matches('}').count());
    }
}
