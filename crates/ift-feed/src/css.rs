use anyhow::{Context, Result};
use regex::Regex;

use crate::{IconFeed, RawEntry};

/// `.a:before, .b::before { content: "\e900"; }`: selector list, then content.
const RULE: &str = r#"((?:\.[A-Za-z0-9_-]+::?before\s*,?\s*)+)\{\s*content\s*:\s*["']([^"']*)["']\s*;?\s*\}"#;
const SELECTOR: &str = r"\.([A-Za-z0-9_-]+)::?before";

/// Parse icon rules out of a stylesheet.
///
/// Classes not starting with `prefix` are skipped; the prefix is stripped from
/// the others. A rule with several selectors yields one entry per selector,
/// all sharing the content codepoint. The font file is not part of a
/// stylesheet and must come from the config.
///
/// # Errors
/// Returns an error if the patterns fail to compile.
///
/// # Example
/// ```
/// use ift_feed::css::parse;
/// let css = r#".ki-home:before { content: "\e900"; }
///              .ki-cog:before { content: "\e903"; }"#;
/// let feed = parse(css, "ki-").unwrap();
/// assert_eq!(feed.entries[1].name, "cog");
/// assert_eq!(feed.entries[1].codepoint, "\\e903");
/// ```
pub fn parse(css: &str, prefix: &str) -> Result<IconFeed> {
    let rule = Regex::new(RULE).context("Motif de règle CSS")?;
    let selector = Regex::new(SELECTOR).context("Motif de sélecteur CSS")?;

    let mut entries = Vec::new();
    for caps in rule.captures_iter(css) {
        let (Some(selectors), Some(content)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        for sel in selector.captures_iter(selectors.as_str()) {
            let Some(class) = sel.get(1).map(|m| m.as_str()) else {
                continue;
            };
            match class.strip_prefix(prefix) {
                Some(name) if !name.is_empty() => {
                    entries.push(RawEntry::new(name, content.as_str()));
                }
                _ => log::trace!("Classe CSS ignorée : {class}"),
            }
        }
    }

    if entries.is_empty() {
        log::warn!("Aucune règle d'icône trouvée (préfixe {prefix:?})");
    }
    Ok(IconFeed {
        entries,
        ..IconFeed::default()
    })
}
