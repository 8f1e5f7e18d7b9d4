use std::collections::HashMap;
use std::fmt;

use crate::codepoint::{self, BMP_MAX};
use crate::error::IconError;
use crate::naming;
use crate::snapshot;
use crate::table::IconTable;

/// Category of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Codepoint outside `[min, max]`.
    OutOfRange,
    /// The same canonical name appears twice.
    DuplicateName,
    /// Several names share a codepoint while aliases are disallowed.
    SharedCodepoint,
    /// Name not in canonical form (only possible for loaded snapshots).
    NonCanonicalName,
    /// Declared `max` differs from the largest entry codepoint.
    MaxMismatch,
    /// Declared `min` differs from the smallest entry codepoint.
    MinMismatch,
    /// Declared `max_16` differs from the largest BMP entry codepoint.
    Max16Mismatch,
    /// Declared `max_16` lies above U+FFFF.
    Max16AboveBmp,
    /// Table has no entries.
    EmptyTable,
}

/// A single finding of the validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Category.
    pub kind: IssueKind,
    /// Names involved, if any.
    pub names: Vec<String>,
    /// Codepoint involved, if any.
    pub codepoint: Option<char>,
    /// Human-readable explanation.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Names sharing one codepoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasGroup {
    /// The shared codepoint.
    pub codepoint: char,
    /// Names in feed order.
    pub names: Vec<String>,
}

/// Outcome of [`Validator::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Findings that forbid publishing the table.
    pub errors: Vec<ValidationIssue>,
    /// Advisory findings.
    pub warnings: Vec<ValidationIssue>,
    /// Codepoints reached by several names, when aliases are allowed.
    pub aliases: Vec<AliasGroup>,
}

impl ValidationReport {
    /// No errors.
    #[must_use]
    pub fn is_publishable(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Log every finding at the matching level.
    pub fn log(&self, table_name: &str) {
        for issue in &self.errors {
            log::error!("{table_name} : {issue}");
        }
        for issue in &self.warnings {
            log::warn!("{table_name} : {issue}");
        }
        for group in &self.aliases {
            log::debug!(
                "{table_name} : alias {} → {}",
                codepoint::notation(group.codepoint),
                group.names.join(", ")
            );
        }
    }
}

/// Validator knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Names sharing a codepoint are recorded as aliases instead of errors.
    pub allow_aliases: bool,
    /// Every warning is reported as an error.
    pub strict: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            allow_aliases: true,
            strict: false,
        }
    }
}

/// Checks the internal consistency of a table before it is published.
///
/// # Example
/// ```
/// use ift_core::builder::build;
/// use ift_core::validator::Validator;
/// let table = build("fa-brands-400.ttf", 0xe007, 0xf8e8, [("github", "\u{f09b}")]).unwrap();
/// let report = Validator::default().validate(&table);
/// assert!(report.errors.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Validator with explicit options.
    #[must_use]
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Run every check. Never fails: data problems land in the report.
    #[must_use]
    pub fn validate(&self, table: &IconTable) -> ValidationReport {
        let mut report = ValidationReport::default();
        let bounds = table.bounds();

        if table.is_empty() {
            report.warnings.push(ValidationIssue {
                kind: IssueKind::EmptyTable,
                names: Vec::new(),
                codepoint: None,
                message: format!("{} n'a aucune entrée", table.font_file()),
            });
        }

        let mut name_seen: HashMap<&str, usize> = HashMap::with_capacity(table.len());
        let mut by_codepoint: HashMap<char, usize> = HashMap::new();
        let mut groups: Vec<AliasGroup> = Vec::new();

        for entry in table.as_slice() {
            if !bounds.contains(entry.codepoint) {
                report.errors.push(ValidationIssue {
                    kind: IssueKind::OutOfRange,
                    names: vec![entry.name.clone()],
                    codepoint: Some(entry.codepoint),
                    message: format!(
                        "{} = {} hors de [{}, {}]",
                        entry.name,
                        codepoint::notation(entry.codepoint),
                        codepoint::notation(bounds.min),
                        codepoint::notation(bounds.max)
                    ),
                });
            }

            if !naming::is_canonical(&entry.name) {
                report.errors.push(ValidationIssue {
                    kind: IssueKind::NonCanonicalName,
                    names: vec![entry.name.clone()],
                    codepoint: Some(entry.codepoint),
                    message: format!("{:?} n'est pas un nom canonique", entry.name),
                });
            }

            let count = name_seen.entry(entry.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                report.errors.push(ValidationIssue {
                    kind: IssueKind::DuplicateName,
                    names: vec![entry.name.clone()],
                    codepoint: Some(entry.codepoint),
                    message: format!("{} apparaît plusieurs fois", entry.name),
                });
            }

            match by_codepoint.get(&entry.codepoint) {
                Some(&g) => groups[g].names.push(entry.name.clone()),
                None => {
                    by_codepoint.insert(entry.codepoint, groups.len());
                    groups.push(AliasGroup {
                        codepoint: entry.codepoint,
                        names: vec![entry.name.clone()],
                    });
                }
            }
        }

        for group in groups.into_iter().filter(|g| g.names.len() > 1) {
            if self.options.allow_aliases {
                report.aliases.push(group);
            } else {
                report.errors.push(ValidationIssue {
                    kind: IssueKind::SharedCodepoint,
                    message: format!(
                        "{} partagé par {}",
                        codepoint::notation(group.codepoint),
                        group.names.join(", ")
                    ),
                    codepoint: Some(group.codepoint),
                    names: group.names,
                });
            }
        }

        Self::check_declared_bounds(table, &mut report);

        if self.options.strict {
            report.errors.append(&mut report.warnings);
        }
        report
    }

    /// Declared bounds against the codepoints actually present.
    fn check_declared_bounds(table: &IconTable, report: &mut ValidationReport) {
        let bounds = table.bounds();

        if u32::from(bounds.max_16) > BMP_MAX {
            report.warnings.push(ValidationIssue {
                kind: IssueKind::Max16AboveBmp,
                names: Vec::new(),
                codepoint: Some(bounds.max_16),
                message: format!(
                    "max_16 déclaré {} au-delà de U+FFFF",
                    codepoint::notation(bounds.max_16)
                ),
            });
        }

        let codepoints = || table.entries().map(|(_, cp)| cp);
        let (Some(actual_min), Some(actual_max)) = (codepoints().min(), codepoints().max()) else {
            return;
        };

        if actual_max != bounds.max {
            report.warnings.push(ValidationIssue {
                kind: IssueKind::MaxMismatch,
                names: Vec::new(),
                codepoint: Some(actual_max),
                message: format!(
                    "max déclaré {} ≠ max réel {}",
                    codepoint::notation(bounds.max),
                    codepoint::notation(actual_max)
                ),
            });
        }
        if actual_min != bounds.min {
            report.warnings.push(ValidationIssue {
                kind: IssueKind::MinMismatch,
                names: Vec::new(),
                codepoint: Some(actual_min),
                message: format!(
                    "min déclaré {} ≠ min réel {}",
                    codepoint::notation(bounds.min),
                    codepoint::notation(actual_min)
                ),
            });
        }
        let actual_max_16 = codepoints()
            .filter(|&cp| u32::from(cp) <= BMP_MAX)
            .max()
            .filter(|&cp| cp != bounds.max_16);
        if let Some(actual_max_16) = actual_max_16 {
            report.warnings.push(ValidationIssue {
                kind: IssueKind::Max16Mismatch,
                names: Vec::new(),
                codepoint: Some(actual_max_16),
                message: format!(
                    "max_16 déclaré {} ≠ max BMP réel {}",
                    codepoint::notation(bounds.max_16),
                    codepoint::notation(actual_max_16)
                ),
            });
        }
    }
}

/// Validate with default options.
#[must_use]
pub fn validate(table: &IconTable) -> ValidationReport {
    Validator::default().validate(table)
}

/// Load a JSON snapshot and validate it.
///
/// # Errors
/// Returns [`IconError::Unreadable`] if the snapshot is structurally broken.
pub fn validate_json(json: &str, options: ValidatorOptions) -> Result<ValidationReport, IconError> {
    let table = snapshot::from_json(json)?;
    Ok(Validator::new(options).validate(&table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{TableBuilder, build};
    use crate::table::{Bounds, IconEntry};

    fn table_from(bounds: (u32, u32, u32), entries: &[(&str, char)]) -> IconTable {
        IconTable::from_parts(
            "test.ttf".into(),
            None,
            Bounds::new(bounds.0, bounds.1, bounds.2).unwrap(),
            entries
                .iter()
                .map(|&(name, codepoint)| IconEntry { name: name.into(), codepoint })
                .collect(),
        )
    }

    #[test]
    fn well_formed_build_has_no_errors() {
        let table = build("fa-brands-400.ttf", 0xe007, 0xf8e8, [("a", "\u{e007}"), ("b", "\u{f8e8}")]).unwrap();
        let report = validate(&table);
        assert!(report.errors.is_empty());
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn out_of_range_reported_not_thrown() {
        let table = table_from((0xe000, 0xe0ff, 0xe0ff), &[("A", '\u{e000}'), ("B", '\u{f000}')]);
        let report = validate(&table);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, IssueKind::OutOfRange);
        assert_eq!(report.errors[0].names, ["B"]);
    }

    #[test]
    fn duplicate_names_reported_once() {
        let table = table_from(
            (0xe000, 0xe002, 0xe002),
            &[("A", '\u{e000}'), ("A", '\u{e001}'), ("A", '\u{e002}')],
        );
        let report = validate(&table);
        let dups: Vec<_> = report
            .errors
            .iter()
            .filter(|i| i.kind == IssueKind::DuplicateName)
            .collect();
        assert_eq!(dups.len(), 1);
    }

    #[test]
    fn aliases_recorded_when_allowed() {
        let table = build(
            "x.ttf",
            0xe000,
            0xe001,
            [("house", "\u{e000}"), ("home", "\u{e000}"), ("cog", "\u{e001}")],
        )
        .unwrap();
        let report = validate(&table);
        assert!(report.errors.is_empty());
        assert_eq!(
            report.aliases,
            [AliasGroup {
                codepoint: '\u{e000}',
                names: vec!["HOUSE".into(), "HOME".into()],
            }]
        );
    }

    #[test]
    fn aliases_rejected_when_disallowed() {
        let table = build("x.ttf", 0xe000, 0xe000, [("house", "\u{e000}"), ("home", "\u{e000}")]).unwrap();
        let report = Validator::new(ValidatorOptions {
            allow_aliases: false,
            strict: false,
        })
        .validate(&table);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, IssueKind::SharedCodepoint);
        assert!(report.aliases.is_empty());
    }

    #[test]
    fn max_headroom_is_a_warning() {
        let table = build("x.ttf", 0xe000, 0xe0ff, [("a", "\u{e000}"), ("b", "\u{e010}")]).unwrap();
        let report = validate(&table);
        assert!(report.is_publishable());
        let kinds: Vec<_> = report.warnings.iter().map(|w| w.kind).collect();
        assert!(kinds.contains(&IssueKind::MaxMismatch));
        assert!(kinds.contains(&IssueKind::Max16Mismatch));
    }

    #[test]
    fn strict_promotes_warnings() {
        let table = build("x.ttf", 0xe000, 0xe0ff, [("a", "\u{e000}")]).unwrap();
        let report = Validator::new(ValidatorOptions {
            allow_aliases: true,
            strict: true,
        })
        .validate(&table);
        assert!(!report.is_publishable());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn max_16_checked_against_bmp_entries_only() {
        let table = TableBuilder::new("x.ttf", 0xe000, 0x1f600)
            .max_16(0xe001)
            .build([("a", "\u{e000}"), ("b", "\u{e001}"), ("smile", "\u{1f600}")])
            .unwrap();
        let report = validate(&table);
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn non_canonical_snapshot_names_are_errors() {
        let table = table_from((0xe000, 0xe000, 0xe000), &[("home-alt", '\u{e000}')]);
        let report = validate(&table);
        assert_eq!(report.errors[0].kind, IssueKind::NonCanonicalName);
    }

    #[test]
    fn empty_table_warns() {
        let table = table_from((0xe000, 0xe000, 0xe000), &[]);
        let report = validate(&table);
        assert!(report.is_publishable());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, IssueKind::EmptyTable);
    }
}
