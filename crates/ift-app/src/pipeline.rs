use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ift_core::config::{IconSetConfig, load_config};
use ift_core::validator::ValidationReport;
use ift_core::{IconTable, Validator, codepoint, snapshot};
use ift_emit::EmitOptions;
use ift_sets::BundledSet;

use crate::cli::{self, EmitArgs, SourceArgs};

/// Load the config named by `--config` and apply the command-line overrides.
///
/// # Errors
/// Returns an error if the config cannot be read or an override is invalid.
pub fn resolve_config(source: &SourceArgs, emit: Option<&EmitArgs>) -> Result<IconSetConfig> {
    let mut config = match source.config.as_deref() {
        Some(path) => load_config(path)?,
        None => IconSetConfig::default(),
    };

    if let Some(feed) = &source.feed {
        config.feed_path = Some(feed.clone());
    }
    if let Some(format) = &source.format {
        config.feed_format = cli::parse_format(format)?;
    }
    if source.strict {
        config.strict = true;
    }
    if source.no_aliases {
        config.allow_aliases = false;
    }
    if let Some(emit) = emit {
        if let Some(language) = &emit.language {
            config.language = cli::parse_language(language)?;
        }
        if let Some(out) = &emit.out {
            config.output = Some(out.clone());
        }
        if let Some(prefix) = &emit.prefix {
            config.prefix.clone_from(prefix);
        }
    }
    config.sanitize();
    Ok(config)
}

/// Produce the table from a bundled set, a snapshot or the configured feed.
///
/// # Errors
/// Returns an error if the source is unknown, unreadable or does not build.
pub fn load_table(source: &SourceArgs, config: &IconSetConfig) -> Result<IconTable> {
    source.validate_source()?;
    if let Some(name) = &source.set {
        let Some(set) = BundledSet::from_name(name) else {
            anyhow::bail!("Jeu intégré inconnu : {name} (fa-brands, kenney)");
        };
        return set
            .table()
            .with_context(|| format!("Construction du jeu intégré {}", set.name()));
    }
    if let Some(path) = &source.snapshot {
        return snapshot::load(path);
    }
    let table = ift_feed::build_table(config)?;
    log::info!("Table {} construite : {} entrées", table.font_file(), table.size());
    Ok(table)
}

/// `build` subcommand. Returns `false` when validation refused the table.
///
/// # Errors
/// Returns an error if the table cannot be built or the output cannot be written.
pub fn run_build(
    source: &SourceArgs,
    emit: &EmitArgs,
    save_snapshot: Option<&Path>,
    stdout: &mut impl Write,
) -> Result<bool> {
    let config = resolve_config(source, Some(emit))?;
    let table = load_table(source, &config)?;
    let report = Validator::new(config.validator_options()).validate(&table);
    report.log(table.font_file());
    if !report.is_publishable() {
        write_report(&table, &report, stdout)?;
        return Ok(false);
    }

    let options = EmitOptions::from_config(&config);
    match config.output.as_deref() {
        Some(path) => ift_emit::emit_to_file(&table, config.language, &options, path)?,
        None => {
            let code = ift_emit::emit(&table, config.language, &options)?;
            stdout.write_all(code.as_bytes())?;
        }
    }
    if let Some(path) = save_snapshot {
        snapshot::save(&table, path)?;
        log::info!("Snapshot écrit dans {}", path.display());
    }
    Ok(true)
}

/// `validate` subcommand. Returns whether the table is publishable.
///
/// # Errors
/// Returns an error if the table cannot be produced.
pub fn run_validate(source: &SourceArgs, stdout: &mut impl Write) -> Result<bool> {
    let config = resolve_config(source, None)?;
    let table = load_table(source, &config)?;
    let report = Validator::new(config.validator_options()).validate(&table);
    write_report(&table, &report, stdout)?;
    Ok(report.is_publishable())
}

/// `lookup` subcommand. Returns the number of names that did not resolve.
///
/// # Errors
/// Returns an error if the table cannot be produced or output fails.
pub fn run_lookup(
    source: &SourceArgs,
    names: &[String],
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<usize> {
    let config = resolve_config(source, None)?;
    let table = load_table(source, &config)?;
    write_lookup(&table, names, stdout, stderr)
}

/// One `NAME U+XXXX glyph` line per resolved name; misses go to `stderr`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_lookup(
    table: &IconTable,
    names: &[String],
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<usize> {
    let mut missing = 0;
    for name in names {
        match table.get(name) {
            Some(entry) => writeln!(
                stdout,
                "{} {} {}",
                entry.name,
                codepoint::notation(entry.codepoint),
                entry.glyph()
            )?,
            None => {
                missing += 1;
                writeln!(stderr, "Icône inconnue : {name}")?;
            }
        }
    }
    Ok(missing)
}

/// Human-readable validation report.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_report(
    table: &IconTable,
    report: &ValidationReport,
    out: &mut impl Write,
) -> Result<()> {
    let (lo, hi) = table.range();
    let (_, hi16) = table.range_16();
    writeln!(
        out,
        "{} : {} entrées, {}..{} (16 bits : ..{})",
        table.font_file(),
        table.size(),
        codepoint::notation(lo),
        codepoint::notation(hi),
        codepoint::notation(hi16)
    )?;
    for issue in &report.errors {
        writeln!(out, "erreur : {issue}")?;
    }
    for issue in &report.warnings {
        writeln!(out, "avertissement : {issue}")?;
    }
    for group in &report.aliases {
        writeln!(
            out,
            "alias : {} {}",
            codepoint::notation(group.codepoint),
            group.names.join(", ")
        )?;
    }
    let verdict = if report.is_publishable() { "publiable" } else { "refusée" };
    writeln!(
        out,
        "{} erreur(s), {} avertissement(s), {} alias : {verdict}",
        report.errors.len(),
        report.warnings.len(),
        report.aliases.len()
    )?;
    Ok(())
}
