use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ift_core::config::{FeedFormat, Language};

/// iftgen : tables de constantes pour polices d'icônes.
#[derive(Parser, Debug)]
#[command(name = "iftgen", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Construire, valider puis générer le module de constantes.
    Build {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        emit: EmitArgs,
        /// Écrire aussi un snapshot JSON de la table.
        #[arg(long)]
        save_snapshot: Option<PathBuf>,
    },
    /// Construire (ou charger un snapshot) et afficher le rapport de validation.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Résoudre des noms d'icônes : NOM U+XXXX glyphe.
    Lookup {
        #[command(flatten)]
        source: SourceArgs,
        /// Noms à résoudre (insensible à la casse).
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Reconstruire et republier la table à chaque modification du feed ou de la config.
    Watch {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        emit: EmitArgs,
    },
}

/// Where the table comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Fichier de configuration TOML du jeu d'icônes.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Feed de métadonnées (remplace [feed] path).
    #[arg(long)]
    pub feed: Option<PathBuf>,

    /// Format du feed : fontawesome, css, manifest.
    #[arg(long)]
    pub format: Option<String>,

    /// Jeu intégré : fa-brands, kenney (ignore --config et --feed).
    #[arg(long)]
    pub set: Option<String>,

    /// Charger un snapshot JSON au lieu de construire depuis un feed.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Les avertissements deviennent des erreurs.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Refuser les codepoints partagés par plusieurs noms.
    #[arg(long, default_value_t = false)]
    pub no_aliases: bool,
}

/// Output settings.
#[derive(Args, Debug, Clone, Default)]
pub struct EmitArgs {
    /// Langage généré : rust, c, python, csharp.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Fichier de sortie (défaut : sortie standard).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Préfixe des constantes (défaut : ICON_).
    #[arg(long)]
    pub prefix: Option<String>,
}

impl SourceArgs {
    /// Reject contradictory table sources.
    ///
    /// # Errors
    /// Returns an error if more than one of --set, --snapshot and --feed is given.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        let count = usize::from(self.set.is_some())
            + usize::from(self.snapshot.is_some())
            + usize::from(self.feed.is_some());
        if count > 1 {
            anyhow::bail!("Une seule source de table à la fois : --set, --snapshot OU --feed.");
        }
        Ok(())
    }
}

/// Parse a feed format name.
///
/// # Errors
/// Returns an error for an unknown format.
pub fn parse_format(name: &str) -> anyhow::Result<FeedFormat> {
    Ok(match name.trim().to_ascii_lowercase().as_str() {
        "fontawesome" | "fa" | "json" => FeedFormat::FontAwesome,
        "css" => FeedFormat::Css,
        "manifest" | "toml" => FeedFormat::Manifest,
        other => anyhow::bail!("Format de feed inconnu : {other} (fontawesome, css, manifest)"),
    })
}

/// Parse an output language name.
///
/// # Errors
/// Returns an error for an unknown language.
pub fn parse_language(name: &str) -> anyhow::Result<Language> {
    Ok(match name.trim().to_ascii_lowercase().as_str() {
        "rust" | "rs" => Language::Rust,
        "c" | "cpp" | "h" => Language::C,
        "python" | "py" => Language::Python,
        "csharp" | "cs" | "c#" => Language::CSharp,
        other => anyhow::bail!("Langage inconnu : {other} (rust, c, python, csharp)"),
    })
}
