use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flume::{Receiver, Sender};
use ift_core::registry::PublishRejected;
use ift_core::{IconSetConfig, IconTable, TableHandle, Validator};
use ift_emit::EmitOptions;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::cli::{EmitArgs, SourceArgs};
use crate::pipeline;

/// Messages reaching the watch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A watched file changed.
    Changed(PathBuf),
    /// Ctrl-C.
    Stop,
}

/// Rebuilds the table from the same arguments the watch started with.
pub struct Reloader {
    source: SourceArgs,
    emit: EmitArgs,
}

impl Reloader {
    #[must_use]
    pub fn new(source: SourceArgs, emit: EmitArgs) -> Self {
        Self { source, emit }
    }

    /// Re-read the config (it may be the file that changed) and rebuild.
    ///
    /// # Errors
    /// Returns an error if the config or the feed cannot be loaded or built.
    pub fn rebuild(&self) -> Result<(IconSetConfig, IconTable)> {
        let config = pipeline::resolve_config(&self.source, Some(&self.emit))?;
        let table = pipeline::load_table(&self.source, &config)?;
        Ok((config, table))
    }

    /// Files whose modification triggers a rebuild.
    #[must_use]
    pub fn watched_paths(&self, config: &IconSetConfig) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.source.config.iter().cloned().collect();
        if let Some(snapshot) = &self.source.snapshot {
            paths.push(snapshot.clone());
        } else if self.source.set.is_none() {
            paths.extend(config.feed_path.iter().cloned());
        }
        paths
    }

    /// Rebuild, validate and publish. The handle keeps its table on any failure.
    ///
    /// Returns the config the published table was built from, `None` when
    /// nothing was published.
    pub fn reload(&self, handle: &TableHandle) -> Option<IconSetConfig> {
        let (config, table) = match self.rebuild() {
            Ok(built) => built,
            Err(e) => {
                log::warn!("Erreur de reconstruction : {e:#}");
                return None;
            }
        };
        let validator = Validator::new(config.validator_options());
        let candidate = table.font_file().to_string();
        match handle.publish(table, &validator) {
            Ok(report) => {
                report.log(&candidate);
                write_output(handle, &config);
                Some(config)
            }
            Err(PublishRejected { report }) => {
                log::warn!(
                    "Table refusée ({} erreur(s)), la génération {} reste publiée",
                    report.errors.len(),
                    handle.generation()
                );
                report.log(&candidate);
                None
            }
        }
    }
}

/// Regenerate the output file for the published table, if one is configured.
fn write_output(handle: &TableHandle, config: &IconSetConfig) {
    let Some(path) = config.output.as_deref() else {
        return;
    };
    let table = handle.load();
    if let Err(e) =
        ift_emit::emit_to_file(&table, config.language, &EmitOptions::from_config(config), path)
    {
        log::warn!("Erreur d'écriture de la sortie : {e:#}");
    }
}

/// Files whose change triggers a rebuild. Their parent directories are what
/// the watcher actually follows, so a save that replaces the file by rename is
/// still seen.
#[derive(Debug, Default)]
pub struct Watched {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl Watched {
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|file| file == path)
    }

    /// Follow `paths` from now on: watch directories that are new, drop the
    /// ones no longer needed.
    ///
    /// # Errors
    /// Returns an error if a path cannot be resolved or a directory cannot be
    /// watched. Already watched directories are kept in that case.
    pub fn update(&mut self, paths: &[PathBuf], watcher: &mut impl Watcher) -> Result<()> {
        let mut files = Vec::with_capacity(paths.len());
        let mut dirs: Vec<PathBuf> = Vec::new();
        for path in paths {
            let (dir, file) = locate(path)
                .with_context(|| format!("Chemin invalide : {}", path.display()))?;
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
            files.push(file);
        }
        for dir in dirs.iter().filter(|dir| !self.dirs.contains(dir)) {
            watcher
                .watch(dir, RecursiveMode::NonRecursive)
                .with_context(|| format!("Surveillance impossible : {}", dir.display()))?;
            log::info!("Surveillance de {}", dir.display());
        }
        for dir in self.dirs.iter().filter(|dir| !dirs.contains(dir)) {
            if let Err(e) = watcher.unwatch(dir) {
                log::debug!("Arrêt de surveillance de {} : {e}", dir.display());
            }
        }
        self.files = files;
        self.dirs = dirs;
        Ok(())
    }
}

/// Canonical parent directory of `path` and the file's path inside it, in the
/// form the watcher reports events with.
fn locate(path: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let path = std::path::absolute(path)?;
    let parent = path.parent().unwrap_or(path.as_path());
    let dir = std::fs::canonicalize(parent)?;
    let file = match path.file_name() {
        Some(name) => dir.join(name),
        None => dir.clone(),
    };
    Ok((dir, file))
}

/// Create a watcher that forwards modifications as [`Signal::Changed`].
/// Paths are added through [`Watched::update`].
///
/// Retourne le Watcher (doit rester vivant tant que la boucle tourne).
///
/// # Errors
/// Returns an error if the watcher cannot be created.
pub fn spawn_file_watcher(tx: Sender<Signal>) -> Result<impl Watcher + use<>> {
    let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res
            && matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        {
            for path in event.paths {
                let _ = tx.send(Signal::Changed(path));
            }
        }
    })?;
    Ok(watcher)
}

/// Process signals until [`Signal::Stop`] or every sender is gone. Bursts of
/// change events are coalesced into a single reload; changes to files outside
/// `watched` are ignored. After each successful reload the watched set follows
/// the new config.
pub fn run_loop<W: Watcher>(
    rx: &Receiver<Signal>,
    reloader: &Reloader,
    handle: &TableHandle,
    watched: &mut Watched,
    watcher: &mut W,
) -> u64 {
    let mut reloads = 0;
    while let Ok(signal) = rx.recv() {
        let Signal::Changed(path) = signal else {
            break;
        };
        let mut relevant = watched.contains(&path);
        let mut stop = false;
        for pending in rx.drain() {
            match pending {
                Signal::Stop => stop = true,
                Signal::Changed(other) => relevant |= watched.contains(&other),
            }
        }
        if relevant {
            log::debug!("Modification : {}", path.display());
            if let Some(config) = reloader.reload(handle) {
                reloads += 1;
                if let Err(e) = watched.update(&reloader.watched_paths(&config), watcher) {
                    log::warn!("Erreur de surveillance : {e:#}");
                }
            }
        }
        if stop {
            break;
        }
    }
    reloads
}

/// `watch` subcommand: publish the initial table, then republish on change
/// until Ctrl-C.
///
/// # Errors
/// Returns an error if the initial table cannot be built or is refused, or if
/// the watcher cannot start.
pub fn run_watch(source: SourceArgs, emit: EmitArgs) -> Result<()> {
    let reloader = Reloader::new(source, emit);
    let (config, table) = reloader.rebuild()?;
    let report = Validator::new(config.validator_options()).validate(&table);
    report.log(table.font_file());
    if !report.is_publishable() {
        anyhow::bail!(
            "Table initiale refusée : {} erreur(s) de validation",
            report.errors.len()
        );
    }
    let handle = TableHandle::new(table);
    write_output(&handle, &config);

    let paths = reloader.watched_paths(&config);
    if paths.is_empty() {
        anyhow::bail!("Rien à surveiller : un jeu intégré ne change pas. Utilisez --config ou --feed.");
    }

    let (tx, rx) = flume::unbounded();
    let mut watcher = spawn_file_watcher(tx.clone())?;
    let mut watched = Watched::default();
    watched.update(&paths, &mut watcher)?;
    ctrlc::set_handler(move || {
        let _ = tx.send(Signal::Stop);
    })?;

    let reloads = run_loop(&rx, &reloader, &handle, &mut watched, &mut watcher);
    log::info!(
        "Arrêt : {reloads} rechargement(s), génération finale {}",
        handle.generation()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn manifest(codepoint: &str) -> String {
        format!("font_file = \"x.ttf\"\n[[icon]]\nname = \"home\"\ncodepoint = \"{codepoint}\"\n")
    }

    fn idle_watcher() -> impl Watcher {
        notify::recommended_watcher(|_: notify::Result<Event>| {}).unwrap()
    }

    fn setup(dir: &Path) -> (PathBuf, Reloader) {
        let feed = dir.join("icons.toml");
        fs::write(&feed, manifest("U+E900")).unwrap();
        let source = SourceArgs {
            feed: Some(feed.clone()),
            format: Some("manifest".into()),
            ..SourceArgs::default()
        };
        (feed, Reloader::new(source, EmitArgs::default()))
    }

    #[test]
    fn reload_publishes_new_table() {
        let dir = tempfile::tempdir().unwrap();
        let (feed, reloader) = setup(dir.path());
        let (_, table) = reloader.rebuild().unwrap();
        let handle = TableHandle::new(table);

        fs::write(&feed, manifest("U+E901")).unwrap();
        assert!(reloader.reload(&handle).is_some());
        assert_eq!(handle.lookup("HOME").unwrap(), '\u{e901}');
        assert_eq!(handle.generation(), 1);
    }

    #[test]
    fn broken_feed_keeps_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let (feed, reloader) = setup(dir.path());
        let (_, table) = reloader.rebuild().unwrap();
        let handle = TableHandle::new(table);

        fs::write(&feed, "font_file = \"x.ttf\"\n[[icon]]\nname = \"home\"\ncodepoint = \"zz\"\n")
            .unwrap();
        assert!(reloader.reload(&handle).is_none());
        assert_eq!(handle.lookup("home").unwrap(), '\u{e900}');
        assert_eq!(handle.generation(), 0);
    }

    #[test]
    fn loop_coalesces_and_stops() {
        let dir = tempfile::tempdir().unwrap();
        let (feed, reloader) = setup(dir.path());
        let (_, table) = reloader.rebuild().unwrap();
        let handle = TableHandle::new(table);
        fs::write(&feed, manifest("U+E902")).unwrap();

        let mut watcher = idle_watcher();
        let mut watched = Watched::default();
        watched.update(&[feed.clone()], &mut watcher).unwrap();

        let (tx, rx) = flume::unbounded();
        let changed = fs::canonicalize(&feed).unwrap();
        tx.send(Signal::Changed(changed.clone())).unwrap();
        tx.send(Signal::Changed(changed)).unwrap();
        tx.send(Signal::Stop).unwrap();
        assert_eq!(run_loop(&rx, &reloader, &handle, &mut watched, &mut watcher), 1);
        assert_eq!(handle.lookup("home").unwrap(), '\u{e902}');
    }

    #[test]
    fn unrelated_file_in_watched_dir_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (feed, reloader) = setup(dir.path());
        let (_, table) = reloader.rebuild().unwrap();
        let handle = TableHandle::new(table);
        let mut watcher = idle_watcher();
        let mut watched = Watched::default();
        watched.update(&[feed.clone()], &mut watcher).unwrap();
        fs::write(&feed, manifest("U+E903")).unwrap();

        let (tx, rx) = flume::unbounded();
        let other = fs::canonicalize(dir.path()).unwrap().join("notes.txt");
        tx.send(Signal::Changed(other)).unwrap();
        tx.send(Signal::Stop).unwrap();
        assert_eq!(run_loop(&rx, &reloader, &handle, &mut watched, &mut watcher), 0);
        assert_eq!(handle.lookup("home").unwrap(), '\u{e900}');
    }

    #[test]
    fn feed_moved_by_config_edit_is_followed() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let first = root.join("a");
        let second = root.join("b");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();
        fs::write(first.join("icons.toml"), manifest("U+E900")).unwrap();
        fs::write(second.join("icons.toml"), manifest("U+E905")).unwrap();
        let config = root.join("set.toml");
        let feed_section = |sub: &str| {
            format!("[feed]\npath = \"{sub}/icons.toml\"\nformat = \"manifest\"\n")
        };
        fs::write(&config, feed_section("a")).unwrap();

        let reloader = Reloader::new(
            SourceArgs {
                config: Some(config.clone()),
                ..SourceArgs::default()
            },
            EmitArgs::default(),
        );
        let (initial, table) = reloader.rebuild().unwrap();
        let handle = TableHandle::new(table);
        let mut watcher = idle_watcher();
        let mut watched = Watched::default();
        watched
            .update(&reloader.watched_paths(&initial), &mut watcher)
            .unwrap();
        assert!(watched.contains(&first.join("icons.toml")));
        assert!(!watched.contains(&second.join("icons.toml")));

        fs::write(&config, feed_section("b")).unwrap();
        let (tx, rx) = flume::unbounded();
        tx.send(Signal::Changed(config.clone())).unwrap();
        tx.send(Signal::Stop).unwrap();
        assert_eq!(run_loop(&rx, &reloader, &handle, &mut watched, &mut watcher), 1);
        assert_eq!(handle.lookup("home").unwrap(), '\u{e905}');

        assert!(watched.contains(&second.join("icons.toml")));
        assert!(!watched.contains(&first.join("icons.toml")));
        assert!(watched.contains(&config));
        assert!(watched.dirs.contains(&second));
        assert!(!watched.dirs.contains(&first));
    }

    #[test]
    fn bundled_sets_have_nothing_to_watch() {
        let reloader = Reloader::new(
            SourceArgs {
                set: Some("kenney".into()),
                ..SourceArgs::default()
            },
            EmitArgs::default(),
        );
        assert!(reloader.watched_paths(&IconSetConfig::default()).is_empty());
    }
}
