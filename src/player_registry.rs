//! Discovery of players from a directory of persisted model artifacts.

use std::{io::Write, path::Path, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{configuration::Configuration, errors::DiscoveryError, player::PlayerHandle};

/// File name of the persisted policy artifact expected in each player folder.
pub const MODEL_FILE_NAME: &str = "model.zip";

/// Enumerates the immediate subdirectories of `directory` and builds one
/// [`PlayerHandle`] per subdirectory containing a [`MODEL_FILE_NAME`] file.
///
/// The handle's name is the subdirectory's base name. Subdirectories without
/// the artifact, and plain files, are skipped; that is expected control flow,
/// not an error. The artifact's contents are not opened or validated here.
///
/// Enumeration order is platform-dependent; callers that need a stable player
/// ordering must sort by name themselves.
///
/// # Errors
/// Fails if `directory` does not exist, is not a directory, or cannot be
/// read.
#[instrument(skip(config))]
pub fn discover_players(
    directory: impl AsRef<Path> + std::fmt::Debug,
    config: &Configuration,
) -> Result<Vec<Arc<PlayerHandle>>, DiscoveryError> {
    let verbose = config.verbose;
    let directory = directory.as_ref();

    if !Path::is_dir(directory) {
        return Err(DiscoveryError::InvalidRoot(directory.to_path_buf()));
    }

    const RED: &str = "\x1b[31m";
    const GREEN: &str = "\x1b[32m";
    const RESET: &str = "\x1b[0m";

    let subdirs = std::fs::read_dir(directory)
        .map_err(|source| DiscoveryError::Unreadable {
            path: directory.to_path_buf(),
            source,
        })?
        .filter_map(|item| item.ok().map(|item| item.path()))
        .collect::<Vec<_>>();
    info!(player_directories = ?subdirs);

    let longest_name = subdirs
        .iter()
        .filter_map(|path| path.file_name())
        .fold(0, |acu, name| acu.max(name.len()))
        + 3; // at least 3 dots

    if verbose {
        println!("Collecting players...");
    }

    let mut players: Vec<Arc<PlayerHandle>> = Vec::new();
    for subdir in subdirs {
        let Some(name) = subdir
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
        else {
            warn!("Skipping entry with non UTF-8 name: {subdir:?}");
            continue;
        };

        if verbose {
            print!("Collecting {name:·<longest_name$} ");
            let _ = std::io::stdout().flush(); // try to flush stdout
        }

        if !subdir.is_dir() {
            warn!("Not a directory: '{name}'");
            if verbose {
                println!("{RED}Not a directory{RESET}");
            }
            continue;
        }

        let model_path = subdir.join(MODEL_FILE_NAME);
        if !model_path.is_file() {
            warn!("No '{MODEL_FILE_NAME}' in '{name}'");
            if verbose {
                println!("{RED}No {MODEL_FILE_NAME}{RESET}");
            }
            continue;
        }

        players.push(Arc::new(PlayerHandle::new(name, model_path)));

        if verbose {
            println!("{GREEN}Ok{RESET}");
        }
    }

    Ok(players)
}
