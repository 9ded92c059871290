//! Log setup. The terminal belongs to the UI, so records go to a file.

use std::{
    fs::{self, File},
    path::Path,
};

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Env, Target};
use log::info;
use plexus_config::Config;

/// Route `log` records to the configured file, filtered by `RUST_LOG` (default `info`).
///
/// Runs before the terminal is taken over, so a missing log location is
/// reported on stderr.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_path() else {
        eprintln!("plexus: no data directory found and no log_file set, logging disabled");
        return Ok(());
    };

    let file = open_log_file(&path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .init();

    info!("logging to {}", path.display());
    Ok(())
}

/// Create (or truncate) the log file, making its directory first.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    File::create(path).wrap_err_with(|| format!("failed to create log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = std::env::temp_dir().join(format!("plexus-log-{}", std::process::id()));
        let path = dir.join("nested").join("plexus.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        // Reopening starts a fresh log.
        open_log_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_log_file_reports_bad_path() {
        let dir = std::env::temp_dir().join(format!("plexus-log-blocked-{}", std::process::id()));
        fs::write(&dir, "not a directory").unwrap();

        let err = open_log_file(&dir.join("plexus.log")).unwrap_err();
        assert!(format!("{err}").contains("failed to create log directory"));
        fs::remove_file(&dir).unwrap();
    }
}
