// File: ./src/logging.rs
// The TUI owns the terminal, so log records go to a file and never to stderr.
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "tickbox", "tickbox").map(|proj| proj.data_dir().join("tickbox.log"))
}

/// Opens `path` for appending, creating its parent directory first.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))
}

fn file_target(path: Option<PathBuf>) -> Result<env_logger::Target> {
    let path = path.ok_or_else(|| anyhow!("no data directory for the log file"))?;
    let file = open_log_file(&path)?;
    Ok(env_logger::Target::Pipe(Box::new(file)))
}

/// Initializes `env_logger`. `RUST_LOG` wins over `default_level`.
/// Fails instead of falling back to stderr when no log file can be opened.
pub fn init(default_level: &str) -> Result<()> {
    let target = file_target(log_path())?;
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.target(target);
    builder.try_init()?;
    Ok(())
}

/// Appends panics to the log file before handing over to the previous hook.
pub fn install_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        if let Some(path) = log_path()
            && let Ok(mut file) = open_log_file(&path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_dir_is_an_error() {
        assert!(file_target(None).is_err());
    }

    #[test]
    fn log_file_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tickbox.log");
        assert!(file_target(Some(path.clone())).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn unusable_parent_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let err = open_log_file(&blocker.join("tickbox.log")).unwrap_err();
        assert!(format!("{:#}", err).contains("blocker"));
    }
}
