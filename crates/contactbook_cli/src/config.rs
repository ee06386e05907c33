//! Command-line configuration.

use clap::Parser;
use contactbook_core::default_log_level;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "contactbook")]
#[command(about = "Interactive contact book with birthday reminders")]
pub struct Cli {
    /// Address book file, created on first save
    #[arg(long, default_value = "addressbook.json")]
    pub book: PathBuf,
    /// Directory for rolling log files (default: ./logs)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error (default depends on build mode)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Skip file logging entirely
    #[arg(long)]
    pub no_log: bool,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }

    /// Resolves the log directory to an absolute path against `cwd`.
    pub fn log_dir(&self, cwd: &Path) -> PathBuf {
        match &self.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::{Path, PathBuf};

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["contactbook"]).unwrap();
        assert_eq!(cli.book, PathBuf::from("addressbook.json"));
        assert_eq!(cli.log_dir(Path::new("/work")), Path::new("/work/logs"));
        assert!(!cli.no_log);
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "contactbook",
            "--book",
            "/tmp/book.json",
            "--log-dir",
            "var/log",
            "--log-level",
            "warn",
            "--no-log",
        ])
        .unwrap();

        assert_eq!(cli.book, PathBuf::from("/tmp/book.json"));
        assert_eq!(cli.log_dir(Path::new("/work")), Path::new("/work/var/log"));
        assert_eq!(cli.log_level(), "warn");
        assert!(cli.no_log);
    }
}
