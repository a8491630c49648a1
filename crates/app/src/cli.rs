use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

pub const MEMORY_DB_URL: &str = "sqlite::memory:";

#[derive(Debug, Parser)]
#[command(name = "edulearn", version, about = "EduLearn student desktop app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(Debug, Clone, Args)]
pub struct StorageArgs {
    /// SQLite database holding the session record.
    #[arg(
        long = "db",
        env = "EDULEARN_DB_URL",
        default_value = "edulearn.sqlite3",
        global = true
    )]
    pub db_url: String,

    /// Keep the session in memory; nothing survives a restart.
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the desktop window (default).
    Ui,
    /// Inspect or reset the stored session.
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum SessionCommand {
    /// Print the stored session record.
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Sign out, removing every session key.
    Clear,
}

impl StorageArgs {
    /// The database URL to connect to, or `None` for an in-memory session.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        (!self.ephemeral).then(|| normalize_sqlite_url(&self.db_url))
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == MEMORY_DB_URL || trimmed.starts_with("sqlite:file:") {
        return trimmed.to_string();
    }

    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Filesystem path behind a `sqlite://` URL; `None` for in-memory databases.
#[must_use]
pub fn sqlite_file_path(db_url: &str) -> Option<PathBuf> {
    if db_url == MEMORY_DB_URL || db_url.starts_with("sqlite:file:") {
        return None;
    }
    let rest = db_url.strip_prefix("sqlite://")?;
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);
    Some(PathBuf::from(path))
}
