//! Command-line flags for the todo shell.

use clap::Parser;
use std::path::PathBuf;
use todo_core::{default_log_level, AppConfig, DEFAULT_DATA_FILE};

#[derive(Parser, Debug, Clone)]
#[command(name = "todo")]
#[command(version = todo_core::core_version())]
#[command(about = "Interactive single-user todo list", long_about = None)]
pub struct Cli {
    /// JSON file holding the todo list
    #[arg(long, short = 'f', env = "TODO_FILE", default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Directory for rolling log files; logging is off when unset
    #[arg(long, env = "TODO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            data_file: self.file,
            log_level: self.log_level,
            log_dir: self.log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "todo",
            "--file",
            "/tmp/list.json",
            "--log-level",
            "warn",
            "--log-dir",
            "logs",
        ]);
        let config = cli.into_config();
        assert_eq!(config.data_file, PathBuf::from("/tmp/list.json"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
