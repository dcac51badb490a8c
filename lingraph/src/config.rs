//! Application configuration
//!
//! Defaults come from environment variables (a `.env` file is honored at
//! startup); command-line arguments override them.

use std::path::PathBuf;

/// Runtime configuration for the lingraph tools
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the external tables and the entry name list
    pub data_dir: PathBuf,
    /// Base URL of the external graph browser the queries are sent to
    pub browser_url: String,
    /// External command for author info lookup, invoked with the author id
    pub author_info_cmd: Option<String>,
    /// External command that regenerates the entry name list
    pub names_cmd: Option<String>,
    /// API server bind host
    pub host: String,
    /// API server bind port
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::var("LINGRAPH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./result")),
            browser_url: std::env::var("LINGRAPH_BROWSER_URL")
                .unwrap_or_else(|_| "https://grammarxiv.net/entry".to_string()),
            author_info_cmd: std::env::var("LINGRAPH_AUTHOR_CMD").ok(),
            names_cmd: std::env::var("LINGRAPH_NAMES_CMD").ok(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Path of the entries table
    pub fn entries_path(&self) -> PathBuf {
        self.data_dir.join("entries.tsv")
    }

    /// Path of the pre-joined relations table
    pub fn relations_path(&self) -> PathBuf {
        self.data_dir.join("rels_w_type.tsv")
    }

    /// Path of the newline-delimited entry name list
    pub fn names_path(&self) -> PathBuf {
        self.data_dir.join("entry_names.txt")
    }
}
