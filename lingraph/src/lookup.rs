//! External author info lookup
//!
//! The lookup itself is an external command (the original tool shells out
//! to a Semantic Scholar script); our responsibility ends at passing the
//! author id and relaying the returned lines, minus a cosmetic prefix
//! substitution.

use anyhow::{anyhow, Context, Result};
use tokio::process::Command;

/// Number of preamble lines the external command prints before the papers
const PREAMBLE_LINES: usize = 3;

/// Runner for the configured author lookup command
#[derive(Debug, Clone)]
pub struct AuthorLookup {
    command: String,
}

impl AuthorLookup {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Fetch recent-paper lines for an author id
    ///
    /// The command is invoked with the id appended; its preamble is dropped
    /// and the `"SS "` marker replaced with a bullet, verbatim otherwise.
    pub async fn run(&self, author_id: &str) -> Result<Vec<String>> {
        let command_line = format!("{} {}", self.command, author_id);
        let output = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .output()
            .await
            .with_context(|| format!("Failed to run: {command_line}"))?;

        if !output.status.success() {
            return Err(anyhow!(
                "Author lookup failed: {}",
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .skip(PREAMBLE_LINES)
            .map(|line| line.replace("SS ", "・"))
            .collect())
    }
}
