//! Entry name list access
//!
//! The newline-delimited name list is produced by an external process; this
//! module only reads it. When the file is absent and a regeneration command
//! is configured, the command is run once and the file re-read.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tokio::process::Command;
use tracing::{info, warn};

/// Known entity names for pickers and autocompletion
#[derive(Debug, Clone, Default)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Read the list, regenerating it first via `regenerate_cmd` if absent
    ///
    /// With no command configured and no file present, an empty list is
    /// returned and a warning logged; the tool stays usable without
    /// autocompletion.
    pub async fn ensure(path: &Path, regenerate_cmd: Option<&str>) -> Result<Self> {
        if !path.exists() {
            match regenerate_cmd {
                Some(cmd) => {
                    info!(command = %cmd, "entry name list missing, regenerating");
                    let output = Command::new("sh")
                        .arg("-c")
                        .arg(cmd)
                        .output()
                        .await
                        .with_context(|| format!("Failed to run: {cmd}"))?;
                    if !output.status.success() {
                        return Err(anyhow!(
                            "Name list regeneration failed: {}",
                            String::from_utf8_lossy(&output.stderr)
                        ));
                    }
                }
                None => {
                    warn!(path = %path.display(), "entry name list missing and no regeneration command configured");
                    return Ok(Self::default());
                }
            }
        }
        Self::read(path)
    }

    /// Read the list from an existing file
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read name list: {}", path.display()))?;
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
