use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::group::{default_groups, ChainMode, TaskGroup};

pub const CONFIG_FILE: &str = "stackup.toml";

/// Optional project configuration. A bare checkout without a `stackup.toml`
/// launches the built-in stack.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(default)]
    pub launcher: LauncherConfig,
    /// Replaces the built-in task groups wholesale when present. An empty
    /// array means "launch nothing".
    #[serde(default, rename = "group")]
    pub groups: Option<Vec<GroupConfig>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Chain each group's commands with `&&` so a failure stops the rest
    /// of its window. `false` switches to the unconditional separator.
    #[serde(default = "default_halt_on_failure")]
    pub halt_on_failure: bool,
    /// Terminal emulator preference ("auto" probes the usual suspects).
    #[serde(default = "default_terminal")]
    pub terminal: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            halt_on_failure: default_halt_on_failure(),
            terminal: default_terminal(),
        }
    }
}

fn default_halt_on_failure() -> bool {
    true
}

fn default_terminal() -> String {
    "auto".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupConfig {
    pub title: String,
    pub commands: Vec<String>,
}

impl LaunchConfig {
    /// Load `stackup.toml` from `dir`, falling back to the defaults when
    /// the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: LaunchConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Terminal preference; `STACKUP_TERMINAL` takes priority over the
    /// config file.
    pub fn terminal_preference(&self) -> String {
        std::env::var("STACKUP_TERMINAL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.launcher.terminal.clone())
    }

    pub fn chain_mode(&self) -> ChainMode {
        if self.launcher.halt_on_failure {
            ChainMode::HaltOnFailure
        } else {
            ChainMode::Continue
        }
    }

    pub fn task_groups(&self) -> Vec<TaskGroup> {
        match &self.groups {
            Some(groups) => groups
                .iter()
                .map(|g| TaskGroup {
                    title: g.title.clone(),
                    commands: g.commands.clone(),
                })
                .collect(),
            None => default_groups(),
        }
    }
}
