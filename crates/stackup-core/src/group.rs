use std::path::Path;

/// How the commands of a group are chained inside the spawned shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainMode {
    /// Join with `&&`: a failing command stops the rest of the group.
    HaltOnFailure,
    /// Join with the shell's unconditional separator: later commands run
    /// even when an earlier one fails.
    Continue,
}

impl ChainMode {
    pub fn separator(self) -> &'static str {
        match self {
            ChainMode::HaltOnFailure => " && ",
            #[cfg(windows)]
            ChainMode::Continue => " & ",
            #[cfg(not(windows))]
            ChainMode::Continue => " ; ",
        }
    }
}

/// A named, ordered list of shell commands that run together in one
/// terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    /// Label shown on the spawned window.
    pub title: String,
    pub commands: Vec<String>,
}

impl TaskGroup {
    pub fn new(title: impl Into<String>, commands: &[&str]) -> Self {
        Self {
            title: title.into(),
            commands: commands.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Join the commands into the single compound string handed to the
    /// spawned shell. Commands pass through verbatim; nothing is quoted or
    /// escaped beyond inserting the separator.
    pub fn compound_command(&self, mode: ChainMode) -> String {
        self.commands.join(mode.separator())
    }

    /// Directory the group expects, when its first command is a plain
    /// `cd <dir>`. Lets the caller warn before launching into a missing
    /// checkout.
    pub fn leading_cd_target(&self) -> Option<&Path> {
        let rest = self.commands.first()?.strip_prefix("cd ")?.trim();
        if rest.is_empty() {
            None
        } else {
            Some(Path::new(rest))
        }
    }
}

/// The built-in dev stack: container services, the scraper, and the
/// frontend dev server, each in its own window.
pub fn default_groups() -> Vec<TaskGroup> {
    vec![
        TaskGroup::new(
            "Docker Setup",
            &["docker-compose build", "docker-compose up"],
        ),
        TaskGroup::new("Scraper Setup", &["cd scraper", "npm install", "npm start"]),
        TaskGroup::new(
            "Frontend Setup",
            &["cd frontend", "npm install", "npm run dev"],
        ),
    ]
}
