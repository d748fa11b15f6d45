//! Environment checks for the stack the launcher spawns. The launcher
//! itself never sees a failure inside a window, so `stackup doctor` is the
//! way to catch a missing tool or directory before the windows open.

use std::path::Path;
use std::process::Command;

use crate::config::{LaunchConfig, CONFIG_FILE};

/// Outcome of a single environment check.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
        }
    }
}

/// A titled block of related checks.
#[derive(Debug)]
pub struct CheckSection {
    pub title: String,
    pub checks: Vec<CheckResult>,
}

/// Run every check against `project_root`.
pub fn run_checks(project_root: &Path) -> Vec<CheckSection> {
    vec![
        CheckSection {
            title: "Project Structure".to_string(),
            checks: vec![
                check_compose_file(project_root),
                check_service_dir(project_root, "Scraper", "scraper"),
                check_service_dir(project_root, "Frontend", "frontend"),
                check_node_modules(project_root, "Scraper Deps", "scraper"),
                check_node_modules(project_root, "Frontend Deps", "frontend"),
                check_config(project_root),
            ],
        },
        CheckSection {
            title: "Development Tools".to_string(),
            checks: vec![
                check_tool(
                    "docker",
                    &["--version"],
                    "Docker",
                    "https://docs.docker.com/get-docker",
                ),
                check_tool(
                    "docker-compose",
                    &["--version"],
                    "Docker Compose",
                    "https://docs.docker.com/compose/install",
                ),
                check_tool("node", &["--version"], "Node.js", "https://nodejs.org"),
                check_tool("npm", &["--version"], "npm", "https://nodejs.org"),
            ],
        },
    ]
}

fn check_compose_file(root: &Path) -> CheckResult {
    let names = [
        "docker-compose.yml",
        "docker-compose.yaml",
        "compose.yml",
        "compose.yaml",
    ];
    match names.iter().find(|n| root.join(n).exists()) {
        Some(name) => CheckResult::pass("Compose", format!("{} found", name)),
        None => CheckResult::fail(
            "Compose",
            "no compose file found (the Docker Setup window will fail)",
        ),
    }
}

fn check_service_dir(root: &Path, label: &str, dir: &str) -> CheckResult {
    if root.join(dir).join("package.json").exists() {
        CheckResult::pass(label, format!("{}/package.json found", dir))
    } else {
        CheckResult::fail(label, format!("{}/package.json not found", dir))
    }
}

fn check_node_modules(root: &Path, label: &str, dir: &str) -> CheckResult {
    if root.join(dir).join("node_modules").exists() {
        CheckResult::pass(label, format!("{}/node_modules installed", dir))
    } else {
        CheckResult::fail(
            label,
            format!("{}/node_modules not found (first launch will run npm install)", dir),
        )
    }
}

fn check_config(root: &Path) -> CheckResult {
    if !root.join(CONFIG_FILE).exists() {
        return CheckResult::pass("Config", "no stackup.toml (using the built-in groups)");
    }
    match LaunchConfig::load(root) {
        Ok(config) => CheckResult::pass(
            "Config",
            format!("stackup.toml valid ({} group(s))", config.task_groups().len()),
        ),
        Err(e) => CheckResult::fail("Config", format!("stackup.toml invalid: {e}")),
    }
}

fn check_tool(name: &str, args: &[&str], label: &str, install_hint: &str) -> CheckResult {
    match Command::new(name).args(args).output() {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let short = version
                .split_whitespace()
                .find(|tok| tok.chars().next().is_some_and(|c| c.is_ascii_digit() || c == 'v'))
                .unwrap_or(version.as_str());
            CheckResult::pass(label, format!("{} ({})", label, short))
        }
        Ok(_) => CheckResult::fail(label, format!("{} found but returned an error", label)),
        Err(_) => CheckResult::fail(
            label,
            format!("{} not found (install: {})", label, install_hint),
        ),
    }
}
