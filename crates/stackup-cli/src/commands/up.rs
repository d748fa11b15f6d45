use std::io::IsTerminal;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use stackup_core::config::LaunchConfig;
use stackup_core::group::TaskGroup;
use stackup_core::launch::launch_all;
use stackup_core::terminal::SystemTerminal;
use stackup_core::utils::ui;

pub fn run(yes: bool, dry_run: bool) -> Result<()> {
    let config = LaunchConfig::load(Path::new("."))?;
    let mode = config.chain_mode();
    let groups = config.task_groups();

    if dry_run {
        println!("{}", "Would open:".bold());
        for group in &groups {
            println!(
                "  {} {} ({})",
                "open".cyan(),
                group.title,
                group.compound_command(mode)
            );
        }
        return Ok(());
    }

    let groups = confirm_missing_dirs(groups, yes)?;
    if groups.is_empty() {
        println!("{}", "Nothing to launch.".yellow());
        return Ok(());
    }

    println!("{}", "Starting the dev stack...".bold());
    let terminal = SystemTerminal::new(config.terminal_preference());
    launch_all(&terminal, &groups, mode)?;
    ui::success(&format!("{} window(s) opened.", groups.len()));
    Ok(())
}

/// Ask before launching a group whose leading `cd` target does not exist,
/// since its remaining commands would run in the wrong directory. Skipped
/// with `--yes` or a non-interactive stdin; the default answer launches
/// anyway.
fn confirm_missing_dirs(groups: Vec<TaskGroup>, yes: bool) -> Result<Vec<TaskGroup>> {
    if yes || !std::io::stdin().is_terminal() {
        for group in &groups {
            if let Some(dir) = group.leading_cd_target() {
                if !dir.exists() {
                    ui::warn(&format!(
                        "{} expects {}/ which does not exist",
                        group.title,
                        dir.display()
                    ));
                }
            }
        }
        return Ok(groups);
    }

    let mut kept = Vec::with_capacity(groups.len());
    for group in groups {
        let prompt = match group.leading_cd_target() {
            Some(dir) if !dir.exists() => Some(format!(
                "{} expects {}/ which does not exist. Launch it anyway?",
                group.title,
                dir.display()
            )),
            _ => None,
        };
        match prompt {
            Some(text) => {
                if Confirm::new().with_prompt(text).default(true).interact()? {
                    kept.push(group);
                } else {
                    ui::skipped(&group.title);
                }
            }
            None => kept.push(group),
        }
    }
    Ok(kept)
}
