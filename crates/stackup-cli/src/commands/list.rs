use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use stackup_core::config::LaunchConfig;
use stackup_core::utils::ui;

pub fn run() -> Result<()> {
    let config = LaunchConfig::load(Path::new("."))?;
    let mode = config.chain_mode();
    let groups = config.task_groups();

    if groups.is_empty() {
        println!("{}", "No task groups configured.".yellow());
        return Ok(());
    }

    ui::section("Task groups");
    for group in &groups {
        println!("\n  {}", group.title.bold());
        for command in &group.commands {
            println!("    {}", command);
        }
        println!("    {} {}", "runs:".cyan(), group.compound_command(mode));
    }
    Ok(())
}
