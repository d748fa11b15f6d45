use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use stackup_core::doctor;
use stackup_core::utils::ui;

pub fn run() -> Result<()> {
    println!("{}", "Stackup Doctor".bold());

    let sections = doctor::run_checks(Path::new("."));

    let mut total = 0;
    let mut passed = 0;
    for section in &sections {
        println!();
        println!("{}", section.title.bold().underline());
        for check in &section.checks {
            total += 1;
            if check.passed {
                passed += 1;
                ui::check_pass(&check.message);
            } else {
                ui::check_fail(&check.message);
            }
        }
    }

    println!();
    let summary = format!("{}/{} checks passed", passed, total);
    if passed == total {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.yellow().bold());
        println!(
            "{}",
            format!("{} issue(s) found, see above for details", total - passed).yellow()
        );
    }

    Ok(())
}
