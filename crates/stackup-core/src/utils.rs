/// Pretty CLI output helpers using the `colored` crate.
pub mod ui {
    use colored::Colorize;

    /// Print an "open" action for a launched window (green)
    pub fn opened(title: &str, command: &str) {
        println!("  {} {} ({})", "open".green(), title, command);
    }

    /// Print a "skip" action (yellow)
    pub fn skipped(title: &str) {
        println!("  {} {}", "skip".yellow(), title);
    }

    /// Print a section header (bold)
    pub fn section(title: &str) {
        println!("\n{}", title.bold());
    }

    /// Print a success message (green bold)
    pub fn success(msg: &str) {
        println!("\n{}", msg.green().bold());
    }

    /// Print a warning (yellow)
    pub fn warn(msg: &str) {
        println!("  {} {}", "warn".yellow(), msg);
    }

    /// Print an error (red)
    pub fn error(msg: &str) {
        eprintln!("  {} {}", "error".red(), msg);
    }

    /// Print a check result (pass)
    pub fn check_pass(msg: &str) {
        println!("  {} {}", "\u{2713}".green(), msg);
    }

    /// Print a check result (fail)
    pub fn check_fail(msg: &str) {
        println!("  {} {}", "\u{2717}".red(), msg);
    }
}
