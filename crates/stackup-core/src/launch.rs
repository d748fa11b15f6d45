use anyhow::{bail, Result};

use crate::group::{ChainMode, TaskGroup};
use crate::terminal::Terminal;
use crate::utils::ui;

/// Open one terminal window per group, in order.
///
/// Window creation is fire-and-forget: each group's window is requested and
/// the driver moves straight on to the next, so a slow or hanging command
/// never delays the remaining groups. A group whose window could not be
/// created does not stop the others either; every failure is printed as it
/// happens and the driver errs at the end naming the groups that failed.
pub fn launch_all(terminal: &dyn Terminal, groups: &[TaskGroup], mode: ChainMode) -> Result<()> {
    let mut failed: Vec<&str> = Vec::new();
    for group in groups {
        let command = group.compound_command(mode);
        match terminal.open(&group.title, &command) {
            Ok(()) => ui::opened(&group.title, &command),
            Err(e) => {
                ui::error(&format!("{}: {e:#}", group.title));
                failed.push(&group.title);
            }
        }
    }
    if !failed.is_empty() {
        bail!("failed to open: {}", failed.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::default_groups;
    use std::cell::RefCell;

    /// Scripted stand-in for the OS terminal. Sessions it "creates" are
    /// recorded and stay running forever, so the tests observe exactly what
    /// the driver requested and whether it ever waited.
    #[derive(Default)]
    struct ScriptedTerminal {
        fail_on: Option<&'static str>,
        opened: RefCell<Vec<(String, String)>>,
    }

    impl Terminal for ScriptedTerminal {
        fn open(&self, title: &str, command: &str) -> Result<()> {
            if self.fail_on == Some(title) {
                bail!("could not create a terminal session");
            }
            self.opened
                .borrow_mut()
                .push((title.to_string(), command.to_string()));
            Ok(())
        }
    }

    #[test]
    fn opens_the_three_default_groups_in_order() {
        let terminal = ScriptedTerminal::default();
        launch_all(&terminal, &default_groups(), ChainMode::HaltOnFailure).unwrap();

        let opened = terminal.opened.borrow();
        let titles: Vec<&str> = opened.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["Docker Setup", "Scraper Setup", "Frontend Setup"]);
        assert_eq!(opened[1].1, "cd scraper && npm install && npm start");
    }

    #[test]
    fn window_failure_does_not_stop_later_groups() {
        let terminal = ScriptedTerminal {
            fail_on: Some("Docker Setup"),
            ..ScriptedTerminal::default()
        };
        let err = launch_all(&terminal, &default_groups(), ChainMode::HaltOnFailure).unwrap_err();

        assert!(err.to_string().contains("Docker Setup"));
        let opened = terminal.opened.borrow();
        let titles: Vec<&str> = opened.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["Scraper Setup", "Frontend Setup"]);
    }

    #[test]
    fn no_groups_is_not_an_error() {
        let terminal = ScriptedTerminal::default();
        launch_all(&terminal, &[], ChainMode::HaltOnFailure).unwrap();
        assert!(terminal.opened.borrow().is_empty());
    }
}
