use std::io::ErrorKind;
use std::process::Command;

use anyhow::{bail, Result};

/// Capability to open a titled, persistent interactive terminal session.
pub trait Terminal {
    /// Request a new terminal window titled `title` running `command`.
    ///
    /// Returns as soon as the window-creation request has been issued.
    /// Never waits for the commands inside the window, and there is no
    /// handle to the spawned session afterwards: completion, failure, and
    /// output are visible only in the window itself.
    fn open(&self, title: &str, command: &str) -> Result<()>;
}

/// Emulator preferences accepted in `stackup.toml` and `STACKUP_TERMINAL`.
/// Only consulted on Linux and the BSDs; Windows and macOS each have a
/// single system mechanism.
pub const SUPPORTED_TERMINALS: &[&str] = &[
    "auto",
    "gnome",
    "konsole",
    "xfce4",
    "kitty",
    "alacritty",
    "xterm",
];

/// The operating system's terminal emulator, resolved at launch time.
pub struct SystemTerminal {
    preference: String,
}

impl SystemTerminal {
    pub fn new(preference: impl Into<String>) -> Self {
        Self {
            preference: preference.into(),
        }
    }
}

impl Default for SystemTerminal {
    fn default() -> Self {
        Self::new("auto")
    }
}

impl Terminal for SystemTerminal {
    fn open(&self, title: &str, command: &str) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();
        for (program, args) in candidates(&self.preference, title, command)? {
            match spawn_detached(&program, &args) {
                Ok(()) => return Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => errors.push(format!("{program}: {e}")),
            }
        }
        if errors.is_empty() {
            bail!("no terminal emulator found to open \"{title}\"");
        }
        bail!(
            "could not open a terminal for \"{title}\": {}",
            errors.join(" | ")
        );
    }
}

/// Spawn the emulator and drop the child handle: the session must outlive
/// the launcher, and no completion signal is ever collected.
fn spawn_detached(program: &str, args: &[String]) -> std::io::Result<()> {
    Command::new(program).args(args).spawn().map(|_| ())
}

/// Ordered `(program, args)` invocations to try for one window.
///
/// Pure so the argv construction is testable without opening anything.
/// Entries whose program is not installed are skipped by the caller.
#[cfg(windows)]
pub fn candidates(
    _preference: &str,
    title: &str,
    command: &str,
) -> Result<Vec<(String, Vec<String>)>> {
    // `start` takes the window title as its first quoted argument; passing
    // it unconditionally keeps the command itself from being eaten as a
    // title. `/K` leaves the new console open after the commands finish.
    Ok(vec![(
        "cmd".to_string(),
        vec![
            "/C".to_string(),
            "start".to_string(),
            title.to_string(),
            "cmd".to_string(),
            "/K".to_string(),
            command.to_string(),
        ],
    )])
}

#[cfg(target_os = "macos")]
pub fn candidates(
    _preference: &str,
    _title: &str,
    command: &str,
) -> Result<Vec<(String, Vec<String>)>> {
    // AppleScript string-literal quoting only; the command itself is not
    // sanitized. Terminal.app keeps the window open once the script ends.
    let escaped = command.replace('\\', "\\\\").replace('"', "\\\"");
    Ok(vec![(
        "osascript".to_string(),
        vec![
            "-e".to_string(),
            format!("tell application \"Terminal\" to do script \"{escaped}\""),
        ],
    )])
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn candidates(
    preference: &str,
    title: &str,
    command: &str,
) -> Result<Vec<(String, Vec<String>)>> {
    // `exec sh` keeps an interactive shell resident after the commands
    // finish so the window stays open for inspection.
    let shell_arg = if command.is_empty() {
        "exec sh".to_string()
    } else {
        format!("{command} ; exec sh")
    };
    let sh = |mut head: Vec<String>| -> Vec<String> {
        head.extend(["sh".to_string(), "-c".to_string(), shell_arg.clone()]);
        head
    };

    let gnome = (
        "gnome-terminal".to_string(),
        sh(vec!["--title".to_string(), title.to_string(), "--".to_string()]),
    );
    let konsole = (
        "konsole".to_string(),
        sh(vec![
            "-p".to_string(),
            format!("tabtitle={title}"),
            "-e".to_string(),
        ]),
    );
    let xfce4 = (
        "xfce4-terminal".to_string(),
        sh(vec!["--title".to_string(), title.to_string(), "-x".to_string()]),
    );
    let kitty = (
        "kitty".to_string(),
        sh(vec!["--title".to_string(), title.to_string()]),
    );
    let alacritty = (
        "alacritty".to_string(),
        sh(vec!["--title".to_string(), title.to_string(), "-e".to_string()]),
    );
    let xterm = (
        "xterm".to_string(),
        sh(vec!["-T".to_string(), title.to_string(), "-e".to_string()]),
    );
    let fallback = ("x-terminal-emulator".to_string(), sh(vec!["-e".to_string()]));

    let list = match preference {
        "auto" => vec![gnome, konsole, xfce4, kitty, alacritty, xterm, fallback],
        "gnome" => vec![gnome],
        "konsole" => vec![konsole],
        "xfce4" => vec![xfce4],
        "kitty" => vec![kitty],
        "alacritty" => vec![alacritty],
        "xterm" => vec![xterm],
        other => bail!(
            "unsupported terminal \"{}\" (supported: {})",
            other,
            SUPPORTED_TERMINALS.join(", ")
        ),
    };
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_detached_missing_program_is_not_found() {
        let err = spawn_detached("stackup-no-such-emulator", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    mod unix {
        use super::super::*;

        #[test]
        fn auto_tries_every_emulator_in_order() {
            let list = candidates("auto", "Docker Setup", "docker-compose up").unwrap();
            let programs: Vec<&str> = list.iter().map(|(p, _)| p.as_str()).collect();
            assert_eq!(
                programs,
                [
                    "gnome-terminal",
                    "konsole",
                    "xfce4-terminal",
                    "kitty",
                    "alacritty",
                    "xterm",
                    "x-terminal-emulator",
                ]
            );
        }

        #[test]
        fn every_candidate_runs_the_command_and_keeps_the_shell() {
            let list = candidates("auto", "Scraper Setup", "cd scraper && npm start").unwrap();
            for (program, args) in list {
                let shell_arg = args.last().unwrap();
                assert!(
                    shell_arg.contains("cd scraper && npm start"),
                    "{program} lost the command: {args:?}"
                );
                assert!(shell_arg.ends_with("exec sh"), "{program}: {args:?}");
            }
        }

        #[test]
        fn titled_emulators_carry_the_title() {
            let list = candidates("auto", "Frontend Setup", "npm run dev").unwrap();
            for (program, args) in list {
                if program == "x-terminal-emulator" {
                    continue;
                }
                assert!(
                    args.iter().any(|a| a.contains("Frontend Setup")),
                    "{program} dropped the title: {args:?}"
                );
            }
        }

        #[test]
        fn pinned_preference_yields_single_candidate() {
            let list = candidates("kitty", "Docker Setup", "docker-compose up").unwrap();
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].0, "kitty");
        }

        #[test]
        fn empty_command_still_opens_an_interactive_shell() {
            let list = candidates("xterm", "Idle", "").unwrap();
            assert_eq!(list[0].1.last().unwrap(), "exec sh");
        }

        #[test]
        fn unknown_preference_is_rejected() {
            let err = candidates("hyper", "Docker Setup", "docker-compose up").unwrap_err();
            assert!(err.to_string().contains("unsupported terminal"));
            assert!(err.to_string().contains("auto"));
        }
    }
}
