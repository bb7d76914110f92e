use std::env;
use std::io::ErrorKind;

use crate::command::Command;

/// What the dispatcher did with a command.
#[derive(Debug, PartialEq)]
pub enum BuiltinAction {
    /// Recognized and executed in-process.
    Handled,
    /// `exit`: the caller should leave the interactive loop.
    Exit,
    /// Not a builtin; fall through to process execution.
    NotHandled,
}

/// Run `cmd` as a builtin if its name matches one. Only `cd` and
/// `exit` are recognized; anything else falls through untouched.
pub fn dispatch(cmd: &Command) -> BuiltinAction {
    match cmd.program() {
        "cd" => {
            cd(cmd.argv.get(1).map(|s| s.as_str()));
            BuiltinAction::Handled
        }
        "exit" => BuiltinAction::Exit,
        _ => BuiltinAction::NotHandled,
    }
}

fn cd(dir: Option<&str>) {
    let home = env::var("HOME").unwrap_or_else(|_| "/".to_string());
    let target = dir.unwrap_or(&home);

    if let Err(e) = env::set_current_dir(target) {
        if e.kind() == ErrorKind::NotFound {
            eprintln!("kjell: no such file or directory: {}", target);
        } else {
            eprintln!("kjell: failed to change directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap()
    }

    #[test]
    fn test_unknown_names_fall_through() {
        assert_eq!(dispatch(&parse("ls")), BuiltinAction::NotHandled);
        assert_eq!(dispatch(&parse("cdx")), BuiltinAction::NotHandled);
        assert_eq!(
            dispatch(&parse("not-a-real-command")),
            BuiltinAction::NotHandled
        );
    }

    #[test]
    fn test_exit_is_reported_not_executed() {
        assert_eq!(dispatch(&parse("exit")), BuiltinAction::Exit);
    }

    // Touches the process-wide cwd, so valid and invalid targets are
    // exercised in a single test to keep them ordered.
    #[test]
    fn test_cd_changes_directory_and_survives_bad_paths() {
        let before = env::current_dir().unwrap();

        assert_eq!(
            dispatch(&parse("cd /nonexistent-path-xyz")),
            BuiltinAction::Handled
        );
        assert_eq!(env::current_dir().unwrap(), before);

        assert_eq!(dispatch(&parse("cd /")), BuiltinAction::Handled);
        assert_eq!(env::current_dir().unwrap(), std::path::PathBuf::from("/"));

        env::set_current_dir(&before).unwrap();
    }
}
