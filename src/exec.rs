use std::io::ErrorKind;
use std::process::{Child, Command as ProcessCommand, ExitStatus, Stdio};

/// SIGINT disposition for the child. The shell itself ignores SIGINT;
/// a foreground child must get the default back before exec so Ctrl-C
/// kills the job and not the shell, while background children keep the
/// inherited ignore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interrupt {
    Reset,
    Inherit,
}

fn spawn(argv: &[String], interrupt: Interrupt, stdin: Stdio) -> Option<Child> {
    let mut cmd = ProcessCommand::new(&argv[0]);
    cmd.args(&argv[1..]).stdin(stdin);

    if interrupt == Interrupt::Reset {
        use std::os::unix::process::CommandExt;
        unsafe {
            // Runs between fork and exec, so only async-signal-safe
            // calls are allowed here.
            cmd.pre_exec(|| {
                libc::signal(libc::SIGINT, libc::SIG_DFL);
                Ok(())
            });
        }
    }

    match cmd.spawn() {
        Ok(child) => Some(child),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("kjell: command not found: {}", argv[0]);
            None
        }
        Err(_) => {
            eprintln!("kjell: failed to start command: {}", argv[0]);
            None
        }
    }
}

/// Start `argv` and block until that child exits. Returns `None` when
/// the program could not be started (already reported). A wait failure
/// after a successful spawn has no recovery path and kills the shell.
pub fn run_foreground(argv: &[String]) -> Option<ExitStatus> {
    let mut child = spawn(argv, Interrupt::Reset, Stdio::inherit())?;

    match child.wait() {
        Ok(status) => Some(status),
        Err(e) => {
            eprintln!("kjell: wait failed unexpectedly: {}", e);
            std::process::exit(1);
        }
    }
}

/// Start `argv` without waiting. Stdin is detached so a background job
/// cannot compete with the shell for the terminal.
pub fn run_background(argv: &[String]) -> Option<Child> {
    spawn(argv, Interrupt::Inherit, Stdio::null())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Vec<String> {
        argv.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_foreground_reports_exit_status() {
        let status = run_foreground(&args(&["true"])).unwrap();
        assert!(status.success());

        let status = run_foreground(&args(&["false"])).unwrap();
        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn test_missing_program_is_reported_not_fatal() {
        assert!(run_foreground(&args(&["not-a-real-command"])).is_none());
        assert!(run_background(&args(&["not-a-real-command"])).is_none());
    }

    #[test]
    fn test_background_returns_without_waiting() {
        let mut child = run_background(&args(&["sleep", "2"])).unwrap();
        assert!(child.id() > 0);
        // Still running when we get the handle back.
        assert!(child.try_wait().unwrap().is_none());
        child.kill().unwrap();
        child.wait().unwrap();
    }
}
