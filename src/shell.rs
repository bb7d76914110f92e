use std::io::{self, BufRead, Write};

use crate::builtins::{self, BuiltinAction};
use crate::command::Command;
use crate::exec;
use crate::jobs::JobManager;
use crate::prompt::Prompt;

pub struct Shell {
    prompt: Prompt,
    jobs: JobManager,
    running: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            prompt: Prompt::new(),
            jobs: JobManager::new(),
            running: true,
        }
    }

    /// The interactive loop: reap finished jobs, prompt, read a line,
    /// dispatch. Runs until `exit` or end of input.
    pub fn run(&mut self) {
        // The shell must survive Ctrl-C so the interrupt reaches the
        // foreground job instead.
        {
            use nix::sys::signal::{signal, SigHandler, Signal};
            if let Err(e) = unsafe { signal(Signal::SIGINT, SigHandler::SigIgn) } {
                eprintln!("kjell: cannot ignore SIGINT: {}", e);
            }
        }

        let stdin = io::stdin();

        while self.running {
            if self.jobs.outstanding() > 0 {
                self.jobs.reap();
            }

            print!("{}", self.prompt.get_string());
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break, // end of input
                Ok(_) => {}
                Err(e) => {
                    eprintln!("kjell: error reading input: {}", e);
                    break;
                }
            }

            let cmd = match Command::parse(&line) {
                Some(cmd) => cmd,
                None => continue,
            };

            match builtins::dispatch(&cmd) {
                BuiltinAction::Handled => {}
                BuiltinAction::Exit => self.running = false,
                BuiltinAction::NotHandled => {
                    if cmd.background {
                        if let Some(child) = exec::run_background(&cmd.argv) {
                            self.jobs.add(child);
                        }
                    } else {
                        exec::run_foreground(&cmd.argv);
                    }
                }
            }
        }
    }
}
