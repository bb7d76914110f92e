use std::collections::HashMap;
use std::process::Child;

#[derive(Debug)]
pub struct Job {
    pub pid: u32,
    child: Child,
}

/// The set of background jobs not yet confirmed exited. Jobs are keyed
/// by a small shell-assigned id; each is removed exactly once, when the
/// reaper first observes its exit.
pub struct JobManager {
    jobs: HashMap<u32, Job>,
    next_id: u32,
}

impl JobManager {
    pub fn new() -> Self {
        JobManager {
            jobs: HashMap::new(),
            next_id: 1,
        }
    }

    /// Track a freshly spawned background child and announce it as
    /// `[<id>] <pid>`.
    pub fn add(&mut self, child: Child) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let pid = child.id();
        self.jobs.insert(id, Job { pid, child });
        println!("[{}] {}", id, pid);
        id
    }

    pub fn outstanding(&self) -> usize {
        self.jobs.len()
    }

    /// Poll every tracked job once, without blocking, and drop the ones
    /// that have exited: `[<id>] <pid> done` for a clean exit, or
    /// `[<id>] <pid> exit <code>` otherwise.
    pub fn reap(&mut self) {
        let mut finished = Vec::new();

        for (id, job) in self.jobs.iter_mut() {
            match job.child.try_wait() {
                Ok(Some(status)) => {
                    match status.code() {
                        Some(0) => println!("[{}] {} done", id, job.pid),
                        Some(code) => println!("[{}] {} exit {}", id, job.pid, code),
                        // Killed by a signal; there is no exit code to show.
                        None => println!("[{}] {} done", id, job.pid),
                    }
                    finished.push(*id);
                }
                Ok(None) => {}
                Err(e) => {
                    eprintln!("kjell: wait failed unexpectedly: {}", e);
                    std::process::exit(1);
                }
            }
        }

        for id in finished {
            self.jobs.remove(&id);
        }
    }
}
