/// One parsed input line: the argument vector (program name first) plus
/// the background flag set by a trailing `&`.
#[derive(Debug, PartialEq)]
pub struct Command {
    pub argv: Vec<String>,
    pub background: bool,
}

impl Command {
    /// Split a raw line on whitespace, collapsing runs of separators.
    /// A final token that is exactly `&` is not an argument: it is
    /// dropped and marks the command as background. Returns `None` for
    /// an empty or whitespace-only line (including a lone `&`).
    pub fn parse(input: &str) -> Option<Self> {
        let mut argv: Vec<String> = input.split_whitespace().map(|s| s.to_string()).collect();

        let background = argv.last().map(|t| t == "&").unwrap_or(false);
        if background {
            argv.pop();
        }

        if argv.is_empty() {
            return None;
        }

        Some(Command { argv, background })
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }
}
