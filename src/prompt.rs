use std::env;

pub struct Prompt;

impl Prompt {
    pub fn new() -> Self {
        Prompt
    }

    /// `<cwd>$ ` with a cwd under `$HOME` abbreviated to `~`-relative
    /// form. Falls back to a bare `$ ` if the cwd cannot be read.
    pub fn get_string(&self) -> String {
        match env::current_dir() {
            Ok(cwd) => {
                let path = cwd.display().to_string();
                let home = env::var("HOME").unwrap_or_default();
                format!("{}$ ", abbreviate_home(&path, &home))
            }
            Err(_) => String::from("$ "),
        }
    }
}

fn abbreviate_home(path: &str, home: &str) -> String {
    if home.len() > 1 {
        if let Some(rest) = path.strip_prefix(home) {
            if rest.is_empty() || rest.starts_with('/') {
                return format!("~{}", rest);
            }
        }
    }
    path.to_string()
}
