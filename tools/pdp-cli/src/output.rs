//! Output formatting for the CLI.
//!
//! Human output is suppressed in `--json` mode, where only the command's
//! report reaches stdout.

use console::{style, StyledObject};
use product_details::gate::PageBranch;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn line(&self, marker: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", marker, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    /// Warnings go to stderr.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are reported in both modes; as an object in JSON mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// Print a report as pretty JSON.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode report: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Print raw text (e.g. rendered HTML), indented.
    pub fn block(&self, text: &str) {
        if self.json {
            return;
        }
        text.lines()
            .for_each(|line| println!("    {}", style(line).dim()));
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored label for a page branch.
pub fn branch_badge(branch: PageBranch) -> String {
    let label = match branch {
        PageBranch::Product => style("product").green(),
        PageBranch::NotFound => style("not found").red(),
        PageBranch::Offline => style("offline").yellow(),
        PageBranch::Pending => style("pending").dim(),
    };
    label.to_string()
}
