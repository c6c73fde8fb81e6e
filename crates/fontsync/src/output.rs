//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::Deref;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Create a progress bar; hidden when `quiet`
pub fn progress_bar(len: u64, msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    let template = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
    if let Ok(progress_style) = ProgressStyle::with_template(template) {
        pb.set_style(progress_style.progress_chars("#>-"));
    }
    pb.set_message(msg.to_string());
    pb
}

/// Progress bar that is cleared when dropped, including on early return
pub struct ProgressGuard(ProgressBar);

impl ProgressGuard {
    pub fn new(pb: ProgressBar) -> Self {
        Self(pb)
    }
}

impl Deref for ProgressGuard {
    type Target = ProgressBar;

    fn deref(&self) -> &ProgressBar {
        &self.0
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}
