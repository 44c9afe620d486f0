use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Initialize color settings (must run before any output).
/// Honors NO_COLOR and disables colors on non-terminal stdout.
pub fn init_colors() {
    if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn set_quiet(on: bool) {
    QUIET.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn mark_interrupted() {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn header(title: &str) {
    if !quiet() {
        println!("\n{}", title.bold().underline());
    }
}

pub fn success(msg: &str) {
    if !quiet() {
        println!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !quiet() {
        println!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Verbose-only output, suppressed unless -v is set.
pub fn debug(msg: &str) {
    if is_verbose() && !quiet() {
        println!("{} {}", "·".bright_black(), msg.bright_black());
    }
}

pub fn separator() {
    if !quiet() {
        println!("{}", "─".repeat(60).bright_black());
    }
}

pub fn keyval(key: &str, val: &str) {
    if !quiet() {
        println!("{}: {}", key.bold(), val);
    }
}

pub fn indent(msg: &str, level: usize) {
    if !quiet() {
        let spaces = " ".repeat(level * 2);
        println!("{}{}", spaces, msg);
    }
}

/// Engine-to-terminal adapter: routes the orchestrator's leveled messages
/// through this module's filtering and formatting.
pub struct UiSink;

impl crate::core::traits::MessageSink for UiSink {
    fn debug(&self, msg: &str) {
        debug(msg);
    }
    fn info(&self, msg: &str) {
        info(msg);
    }
    fn warning(&self, msg: &str) {
        warning(msg);
    }
}
