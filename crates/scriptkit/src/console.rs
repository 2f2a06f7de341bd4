//! Colored console reporting and process-exit helpers.
//!
//! Each function prints one line to stdout with a colored severity tag.
//! The exiting variants are thin CLI-facing adapters around the same
//! output; library code should return [`Error`](crate::Error) values
//! and leave the exiting to the top level of a script.

use console::Style;

/// Print an informational line with a blue `[INFO]` tag.
pub fn info(msg: &str) {
    println!("{} {}", Style::new().blue().apply_to("[INFO]"), msg);
}

/// Print a warning line with a yellow `[WARNING]` tag.
pub fn warning(msg: &str) {
    println!("{} {}", Style::new().yellow().apply_to("[WARNING]"), msg);
}

/// Print an informational line and exit with status 0.
pub fn normal(msg: &str) -> ! {
    info(msg);
    std::process::exit(0);
}

/// Report a user-initiated cancellation and exit with status 0.
///
/// With a message the line reads `[INFO] User abort: {msg}`, without
/// one it reads `[INFO] Cancelled by user.`.
pub fn user_abort(msg: Option<&str>) -> ! {
    match msg {
        Some(msg) => info(&format!("User abort: {}", msg)),
        None => info("Cancelled by user."),
    }
    std::process::exit(0);
}

/// Print a red `[ERROR]` line and exit with status 1.
pub fn error(msg: &str) -> ! {
    println!("{} {}", Style::new().red().apply_to("[ERROR]"), msg);
    std::process::exit(1);
}

/// Print a red `[FATAL]` line and exit with status 1.
pub fn fatal(msg: &str) -> ! {
    println!("{} {}", Style::new().red().apply_to("[FATAL]"), msg);
    std::process::exit(1);
}
