//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Renamed**: Blue
//! - **Type changed**: Magenta
//! - **Untracked**: Cyan
//! - **Unmerged**: Red bold

use crate::core::change_kind::ChangeKind;
use colored::*;
use std::path::Path;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

fn paint(kind: ChangeKind, text: &str) -> ColoredString {
    match kind {
        ChangeKind::Modified => text.yellow(),
        ChangeKind::Added => text.green(),
        ChangeKind::Deleted => text.red(),
        ChangeKind::Renamed => text.blue(),
        ChangeKind::TypeChanged => text.magenta(),
        ChangeKind::Untracked => text.cyan(),
        ChangeKind::Unmerged => text.red().bold(),
    }
}

/// One changed-file line: aligned short code, description and path
pub fn format_change_line(kind: ChangeKind, path: &Path) -> String {
    let code = format!("{:<2}", kind.as_str());
    let description = format!("{:<16}", format!("({})", kind.description()));
    format!(
        "  {} {} {}",
        paint(kind, &code),
        description.bright_black(),
        paint(kind, &path.display().to_string())
    )
}
