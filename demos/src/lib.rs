//! Embla Demo Suite
//!
//! Small runnable showcases of the gradient core:
//!
//! - **demo-gradient**: builds a layered ansatz, differentiates an energy
//!   objective with the parameter-shift rule, and prints the structure of
//!   the resulting derivative objectives.
//! - **demo-compile**: shows the decomposition passes that lower generator
//!   exponentials and controlled rotations to shift-compatible rotations.

pub mod ansatz;

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Initialize tracing from `RUST_LOG`, defaulting to warnings only.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
