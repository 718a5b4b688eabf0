//! Terminal styling utilities for the wizard output

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static BOOK: Emoji<'_, '_> = Emoji("📖 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
      ___  _____ ___    __        ___                  _
     / _ \|  ___/ __|   \ \      / (_)______ _ _ __ __| |
    | (_) | |_ | (__     \ \ /\ / /| |_  / _` | '__/ _` |
     \___/|_|   \___|     \_/  \_/ |_/__\__,_|_|  \__,_|
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Generate the init.yml for OpenFaaS Cloud").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("    {} {}", WARN, style(message).yellow());
}

/// Dimmed help line shown above a question
pub fn print_help(help: Option<&str>) {
    if let Some(help) = help {
        println!("    {}", style(help).dim().italic());
    }
}

/// Instructions shown when the user still has setup to do
pub fn print_guidance(text: &str) {
    println!();
    println!("    {}{}", BOOK, style(text).cyan());
    println!();
}

/// Print where the document was written
pub fn print_saved(path: &std::path::Path) {
    println!("    {}{}", SAVE, style(path.display()).bold());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Configuration complete! Run ofc-bootstrap with this init.yml").green().bold()
    );
    println!();
}
