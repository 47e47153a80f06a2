//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Kemono Archiver                                   ║
║     Post and media archiver for kemono/coomer         ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print run configuration summary.
pub fn print_config_summary(source: &str, platform: &str, output_dir: &str, error_file: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Source:     {}", source);
    println!("  Platform:   {}", platform);
    println!("  Directory:  {}", output_dir);
    println!("  Error file: {}", error_file);
    println!();
}
