use owo_colors::OwoColorize;
use std::env;
use std::sync::OnceLock;

/// Camera emoji prefix for all server output
const CAMERA: &str = "📷";

static PLAIN_OUTPUT: OnceLock<bool> = OnceLock::new();

fn plain_output() -> bool {
    *PLAIN_OUTPUT.get_or_init(|| {
        let value = env::var("IMAGE_GRID_PLAIN_OUTPUT")
            .unwrap_or_else(|_| "0".to_string())
            .to_lowercase();
        value == "1" || value == "true" || value == "yes"
    })
}

fn prefix() -> &'static str {
    if plain_output() {
        "*"
    } else {
        CAMERA
    }
}

/// Print a server status message (cyan)
pub fn status(message: &str) {
    println!("{} {}", prefix(), message.cyan());
}

/// Print an info message (default color)
pub fn info(message: &str) {
    println!("{} {}", prefix(), message);
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", prefix(), message.green());
}

/// Print a warning message (yellow)
pub fn warn(message: &str) {
    println!("{} {}", prefix(), message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", prefix(), message.red());
}

/// Print a search request line (magenta with arrow)
pub fn search_started(query: &str) {
    println!(
        "{} {} {}",
        prefix(),
        ">>".magenta().bold(),
        format!("search: {:?}", query).magenta()
    );
}

/// Print a startup banner
pub fn startup_banner(addr: &str) {
    println!();
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}  {} {}",
        prefix(),
        "IMAGE GRID".bright_cyan().bold(),
        format!("- http://{}", addr).bright_white()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!();
}

/// Print configuration info
pub fn config_item(key: &str, value: &str) {
    println!(
        "{} {} {}",
        prefix(),
        format!("{}:", key).bright_white(),
        value.bright_cyan()
    );
}
