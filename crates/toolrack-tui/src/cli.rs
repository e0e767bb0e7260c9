//! CLI argument parsing for toolrack-tui.

use clap::Parser;

#[derive(Parser)]
#[command(name = "toolrack-tui")]
#[command(about = "Terminal browser for the toolrack catalog", version)]
pub struct Cli {
    /// Route to open at startup, e.g. "/", "/tools?search=pdf" or "/bmi-calculator"
    pub route: Option<String>,

    /// Enable debug logging (logs to toolrack-tui-<ts>.log in the temp dir)
    #[arg(short, long)]
    pub debug: bool,
}
