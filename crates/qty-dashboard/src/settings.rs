use clap::Parser;
use std::path::PathBuf;

/// QTY dashboard over a multi-sheet order workbook
#[derive(Parser, Debug, Clone)]
#[command(
    name = "qty-dashboard",
    about = "Summaries, rankings and time series over a multi-sheet order workbook",
    version
)]
pub struct Settings {
    /// Path to the order workbook
    #[arg(long, default_value = "db.xlsx")]
    pub workbook: PathBuf,

    /// View mode: all periods combined, or a single period
    #[arg(long, default_value = "combined", value_parser = ["combined", "period"])]
    pub view: String,

    /// Period (sheet name) shown in period view; defaults to the first sheet
    #[arg(long)]
    pub period: Option<String>,

    /// Customers to include, comma separated; defaults to every customer
    #[arg(long, value_delimiter = ',')]
    pub customers: Vec<String>,

    /// Number of items in the top-items ranking
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Also print the filtered record table
    #[arg(long)]
    pub records: bool,

    /// Logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}
