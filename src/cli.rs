use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bloom", version, about = "Cycle tracker with predictions and wellness tips")]
pub struct Cli {
    /// Data file path
    #[arg(long, env = "BLOOM_DATA", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show last period, next predicted cycle, and a wellness tip
    Dashboard(DashboardArgs),
    /// Log a new entry
    Log(LogArgs),
    /// List entries, most recent first
    History,
    /// Delete an entry by its position in `history`
    Delete(DeleteArgs),
    /// Show or change the default cycle length
    Settings(SettingsArgs),
    /// Get a wellness tip for symptoms (defaults to the latest entry's)
    Tip(TipArgs),
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Skip the AI wellness tip
    #[arg(long)]
    pub no_tip: bool,
}

#[derive(Parser)]
pub struct LogArgs {
    /// First day (YYYY-MM-DD, default today)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day (YYYY-MM-DD, default today)
    #[arg(long, conflicts_with = "end_today")]
    pub end: Option<NaiveDate>,

    /// Set the end date to today
    #[arg(long)]
    pub end_today: bool,

    /// Free-text symptoms
    #[arg(long, default_value = "")]
    pub symptoms: String,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Position as shown by `history` (1 = most recent)
    pub position: usize,
}

#[derive(Parser)]
pub struct SettingsArgs {
    /// New default cycle length in days (20-40)
    #[arg(long)]
    pub cycle_length: Option<u32>,
}

#[derive(Parser)]
pub struct TipArgs {
    /// Symptoms to ask about
    pub symptoms: Option<String>,
}
