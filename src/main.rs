use bloom::cli::{Cli, Command};
use bloom::config::{load_config, resolve_data_path};
use bloom::store::Store;
use bloom::{dashboard, history, log_entry, settings, tip, BloomError};
use clap::Parser;
use std::process::ExitCode;

fn run() -> Result<(), BloomError> {
    let cli = Cli::parse();
    let config = load_config()?;
    let store = Store::new(resolve_data_path(cli.data, &config));

    match cli.command {
        Command::Dashboard(args) => dashboard::handle_dashboard(&store, &config, &args),
        Command::Log(args) => log_entry::handle_log(&store, &args),
        Command::History => history::handle_history(&store),
        Command::Delete(args) => history::handle_delete(&store, args.position),
        Command::Settings(args) => settings::handle_settings(&store, &args),
        Command::Tip(args) => tip::handle_tip(&store, &config, &args),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BLOOM_LOG", "warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bloom: {e}");
            ExitCode::from(1)
        }
    }
}
