use crate::advice::advise_with_config;
use crate::cli::TipArgs;
use crate::config::BloomConfig;
use crate::predict::latest;
use crate::store::Store;
use crate::BloomError;

/// Tip for the given symptoms, or for the most recent entry's.
pub fn handle_tip(store: &Store, config: &BloomConfig, args: &TipArgs) -> Result<(), BloomError> {
    let symptoms = match &args.symptoms {
        Some(s) => s.clone(),
        None => {
            let state = store.open()?;
            latest(&state.entries)
                .map(|(entry, _)| entry.symptoms.clone())
                .unwrap_or_default()
        }
    };
    println!("{}", advise_with_config(&config.advice, &symptoms).text());
    Ok(())
}
