use crate::cli::SettingsArgs;
use crate::entries::update_cycle_length;
use crate::store::Store;
use crate::BloomError;

pub fn handle_settings(store: &Store, args: &SettingsArgs) -> Result<(), BloomError> {
    let mut state = store.open()?;
    match args.cycle_length {
        Some(days) => {
            update_cycle_length(store, &mut state, days)?;
            eprintln!("bloom: cycle length set to {days} days");
        }
        None => println!("Cycle length: {} days", state.cycle_length),
    }
    Ok(())
}
