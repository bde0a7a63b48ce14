use crate::cli::LogArgs;
use crate::entries::add_entry;
use crate::store::Store;
use crate::BloomError;
use chrono::NaiveDate;

pub fn handle_log(store: &Store, args: &LogArgs) -> Result<(), BloomError> {
    let today = chrono::Local::now().date_naive();
    let (start, end) = resolve_dates(args, today);

    let mut state = store.open()?;
    add_entry(store, &mut state, start, end, &args.symptoms)?;
    eprintln!("bloom: saved entry {start} -> {end}");
    Ok(())
}

/// Both dates default to today; `--end-today` pins the end regardless.
pub fn resolve_dates(args: &LogArgs, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = args.start.unwrap_or(today);
    let end = if args.end_today {
        today
    } else {
        args.end.unwrap_or(today)
    };
    (start, end)
}
