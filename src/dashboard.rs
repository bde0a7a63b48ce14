use crate::advice::{advise_with_config, Advice};
use crate::cli::DashboardArgs;
use crate::config::BloomConfig;
use crate::predict::{latest, predict, CycleSource, Prediction};
use crate::store::Store;
use crate::BloomError;
use chrono::NaiveDate;

pub const EMPTY_STATE: &str = "No data yet. Log your first entry with `bloom log`.";

pub fn handle_dashboard(
    store: &Store,
    config: &BloomConfig,
    args: &DashboardArgs,
) -> Result<(), BloomError> {
    let state = store.open()?;

    let Some(prediction) = predict(&state) else {
        println!("{EMPTY_STATE}");
        return Ok(());
    };

    let advice = if args.no_tip {
        None
    } else {
        let symptoms = latest(&state.entries)
            .map(|(entry, _)| entry.symptoms.as_str())
            .unwrap_or_default();
        Some(advise_with_config(&config.advice, symptoms))
    };

    print!("{}", render_dashboard(&prediction, advice.as_ref()));
    Ok(())
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

pub fn render_dashboard(prediction: &Prediction, advice: Option<&Advice>) -> String {
    let basis = match prediction.source {
        CycleSource::Average => "average of logged cycles",
        CycleSource::Configured => "from settings",
    };

    let mut out = String::new();
    out.push_str("Your Wellness Dashboard\n\n");
    out.push_str(&format!(
        "Last Period:             {}\n",
        format_long_date(prediction.last_date)
    ));
    out.push_str(&format!(
        "Next Predicted Cycle:    {}\n",
        format_long_date(prediction.next_date)
    ));
    out.push_str(&format!(
        "Estimated Cycle Length:  {} days ({basis})\n",
        prediction.cycle_length
    ));

    if let Some(advice) = advice {
        out.push_str("\nAI Wellness Insight\n");
        out.push_str(advice.text());
        out.push('\n');
    }
    out
}
