//! demos/dashboard.rs
//!
//! Builds the full dashboard for one selection and opens every chart in the browser.
//!
//! To run this demo:
//! cargo run --example dashboard --features plotting -- 2012 working

use bikeshare::{BikeShare, DashboardCharts, DayType, Language, YearChoice};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let year = match args.next().as_deref() {
        Some("2012") => YearChoice::Y2012,
        _ => YearChoice::Y2011,
    };
    let day_type = match args.next().as_deref() {
        Some("holiday") => DayType::Holiday,
        Some("working") => DayType::WorkingDay,
        _ => DayType::All,
    };

    let client = BikeShare::new()?;
    let view = client
        .dashboard()
        .year(year)
        .day_type(day_type)
        .language(Language::Indonesian)
        .call()
        .await?;

    let labels = view.language.labels();
    println!("{}", labels.page_title);
    println!("{}", labels.subtitle);
    println!(
        "{} {} / {} {}",
        labels.year_selector,
        year.label(view.language),
        labels.day_type_selector,
        day_type.label(view.language)
    );
    println!("{} {}", labels.peak_hour_prefix, view.peak_hour_text());

    DashboardCharts::from_view(&view).show();
    Ok(())
}
