//! Prints the hourly demand curve and the peak rental hour.
//!
//! Expects `day.csv` and `hour.csv` in `BIKESHARE_DATA_DIR` or the current directory.

use bikeshare::{BikeShare, BikeShareError, DayType, YearChoice};

#[tokio::main]
async fn main() -> Result<(), BikeShareError> {
    let client = BikeShare::new()?;

    let view = client
        .dashboard()
        .year(YearChoice::Y2011)
        .day_type(DayType::All)
        .call()
        .await?;

    for entry in view.hourly_totals.iter() {
        println!("{:>2}:00  {:>8}", entry.key, entry.total);
    }
    println!(
        "{} {}",
        view.language.labels().peak_hour_prefix,
        view.peak_hour_text()
    );
    Ok(())
}
