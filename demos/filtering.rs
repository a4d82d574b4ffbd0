//! Runs every year / day-type selection and prints a JSON summary of each.

use bikeshare::{BikeShare, BikeShareError, FilterSelection, Language, TrendScope};

#[tokio::main]
async fn main() -> Result<(), BikeShareError> {
    let client = BikeShare::new()?;

    for selection in FilterSelection::all() {
        let view = client
            .dashboard()
            .year(selection.year)
            .day_type(selection.day_type)
            .trend_scope(TrendScope::Selection)
            .language(Language::English)
            .call()
            .await?;

        println!("--- {} ---", selection);
        println!("{} days, {} rentals", view.filtered_days.height(), view.filtered_rentals);
        println!("{}", view.to_json()?);
    }
    Ok(())
}
