pub mod dataset;
pub mod frames;
pub mod language;
pub mod records;
pub mod selection;
pub mod weather_situation;
