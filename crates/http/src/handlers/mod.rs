pub mod locations;
pub mod preferences;
pub mod weather;
