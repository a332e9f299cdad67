pub mod birth_data;
pub mod chart;
pub mod zodiac;

pub use birth_data::*;
pub use chart::*;
