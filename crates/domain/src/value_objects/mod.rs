pub mod calculation_result;
pub mod percentage;
pub mod price;
pub mod price_range;

pub use calculation_result::CalculationResult;
pub use percentage::Percentage;
pub use price::Price;
pub use price_range::{InvertedPriceRange, PriceRange};
