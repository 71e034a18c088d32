//! Immutable lookup tables: city cost-of-living multipliers and currency symbols.
//!
//! Every lookup degrades to a default instead of failing.

mod cities;
mod currencies;

pub use cities::{all_cities, city_groups, city_multiplier, find_city, DEFAULT_CITY_MULTIPLIER};
pub use currencies::{currencies, currency_symbol, find_currency, DEFAULT_CURRENCY_SYMBOL};
