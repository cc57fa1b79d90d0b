pub mod itinerary;
pub mod rates;
pub mod totals;
