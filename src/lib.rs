pub mod models;
pub mod services;

pub use models::itinerary::{City, Day, Itinerary, LineItem};
pub use models::rates::{MarkupTable, Segment, TcsRateTable};
pub use models::totals::{SegmentAmounts, TcsBreakdown, TotalsResult};
pub use services::pricing_service::{round2, LinePrice, PricingService};
