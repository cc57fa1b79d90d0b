use serde::{Deserialize, Serialize};

use super::rates::Segment;

/// One currency amount per segment. Serializes with the wire segment names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct SegmentAmounts {
    #[serde(default)]
    pub activities: f64,
    #[serde(default)]
    pub hotels: f64,
    #[serde(default)]
    pub flights: f64,
    #[serde(default)]
    pub transfers: f64,
}

impl SegmentAmounts {
    pub fn get(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Activities => self.activities,
            Segment::Hotels => self.hotels,
            Segment::Flights => self.flights,
            Segment::Transfers => self.transfers,
        }
    }

    pub fn set(&mut self, segment: Segment, amount: f64) {
        match segment {
            Segment::Activities => self.activities = amount,
            Segment::Hotels => self.hotels = amount,
            Segment::Flights => self.flights = amount,
            Segment::Transfers => self.transfers = amount,
        }
    }

    /// Raw sum of the four entries; callers round.
    pub fn sum(&self) -> f64 {
        self.activities + self.hotels + self.flights + self.transfers
    }
}

/// Full price rollup for one itinerary. Field names are part of the wire
/// contract with the price-summary UI and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResult {
    /// Per-segment sums of raw line-item prices, no markup.
    pub segment_base_totals: SegmentAmounts,
    /// Per-segment totals after the segment-level markup pass.
    pub segment_totals: SegmentAmounts,
    pub base_total: f64,
    /// Post-markup grand total before tax.
    pub subtotal: f64,
    /// Blended effective TCS percentage actually applied to `subtotal`.
    pub tcs_rate: f64,
    pub tcs_amount: f64,
    pub grand_total: f64,
}

impl TotalsResult {
    /// Well-shaped all-zero record, returned when top-level input is missing
    /// so the price-summary UI always has something to render.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Result of the tiered TCS computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TcsBreakdown {
    pub amount: f64,
    pub effective_rate_percent: f64,
}
