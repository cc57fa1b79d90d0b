use serde::{Deserialize, Serialize};

/// One of the four booking categories an itinerary day can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Activities,
    Hotels,
    Flights,
    Transfers,
}

impl Segment {
    pub const ALL: [Segment; 4] = [
        Segment::Activities,
        Segment::Hotels,
        Segment::Flights,
        Segment::Transfers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Activities => "activities",
            Segment::Hotels => "hotels",
            Segment::Flights => "flights",
            Segment::Transfers => "transfers",
        }
    }
}

/// Per-segment markup percentages, e.g. `12.5` meaning +12.5%.
/// Missing keys in the wire payload default to 0.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct MarkupTable {
    #[serde(default)]
    pub activities: f64,
    #[serde(default)]
    pub hotels: f64,
    #[serde(default)]
    pub flights: f64,
    #[serde(default)]
    pub transfers: f64,
}

impl MarkupTable {
    pub fn rate(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Activities => self.activities,
            Segment::Hotels => self.hotels,
            Segment::Flights => self.flights,
            Segment::Transfers => self.transfers,
        }
    }
}

/// Two-tier TCS schedule: `default` applies up to `threshold`, `highValue`
/// applies to the amount above it. All fields are optional on the wire; an
/// incomplete table means the effective TCS is zero.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcsRateTable {
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl TcsRateTable {
    /// The `(default, highValue, threshold)` triple, or `None` when any
    /// field is missing.
    pub fn tiers(&self) -> Option<(f64, f64, f64)> {
        Some((self.default_rate?, self.high_value?, self.threshold?))
    }
}
