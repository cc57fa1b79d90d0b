use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Itinerary snapshot as returned by the trip-builder API. Read-only input
/// to the pricing engine; a missing `cities` key deserializes to empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Itinerary {
    #[serde(default)]
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct City {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub days: Vec<Day>,
}

/// A single itinerary day. Each segment collection exists under a canonical
/// key and a legacy alias key (`flights` vs `flightDetails` and so on);
/// older snapshots only carry the alias form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights: Option<Vec<FlightItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_details: Option<Vec<FlightItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<HotelItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_details: Option<Vec<HotelItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<ActivityItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_details: Option<Vec<ActivityItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers: Option<Vec<TransferItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_details: Option<Vec<TransferItem>>,
}

// Canonical-or-alias pick: the canonical collection wins when non-empty,
// otherwise whatever the legacy key holds.
fn pick<'a, T>(canonical: &'a Option<Vec<T>>, legacy: &'a Option<Vec<T>>) -> &'a [T] {
    match canonical {
        Some(items) if !items.is_empty() => items,
        _ => legacy.as_deref().unwrap_or(&[]),
    }
}

impl Day {
    pub fn flight_items(&self) -> &[FlightItem] {
        pick(&self.flights, &self.flight_details)
    }

    pub fn hotel_items(&self) -> &[HotelItem] {
        pick(&self.hotels, &self.hotel_details)
    }

    pub fn activity_items(&self) -> &[ActivityItem] {
        pick(&self.activities, &self.activity_details)
    }

    pub fn transfer_items(&self) -> &[TransferItem] {
        pick(&self.transfers, &self.transfer_details)
    }
}

/// Price probe fields shared by every line-item shape. Items coming out of
/// different booking flows may carry any mix of these; extraction order is
/// fixed (`price`, then `packageDetails.amount`, then `data.totalAmount`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_details: Option<PackageDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BookingData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackageDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub pricing: PriceFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_data: Option<FlightData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HotelItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub pricing: PriceFields,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ActivityItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub pricing: PriceFields,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransferItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub pricing: PriceFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<TransferDetails>,
}

/// Flight fare plus the add-on selections made in the seat/baggage/meal
/// steps of the booking flow. Selections only count toward the price when
/// the matching `is*Selected` flag is set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_seat_selected: bool,
    #[serde(default)]
    pub is_baggage_selected: bool,
    #[serde(default)]
    pub is_meal_selected: bool,
    #[serde(default)]
    pub selected_seats: Vec<SeatSegment>,
    #[serde(default)]
    pub selected_baggage: Vec<AddOnSegment>,
    #[serde(default)]
    pub selected_meal: Vec<AddOnSegment>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeatSegment {
    #[serde(default)]
    pub rows: Vec<SeatRow>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeatRow {
    #[serde(default)]
    pub seats: Vec<PricedOption>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AddOnSegment {
    #[serde(default)]
    pub options: Vec<PricedOption>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PricedOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_quote: Option<SelectedQuote>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectedQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Quote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
}

/// Transfer fares arrive either as a JSON number or as a decimal string,
/// depending on which supplier produced the quote.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Fare {
    Number(f64),
    Text(String),
}

impl Fare {
    /// The fare as a currency amount; unparseable strings count as 0.
    pub fn as_amount(&self) -> f64 {
        match self {
            Fare::Number(n) => *n,
            Fare::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// A line item from any of the four segment collections.
#[derive(Debug, Clone)]
pub enum LineItem {
    Flight(FlightItem),
    Hotel(HotelItem),
    Activity(ActivityItem),
    Transfer(TransferItem),
}
