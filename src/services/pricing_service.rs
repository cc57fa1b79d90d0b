use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::itinerary::{
    ActivityItem, FlightData, FlightItem, HotelItem, Itinerary, LineItem, PriceFields,
    TransferItem,
};
use crate::models::rates::{MarkupTable, Segment, TcsRateTable};
use crate::models::totals::{SegmentAmounts, TcsBreakdown, TotalsResult};

/// Round to 2 decimal places, half away from zero. Non-finite values
/// collapse to 0 so a bad parse never poisons a running total.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

// "Truthy" in the sense of the price probe chain: zero and non-finite
// values fall through to the next probe.
fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

impl PriceFields {
    /// Shared probe prefix of the extraction order: `price` (truthy), then
    /// `packageDetails.amount`, then `data.totalAmount`.
    fn explicit_price(&self) -> Option<f64> {
        truthy(self.price)
            .or_else(|| truthy(self.package_details.as_ref().and_then(|p| p.amount)))
            .or_else(|| truthy(self.data.as_ref().and_then(|d| d.total_amount)))
    }
}

/// Base (pre-markup, pre-tax) price of a single line item.
pub trait LinePrice {
    fn base_price(&self) -> f64;
}

impl LinePrice for FlightItem {
    fn base_price(&self) -> f64 {
        if let Some(value) = self.pricing.explicit_price() {
            return round2(value);
        }
        match &self.flight_data {
            Some(data) => flight_total(data),
            None => 0.0,
        }
    }
}

impl LinePrice for HotelItem {
    fn base_price(&self) -> f64 {
        round2(self.pricing.explicit_price().unwrap_or(0.0))
    }
}

impl LinePrice for ActivityItem {
    fn base_price(&self) -> f64 {
        round2(self.pricing.explicit_price().unwrap_or(0.0))
    }
}

impl LinePrice for TransferItem {
    fn base_price(&self) -> f64 {
        if let Some(value) = self.pricing.explicit_price() {
            return round2(value);
        }
        let fare = self
            .details
            .as_ref()
            .and_then(|d| d.selected_quote.as_ref())
            .and_then(|q| q.quote.as_ref())
            .and_then(|q| q.fare.as_ref())
            .map(|fare| fare.as_amount())
            .unwrap_or(0.0);
        round2(fare)
    }
}

impl LinePrice for LineItem {
    fn base_price(&self) -> f64 {
        match self {
            LineItem::Flight(item) => item.base_price(),
            LineItem::Hotel(item) => item.base_price(),
            LineItem::Activity(item) => item.base_price(),
            LineItem::Transfer(item) => item.base_price(),
        }
    }
}

// Flight fare plus selected add-ons. Each add-on sub-sum is rounded on its
// own before it joins the fare.
fn flight_total(data: &FlightData) -> f64 {
    let mut total = round2(data.price.unwrap_or(0.0));
    if data.is_seat_selected {
        let seats: f64 = data
            .selected_seats
            .iter()
            .flat_map(|segment| &segment.rows)
            .flat_map(|row| &row.seats)
            .map(|seat| seat.price.unwrap_or(0.0))
            .sum();
        total += round2(seats);
    }
    if data.is_baggage_selected {
        let baggage: f64 = data
            .selected_baggage
            .iter()
            .flat_map(|segment| &segment.options)
            .map(|option| option.price.unwrap_or(0.0))
            .sum();
        total += round2(baggage);
    }
    if data.is_meal_selected {
        let meals: f64 = data
            .selected_meal
            .iter()
            .flat_map(|segment| &segment.options)
            .map(|option| option.price.unwrap_or(0.0))
            .sum();
        total += round2(meals);
    }
    round2(total)
}

pub struct PricingService;

impl PricingService {
    /// Sum of line-item base prices, rounding the running total after each
    /// addition. Empty input sums to 0.
    pub fn sum_line_items<T: LinePrice>(items: &[T]) -> f64 {
        let mut total = 0.0;
        for item in items {
            total = round2(total + item.base_price());
        }
        total
    }

    /// Per-item markup variant: each item contributes its price plus its own
    /// rounded markup amount, so rounding never drifts with item count.
    pub fn sum_with_markup<T: LinePrice>(items: &[T], markup_percent: f64) -> f64 {
        let mut total = 0.0;
        for item in items {
            let price = item.base_price();
            let markup = round2(price * markup_percent / 100.0);
            total = round2(total + price + markup);
        }
        total
    }

    /// Whole-itinerary base totals use the same summation as
    /// [`Self::sum_line_items`].
    pub fn compute_base_total<T: LinePrice>(items: &[T]) -> f64 {
        Self::sum_line_items(items)
    }

    /// Two-tier progressive TCS: `default` up to `threshold`, `highValue`
    /// on the portion above it. An incomplete rate table yields zero tax
    /// rather than an error.
    pub fn compute_tiered_tax(base_amount: f64, rates: &TcsRateTable) -> TcsBreakdown {
        let Some((default_rate, high_value, threshold)) = rates.tiers() else {
            warn!("TCS rate table missing default/highValue/threshold, treating TCS as zero");
            return TcsBreakdown::default();
        };

        if base_amount <= threshold {
            return TcsBreakdown {
                amount: round2(base_amount * default_rate / 100.0),
                effective_rate_percent: round2(default_rate),
            };
        }

        let low_portion_tax = round2(threshold * default_rate / 100.0);
        let high_portion_amount = round2(base_amount - threshold);
        let high_portion_tax = round2(high_portion_amount * high_value / 100.0);
        let amount = round2(low_portion_tax + high_portion_tax);
        let effective_rate_percent = if base_amount > 0.0 {
            round2(amount / base_amount * 100.0)
        } else {
            0.0
        };

        TcsBreakdown {
            amount,
            effective_rate_percent,
        }
    }

    /// Full rollup for one itinerary: per-day base sums per segment, one
    /// segment-level markup pass, tiered TCS on the subtotal. Never panics;
    /// missing input degrades to the all-zero record.
    pub fn aggregate(
        itinerary: &Itinerary,
        markups: &MarkupTable,
        tcs_rates: &TcsRateTable,
    ) -> TotalsResult {
        if itinerary.cities.is_empty() {
            return TotalsResult::zero();
        }

        let mut segment_base_totals = SegmentAmounts::default();
        for city in &itinerary.cities {
            for day in &city.days {
                Self::add_day(&mut segment_base_totals, Segment::Flights, day.flight_items());
                Self::add_day(&mut segment_base_totals, Segment::Hotels, day.hotel_items());
                Self::add_day(
                    &mut segment_base_totals,
                    Segment::Activities,
                    day.activity_items(),
                );
                Self::add_day(
                    &mut segment_base_totals,
                    Segment::Transfers,
                    day.transfer_items(),
                );
            }
        }

        let base_total = round2(segment_base_totals.sum());

        // Markup is applied once per segment on the aggregate base total,
        // not re-derived per item.
        let mut segment_totals = SegmentAmounts::default();
        for segment in Segment::ALL {
            let base = segment_base_totals.get(segment);
            let markup = round2(base * markups.rate(segment) / 100.0);
            segment_totals.set(segment, round2(base + markup));
        }

        let subtotal = round2(segment_totals.sum());
        let tcs = Self::compute_tiered_tax(subtotal, tcs_rates);
        let grand_total = round2(subtotal + tcs.amount);

        debug!(
            "itinerary rollup: base {base_total}, subtotal {subtotal}, tcs {} ({}%), grand total {grand_total}",
            tcs.amount, tcs.effective_rate_percent
        );

        TotalsResult {
            segment_base_totals,
            segment_totals,
            base_total,
            subtotal,
            tcs_rate: tcs.effective_rate_percent,
            tcs_amount: tcs.amount,
            grand_total,
        }
    }

    /// JSON-facing entry point for callers holding raw API payloads. A
    /// missing or undecodable piece yields the all-zero record; tables that
    /// decode but leave keys unset still default per key.
    pub fn aggregate_json(itinerary: &Value, markups: &Value, tcs_rates: &Value) -> TotalsResult {
        let (Some(itinerary), Some(markups), Some(tcs_rates)) = (
            Self::decode::<Itinerary>(itinerary, "itinerary"),
            Self::decode::<MarkupTable>(markups, "markups"),
            Self::decode::<TcsRateTable>(tcs_rates, "tcsRates"),
        ) else {
            return TotalsResult::zero();
        };
        Self::aggregate(&itinerary, &markups, &tcs_rates)
    }

    fn decode<T: DeserializeOwned>(value: &Value, what: &str) -> Option<T> {
        if value.is_null() {
            warn!("missing {what} payload, returning zero totals");
            return None;
        }
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!("malformed {what} payload, returning zero totals: {err}");
                None
            }
        }
    }

    fn add_day<T: LinePrice>(totals: &mut SegmentAmounts, segment: Segment, items: &[T]) {
        if items.is_empty() {
            return;
        }
        let day_total = Self::compute_base_total(items);
        totals.set(segment, round2(totals.get(segment) + day_total));
    }
}
