use serde_json::json;

use itinerary_pricing::{Itinerary, MarkupTable, PricingService, TcsRateTable, TotalsResult};

fn itinerary(value: serde_json::Value) -> Itinerary {
    serde_json::from_value(value).unwrap()
}

fn standard_rates() -> TcsRateTable {
    serde_json::from_value(json!({ "default": 5.0, "highValue": 10.0, "threshold": 100000.0 }))
        .unwrap()
}

#[test]
fn empty_inputs_yield_a_well_shaped_zero_result() {
    let totals = PricingService::aggregate_json(&json!({}), &json!({}), &json!({}));
    assert_eq!(totals, TotalsResult::zero());

    let rendered = serde_json::to_value(totals).unwrap();
    for key in [
        "segmentBaseTotals",
        "segmentTotals",
        "baseTotal",
        "subtotal",
        "tcsRate",
        "tcsAmount",
        "grandTotal",
    ] {
        assert!(rendered.get(key).is_some(), "missing key {key}");
    }
    for segment in ["activities", "hotels", "flights", "transfers"] {
        assert_eq!(rendered["segmentTotals"][segment], json!(0.0));
    }
}

#[test]
fn missing_itinerary_zeroes_tcs_even_with_valid_rates() {
    let totals = PricingService::aggregate_json(
        &json!(null),
        &json!({ "hotels": 10.0 }),
        &serde_json::to_value(standard_rates()).unwrap(),
    );
    assert_eq!(totals.tcs_rate, 0.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn missing_markups_zero_a_populated_itinerary() {
    let trip = json!({ "cities": [{ "days": [{ "hotels": [{ "price": 1000.0 }] }] }] });
    let totals = PricingService::aggregate_json(
        &trip,
        &json!(null),
        &serde_json::to_value(standard_rates()).unwrap(),
    );
    assert_eq!(totals, TotalsResult::zero());
}

#[test]
fn missing_tcs_rates_zero_a_populated_itinerary() {
    let trip = json!({ "cities": [{ "days": [{ "hotels": [{ "price": 1000.0 }] }] }] });
    let totals = PricingService::aggregate_json(&trip, &json!({ "hotels": 10.0 }), &json!(null));
    assert_eq!(totals, TotalsResult::zero());
}

#[test]
fn undecodable_markups_zero_a_populated_itinerary() {
    let trip = json!({ "cities": [{ "days": [{ "hotels": [{ "price": 1000.0 }] }] }] });
    let totals = PricingService::aggregate_json(
        &trip,
        &json!("ten percent"),
        &serde_json::to_value(standard_rates()).unwrap(),
    );
    assert_eq!(totals, TotalsResult::zero());
}

#[test]
fn partially_populated_tables_still_price_normally() {
    let trip = json!({ "cities": [{ "days": [{ "hotels": [{ "price": 1000.0 }] }] }] });
    let totals = PricingService::aggregate_json(
        &trip,
        &json!({}),
        &json!({ "default": 5.0, "highValue": 10.0, "threshold": 100000.0 }),
    );
    assert_eq!(totals.subtotal, 1000.0);
    assert_eq!(totals.tcs_amount, 50.0);
    assert_eq!(totals.grand_total, 1050.0);
}

#[test]
fn single_hotel_with_markup_and_flat_tier() {
    let trip = itinerary(json!({
        "cities": [{ "name": "Dubai", "days": [{ "hotels": [{ "price": 1000.0 }] }] }]
    }));
    let markups: MarkupTable = serde_json::from_value(json!({ "hotels": 10.0 })).unwrap();

    let totals = PricingService::aggregate(&trip, &markups, &standard_rates());

    assert_eq!(totals.segment_base_totals.hotels, 1000.0);
    assert_eq!(totals.segment_totals.hotels, 1100.0);
    assert_eq!(totals.base_total, 1000.0);
    assert_eq!(totals.subtotal, 1100.0);
    assert_eq!(totals.tcs_rate, 5.0);
    assert_eq!(totals.tcs_amount, 55.0);
    assert_eq!(totals.grand_total, 1155.0);
}

#[test]
fn subtotal_crossing_the_threshold_blends_the_rate() {
    let trip = itinerary(json!({
        "cities": [{ "days": [{ "hotels": [{ "price": 150000.0 }] }] }]
    }));

    let totals = PricingService::aggregate(&trip, &MarkupTable::default(), &standard_rates());

    assert_eq!(totals.subtotal, 150000.0);
    // 5% of the first 100000 plus 10% of the 50000 above it.
    assert_eq!(totals.tcs_amount, 10000.0);
    assert_eq!(totals.tcs_rate, 6.67);
    assert_eq!(totals.grand_total, 160000.0);
}

#[test]
fn legacy_detail_keys_contribute_like_canonical_ones() {
    let canonical = itinerary(json!({
        "cities": [{ "days": [{ "flights": [{ "price": 4200.0 }] }] }]
    }));
    let legacy = itinerary(json!({
        "cities": [{ "days": [{ "flightDetails": [{ "price": 4200.0 }] }] }]
    }));

    let markups = MarkupTable::default();
    let rates = standard_rates();
    assert_eq!(
        PricingService::aggregate(&canonical, &markups, &rates),
        PricingService::aggregate(&legacy, &markups, &rates)
    );
}

#[test]
fn canonical_collection_wins_when_both_keys_are_populated() {
    let trip = itinerary(json!({
        "cities": [{ "days": [{
            "flights": [{ "price": 100.0 }],
            "flightDetails": [{ "price": 999.0 }]
        }] }]
    }));
    let totals = PricingService::aggregate(&trip, &MarkupTable::default(), &standard_rates());
    assert_eq!(totals.segment_base_totals.flights, 100.0);
}

#[test]
fn empty_canonical_collection_falls_back_to_the_alias() {
    let trip = itinerary(json!({
        "cities": [{ "days": [{
            "flights": [],
            "flightDetails": [{ "price": 250.0 }]
        }] }]
    }));
    let totals = PricingService::aggregate(&trip, &MarkupTable::default(), &standard_rates());
    assert_eq!(totals.segment_base_totals.flights, 250.0);
}

#[test]
fn mixed_multi_city_itinerary_rolls_up_all_segments() {
    let trip = itinerary(json!({
        "cities": [
            {
                "name": "Delhi",
                "days": [{
                    "date": "2026-11-02",
                    "flights": [{
                        "flightData": {
                            "price": 20000.0,
                            "isBaggageSelected": true,
                            "selectedBaggage": [{ "options": [{ "price": 1500.0 }] }]
                        }
                    }],
                    "activities": [{ "packageDetails": { "amount": 2500.0 } }]
                }]
            },
            {
                "name": "Jaipur",
                "days": [{
                    "hotels": [{ "data": { "totalAmount": 8000.0 } }],
                    "transfers": [{
                        "details": { "selectedQuote": { "quote": { "fare": "750.25" } } }
                    }]
                }]
            }
        ]
    }));
    let markups: MarkupTable =
        serde_json::from_value(json!({ "flights": 5.0, "hotels": 10.0, "activities": 12.0 }))
            .unwrap();

    let totals = PricingService::aggregate(&trip, &markups, &standard_rates());

    assert_eq!(totals.segment_base_totals.flights, 21500.0);
    assert_eq!(totals.segment_base_totals.activities, 2500.0);
    assert_eq!(totals.segment_base_totals.hotels, 8000.0);
    assert_eq!(totals.segment_base_totals.transfers, 750.25);
    assert_eq!(totals.base_total, 32750.25);

    assert_eq!(totals.segment_totals.flights, 22575.0);
    assert_eq!(totals.segment_totals.hotels, 8800.0);
    assert_eq!(totals.segment_totals.activities, 2800.0);
    assert_eq!(totals.segment_totals.transfers, 750.25);
    assert_eq!(totals.subtotal, 34925.25);

    assert_eq!(totals.tcs_rate, 5.0);
    assert_eq!(totals.tcs_amount, 1746.26);
    assert_eq!(totals.grand_total, 36671.51);
}

#[test]
fn aggregation_is_deterministic_for_equal_inputs() {
    let trip = itinerary(json!({
        "cities": [{ "days": [{
            "hotels": [{ "price": 777.77 }],
            "activities": [{ "packageDetails": { "amount": 123.45 } }]
        }] }]
    }));
    let markups: MarkupTable = serde_json::from_value(json!({ "hotels": 7.5 })).unwrap();
    let rates = standard_rates();

    let first = PricingService::aggregate(&trip, &markups, &rates);
    let second = PricingService::aggregate(&trip, &markups, &rates);
    assert_eq!(first, second);
}
