//! Example walking the full engine pipeline:
//! 1. Parse a raw booking payload
//! 2. Normalize the records with the default field map
//! 3. Build the October 2025 month board
//! 4. Aggregate day buckets and print the six-week grid
//! 5. Assemble the room grid and window summary
//!
//! To run this example:
//! ```bash
//! cargo run --example month_board
//! ```

use pms_rust::api::{
    aggregate_day_buckets, assemble_room_grid, build_month_window, normalize_events,
    parse_records_str, summarize_window, FieldMap, RoomKey,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Month Board Walkthrough ===\n");

    // Step 1: a payload in the shape the reservation endpoint returns
    println!("1. Parsing raw payload...");
    let payload = r#"{
        "data": {
            "items": [
                {"id": "bk-1", "roomNo": "101", "guestName": "Alvarez",
                 "arrivalDate": "2025-10-01", "departureDate": "2025-10-04"},
                {"id": "bk-2", "roomNo": "102", "guestName": "Brandt",
                 "arrivalDate": "2025-10-03T15:00:00Z", "departureDate": "2025-10-06T11:00:00Z"},
                {"id": "bk-3", "roomNo": "101", "guestName": "Chen",
                 "arrivalDate": "2025-10-04", "departureDate": "2025-10-07"},
                {"id": "bk-4", "guestName": "Diallo",
                 "arrivalDate": "2025-09-29", "departureDate": "2025-10-02"},
                {"id": "bad", "roomNo": "103", "guestName": "Ghost",
                 "arrivalDate": "2025-10-09", "departureDate": "2025-10-05"}
            ]
        }
    }"#;
    let records = parse_records_str(payload)?;
    println!("   {} records found\n", records.len());

    // Step 2: normalize; the inverted record is dropped, not fatal
    println!("2. Normalizing records...");
    let outcome = normalize_events(&records, &FieldMap::default());
    println!(
        "   {} events kept, {} rejected\n",
        outcome.events.len(),
        outcome.rejections.total()
    );

    // Step 3: the fixed six-week board around October 2025
    println!("3. Building month window...");
    let window = build_month_window(chrono::NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
    println!(
        "   {} days, {} .. {}\n",
        window.len(),
        window.start_key,
        window.end_key_exclusive
    );

    // Step 4: day buckets, printed as arrivals/stays/departures per cell
    println!("4. Day buckets (arrivals/stays/departures):");
    let buckets = aggregate_day_buckets(&outcome.events, &window);
    for week in window.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|day| {
                let bucket = &buckets[&day.key];
                format!(
                    "{} {}/{}/{}",
                    &day.key.value()[5..],
                    bucket.arrival_count,
                    bucket.stay_count,
                    bucket.departure_count
                )
            })
            .collect();
        println!("   {}", row.join("  "));
    }
    println!();

    // Step 5: room grid and the header-card totals
    println!("5. Room grid and summary:");
    let known = vec![
        RoomKey::new("101"),
        RoomKey::new("102"),
        RoomKey::unassigned(),
    ];
    let grid = assemble_room_grid(&outcome.events, &window, &known);
    for room in grid.rooms() {
        let occupied = window
            .days
            .iter()
            .filter(|day| grid.cell(room, &day.key).is_some_and(|c| !c.is_empty()))
            .count();
        println!("   room {:<10} occupied on {} of {} days", room, occupied, window.len());
    }

    let summary = summarize_window(&outcome.events, &window, &known);
    println!(
        "   totals: {} arrivals, {} departures, {} stay-nights, occupancy {:.1}%",
        summary.total_arrivals,
        summary.total_departures,
        summary.total_stay_nights,
        summary.occupancy_rate * 100.0
    );

    Ok(())
}
