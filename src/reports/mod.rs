use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::collections::BTreeMap;
use std::fmt::Display;
use yatrachain::routes::RouteSummary;
use yatrachain::stats::{format_count, hour_label, StatsSummary};
use yatrachain::trips::Trip;
use yatrachain::users::{UserHistory, UserProfile};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// `cost_bounds` is the per-trip cost span of the whole store, the slider limits.
pub fn print_summary(s: &StatsSummary, cost_bounds: Option<(f64, f64)>) {
    let mut table = new_table();

    let top_mode = s
        .top_mode()
        .map(|(m, share)| format!("{} ({}% share)", m, share))
        .unwrap_or_else(|| "N/A".to_string());
    let cost_span = cost_bounds
        .map(|(lo, hi)| format!("₹{:.0}-₹{:.0}", lo, hi))
        .unwrap_or_else(|| "N/A".to_string());

    table.add_row(vec![
        Cell::new("Total Trips").add_attribute(Attribute::Bold),
        Cell::new("Patterns"),
        Cell::new("Avg. Distance"),
        Cell::new("Avg. Cost"),
        Cell::new("Top Mode").fg(Color::Green),
        Cell::new("Peak Hour"),
        Cell::new("Cost Range"),
    ]);
    table.add_row(vec![
        Cell::new(format_count(s.total_trips)).add_attribute(Attribute::Bold),
        Cell::new(s.trip_patterns),
        Cell::new(format!("{} km", s.avg_distance_km)),
        Cell::new(format!("₹{}", s.avg_cost)),
        Cell::new(top_mode).fg(Color::Green),
        Cell::new(s.peak_hour_label().unwrap_or_else(|| "N/A".to_string())),
        Cell::new(cost_span),
    ]);

    println!("\n{}", table);
}

pub fn print_share_table<K: Display>(label: &str, shares: &BTreeMap<K, u32>) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(label).add_attribute(Attribute::Bold),
        Cell::new("Share %").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=1);

    for (k, pct) in shares {
        table.add_row(vec![Cell::new(k), Cell::new(pct).fg(Color::Cyan)]);
    }

    let sum: u32 = shares.values().sum();
    if !shares.is_empty() && sum != 100 {
        // Independent per-row rounding.
        table.add_row(vec![
            Cell::new("(sum)").add_attribute(Attribute::Italic),
            Cell::new(sum).add_attribute(Attribute::Italic),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_hourly(s: &StatsSummary) {
    if s.hourly_trips.is_empty() {
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Hour").add_attribute(Attribute::Bold),
        Cell::new("Trips"),
    ]);
    align_right(&mut table, 1..=1);

    for (&hour, &count) in &s.hourly_trips {
        let mut cell = Cell::new(count);
        if s.peak_hour == Some(hour) {
            cell = cell.fg(Color::Red).add_attribute(Attribute::Bold);
        }
        table.add_row(vec![Cell::new(hour_label(hour)), cell]);
    }

    println!("\n{}", table);
}

pub fn print_trip_table(trips: &[&Trip]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Route"),
        Cell::new("District"),
        Cell::new("Mode").fg(Color::Cyan),
        Cell::new("Purpose"),
        Cell::new("Dist (km)"),
        Cell::new("Dur (min)"),
        Cell::new("Cost (₹)"),
        Cell::new("Time"),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 5..=9);

    for t in trips {
        table.add_row(vec![
            Cell::new(&t.id).add_attribute(Attribute::Bold),
            Cell::new(t.route_label()),
            Cell::new(t.district),
            Cell::new(t.mode).fg(Color::Cyan),
            Cell::new(t.purpose),
            Cell::new(format!("{:.1}", t.distance)),
            Cell::new(t.duration),
            Cell::new(format!("{:.0}", t.cost)),
            Cell::new(t.timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(t.count).add_attribute(Attribute::Bold),
        ]);
    }

    println!("\n{}", table);
    println!("{} trip patterns", trips.len());
}

pub fn print_route_table(rows: &[RouteSummary]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Route"),
        Cell::new("Mode").fg(Color::Cyan),
        Cell::new("Purpose"),
        Cell::new("Trips"),
        Cell::new("Avg Dist"),
        Cell::new("Avg Dur"),
        Cell::new("Avg Cost"),
        Cell::new("Total Cost").fg(Color::Green),
        Cell::new("Peak"),
    ]);
    align_right(&mut table, 4..=8);

    for r in rows {
        table.add_row(vec![
            Cell::new(&r.id).add_attribute(Attribute::Bold),
            Cell::new(&r.route),
            Cell::new(r.mode).fg(Color::Cyan),
            Cell::new(r.purpose),
            Cell::new(r.trip_count),
            Cell::new(format!("{} km", r.avg_distance)),
            Cell::new(format!("{} min", r.avg_duration)),
            Cell::new(format!("₹{}", r.avg_cost)),
            Cell::new(format!("₹{}", r.total_cost)).fg(Color::Green),
            Cell::new(&r.peak_hour),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_user_directory(users: &[&UserProfile]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("User ID").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Total Trips"),
        Cell::new("Avg Distance"),
        Cell::new("Favorite Mode").fg(Color::Cyan),
        Cell::new("Last Active"),
    ]);
    align_right(&mut table, 2..=3);

    for u in users {
        table.add_row(vec![
            Cell::new(&u.id).add_attribute(Attribute::Bold),
            Cell::new(u.category),
            Cell::new(u.trip_count),
            Cell::new(format!("{} km", u.avg_distance)),
            Cell::new(u.favorite_mode).fg(Color::Cyan),
            Cell::new(u.last_active),
        ]);
    }

    println!("\nUser Directory ({} users)", users.len());
    println!("{}", table);
}

pub fn print_user_history(h: &UserHistory) {
    let mut header = new_table();
    header.add_row(vec![
        Cell::new("Total Trips").add_attribute(Attribute::Bold),
        Cell::new("Avg Duration"),
        Cell::new("Most Common Mode").fg(Color::Green),
    ]);
    header.add_row(vec![
        Cell::new(h.summary.total_trips).add_attribute(Attribute::Bold),
        Cell::new(format!("{} min", h.summary.avg_duration)),
        Cell::new(
            h.summary
                .most_common_mode
                .map(|m| m.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        )
        .fg(Color::Green),
    ]);
    println!("\nUser #{} ({}) - Trip History", h.user.id, h.user.category);
    println!("{}", header);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Trip ID").add_attribute(Attribute::Bold),
        Cell::new("Date"),
        Cell::new("Start"),
        Cell::new("End"),
        Cell::new("Duration"),
        Cell::new("Distance"),
        Cell::new("Mode").fg(Color::Cyan),
        Cell::new("Purpose"),
        Cell::new("Route"),
    ]);
    align_right(&mut table, 4..=5);

    for t in &h.trips {
        table.add_row(vec![
            Cell::new(&t.id).add_attribute(Attribute::Bold),
            Cell::new(t.start_time.format("%b %-d")),
            Cell::new(t.start_time.format("%I:%M %p")),
            Cell::new(t.end_time.format("%I:%M %p")),
            Cell::new(format!("{} min", t.duration)),
            Cell::new(format!("{} km", t.distance)),
            Cell::new(t.mode).fg(Color::Cyan),
            Cell::new(t.purpose),
            Cell::new(t.route_label()),
        ]);
    }

    println!("\nTrip History ({} trips)", h.trips.len());
    println!("{}", table);
}
