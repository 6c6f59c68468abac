//! Plain-text rendering of weather reports and recent searches.

use chrono::{Local, TimeZone};
use wxdash_core::{CurrentConditions, ForecastDay, WeatherReport};

pub fn print_report(report: &WeatherReport) {
    print_current(&report.current);
    if !report.forecast.is_empty() {
        println!();
        print_forecast(&report.forecast);
    }
}

fn print_current(current: &CurrentConditions) {
    println!("{}, {}  {}", current.name, current.country, current.description);
    println!(
        "  Temperature  {}°C (feels like {}°C)",
        current.temperature_c, current.feels_like_c
    );
    println!("  Humidity     {}%", current.humidity_pct);
    println!("  Wind         {} m/s", current.wind_speed_mps);
    println!("  Pressure     {} hPa", current.pressure_hpa);
    println!("  Visibility   {} km", current.visibility_km);
    println!(
        "  Sunrise      {}   Sunset  {}",
        local_hm(current.sunrise),
        local_hm(current.sunset)
    );
    if !current.icon.is_empty() {
        println!("  Icon         {}", current.icon_url());
    }
}

fn print_forecast(days: &[ForecastDay]) {
    println!("{}-day forecast:", days.len());
    for day in days {
        println!(
            "  {}  {:>3}°C .. {:>3}°C  {} (humidity {}%)",
            day.date,
            day.temperature.min_c,
            day.temperature.max_c,
            day.description,
            day.humidity_pct
        );
        if !day.icon.is_empty() {
            println!("              {}", day.icon_url());
        }
    }
}

pub fn print_recent(entries: &[String]) {
    if entries.is_empty() {
        println!("No recent searches.");
    } else {
        println!("Recent searches: {}", entries.join(", "));
    }
}

/// Unix seconds as local wall-clock `HH:MM`.
fn local_hm(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
