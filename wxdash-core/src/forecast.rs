use serde::Deserialize;

use crate::model::{ForecastDay, TemperatureRange};

const MAX_FORECAST_DAYS: usize = 5;

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastResponse {
    pub list: Vec<OwForecastEntry>,
}

/// One 3-hourly entry of the forecast feed.
#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastEntry {
    /// `"YYYY-MM-DD HH:MM:SS"`, provider-local.
    pub dt_txt: String,
    pub main: OwForecastMain,
    pub weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwForecastMain {
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OwWeather {
    pub description: String,
    pub icon: String,
}

impl OwWeather {
    /// Description and icon of the leading weather entry, or a placeholder
    /// when the provider sends an empty array.
    pub(crate) fn describe(weather: &[OwWeather]) -> (String, String) {
        weather
            .first()
            .map(|w| (w.description.clone(), w.icon.clone()))
            .unwrap_or_else(|| ("Unknown".to_string(), String::new()))
    }
}

/// Collapse the chronologically ordered 3-hourly feed (typically 40 entries)
/// into at most five daily summaries, one per distinct calendar date.
///
/// Each day is seeded from the *first* entry seen for its date; later
/// same-day entries are skipped entirely, so the min/max is a sample, not a
/// true daily range. The date is the date portion of `dt_txt` as provided,
/// never recomputed from the unix timestamp, so grouping cannot drift with
/// the viewer's timezone. Output order equals input order.
pub(crate) fn daily_summaries(entries: &[OwForecastEntry]) -> Vec<ForecastDay> {
    let mut days: Vec<ForecastDay> = Vec::with_capacity(MAX_FORECAST_DAYS);

    for entry in entries {
        if days.len() == MAX_FORECAST_DAYS {
            break;
        }

        let date = match entry.dt_txt.split_once(' ') {
            Some((date, _)) => date,
            None => entry.dt_txt.as_str(),
        };

        if days.iter().any(|day| day.date == date) {
            continue;
        }

        let (description, icon) = OwWeather::describe(&entry.weather);

        days.push(ForecastDay {
            date: date.to_string(),
            temperature: TemperatureRange {
                min_c: entry.main.temp_min.round() as i32,
                max_c: entry.main.temp_max.round() as i32,
            },
            description,
            icon,
            humidity_pct: entry.main.humidity,
        });
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(dt_txt: &str, min: f64, max: f64, description: &str, humidity: u8) -> OwForecastEntry {
        OwForecastEntry {
            dt_txt: dt_txt.to_string(),
            main: OwForecastMain {
                temp_min: min,
                temp_max: max,
                humidity,
            },
            weather: vec![OwWeather {
                description: description.to_string(),
                icon: "10d".to_string(),
            }],
        }
    }

    /// Eight 3-hourly entries per day, six days.
    fn full_feed() -> Vec<OwForecastEntry> {
        let mut feed = Vec::new();
        for day in 1..=6 {
            for slot in 0..8 {
                feed.push(entry(
                    &format!("2024-05-{day:02} {:02}:00:00", slot * 3),
                    10.0 + slot as f64,
                    15.0 + slot as f64,
                    if slot == 0 { "light rain" } else { "clear sky" },
                    60 + slot,
                ));
            }
        }
        feed
    }

    #[test]
    fn reduces_long_feed_to_five_ascending_days() {
        let days = daily_summaries(&full_feed());

        assert_eq!(days.len(), 5);
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            ["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04", "2024-05-05"]
        );
    }

    #[test]
    fn each_day_is_the_first_entry_for_its_date() {
        let days = daily_summaries(&full_feed());

        for day in &days {
            // slot 0 values, not widened by the warmer later slots
            assert_eq!(day.temperature.min_c, 10);
            assert_eq!(day.temperature.max_c, 15);
            assert_eq!(day.description, "light rain");
            assert_eq!(day.humidity_pct, 60);
        }
    }

    #[test]
    fn short_feed_yields_one_day_per_distinct_date() {
        let feed = vec![
            entry("2024-05-01 09:00:00", 10.0, 15.0, "clear sky", 50),
            entry("2024-05-01 12:00:00", 12.0, 18.0, "clear sky", 55),
            entry("2024-05-02 09:00:00", 11.0, 16.0, "few clouds", 60),
        ];

        let days = daily_summaries(&feed);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2024-05-01");
        assert_eq!(days[1].date, "2024-05-02");
    }

    #[test]
    fn temperatures_round_to_nearest_integer() {
        let feed = vec![entry("2024-05-01 09:00:00", 10.6, 15.4, "clear sky", 50)];
        let days = daily_summaries(&feed);

        assert_eq!(days[0].temperature.min_c, 11);
        assert_eq!(days[0].temperature.max_c, 15);
    }

    #[test]
    fn missing_weather_entry_becomes_unknown() {
        let mut feed = vec![entry("2024-05-01 09:00:00", 10.0, 15.0, "clear sky", 50)];
        feed[0].weather.clear();

        let days = daily_summaries(&feed);

        assert_eq!(days[0].description, "Unknown");
        assert_eq!(days[0].icon, "");
    }

    #[test]
    fn empty_feed_yields_no_days() {
        assert!(daily_summaries(&[]).is_empty());
    }
}
