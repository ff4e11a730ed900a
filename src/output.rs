//! Output formatting for trip reports.
//!
//! Supports a human-readable text layout, JSON and debug pretty-printing.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::analyzers::report::TripReport;
use crate::analyzers::types::{CategoryCount, Stat};
use crate::record::{month_name, weekday_name};
use crate::selector::{City, Selector};

const RULE: &str = "----------------------------------------";
const NO_DATA: &str = "No trips match this selection.";

/// Writes a report using Rust's debug pretty-print format.
pub fn write_pretty<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    debug!(trip_count = report.trip_count, "Writing debug report");
    writeln!(out, "{:#?}", report)?;
    Ok(())
}

/// Writes a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes a report as the four titled text sections.
pub fn write_text<W: Write>(
    out: &mut W,
    city: City,
    selector: &Selector,
    report: &TripReport,
) -> Result<()> {
    writeln!(
        out,
        "City: {} | Month: {} | Day: {} | Trips: {}",
        city, selector.month, selector.day, report.trip_count
    )?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nThe Most Frequent Times of Travel\n")?;
    match &report.time {
        Stat::Value(t) => {
            let month = month_name(t.most_frequent_month).unwrap_or("unknown");
            writeln!(out, "Most Frequent Month: {month}")?;
            writeln!(out, "Most Frequent Day: {}", weekday_name(t.most_frequent_weekday))?;
            writeln!(out, "Most Frequent Start Hour: {}", t.most_frequent_hour)?;
        }
        Stat::NoData => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nThe Most Popular Stations and Trip\n")?;
    match &report.stations {
        Stat::Value(s) => {
            writeln!(out, "Most Popular Start Station: {}", s.most_frequent_start_station)?;
            writeln!(out, "Most Popular End Station: {}", s.most_frequent_end_station)?;
            writeln!(
                out,
                "Most Popular Trip: {} -> {} ({} trips)",
                s.most_frequent_route.start, s.most_frequent_route.end, s.most_frequent_route_count
            )?;
        }
        Stat::NoData => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nTrip Duration\n")?;
    let durations = &report.durations;
    writeln!(
        out,
        "Total Travel Time: {:.3} s ({})",
        durations.total_seconds,
        format_duration(durations.total_seconds)
    )?;
    match durations.mean_seconds {
        Stat::Value(mean) => writeln!(
            out,
            "Mean Travel Time: {mean:.3} s ({})",
            format_duration(mean)
        )?,
        Stat::NoData => writeln!(out, "Mean Travel Time: no data")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nUser Stats\n")?;
    let users = &report.users;
    write_counts(out, "User Types", &users.user_types)?;
    if let Some(genders) = &users.genders {
        write_counts(out, "Gender", genders)?;
    }
    match &users.birth_years {
        Some(Stat::Value(years)) => {
            writeln!(out, "Earliest Year of Birth: {}", years.earliest)?;
            writeln!(out, "Most Recent Year of Birth: {}", years.most_recent)?;
            writeln!(out, "Most Common Year of Birth: {}", years.most_common)?;
        }
        Some(Stat::NoData) => writeln!(out, "Year of Birth: no data")?,
        None => {}
    }
    writeln!(out, "{RULE}")?;

    Ok(())
}

fn write_counts<W: Write>(out: &mut W, title: &str, counts: &[CategoryCount]) -> Result<()> {
    writeln!(out, "{title}:")?;
    if counts.is_empty() {
        writeln!(out, "  no data")?;
    }
    for c in counts {
        writeln!(out, "  {}: {}", c.value, c.count)?;
    }
    Ok(())
}

/// Renders seconds as `1d 2h 3m 4s`, dropping leading zero units.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, rest) = (rest / 3_600, rest % 3_600);
    let (minutes, secs) = (rest / 60, rest % 60);

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{secs}s"));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Dataset, TripDuration, TripRecord};
    use crate::selector::{DayFilter, MonthFilter};
    use chrono::{NaiveDate, Weekday};

    fn sample_report() -> TripReport {
        let at = NaiveDate::from_ymd_opt(2017, 6, 7)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        let dataset = Dataset::new(
            vec![
                TripRecord::new(at, TripDuration::from_millis(600_000), "Canal St", "Clinton St", "Subscriber")
                    .with_gender("Male")
                    .with_birth_year(1984),
            ],
            true,
            true,
        );
        TripReport::build(&dataset)
    }

    fn render(city: City, selector: &Selector, report: &TripReport) -> String {
        let mut out = Vec::new();
        write_text(&mut out, city, selector, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_pretty_uses_field_names() {
        let mut out = Vec::new();
        write_pretty(&mut out, &sample_report()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("most_frequent_route_count"));
    }

    #[test]
    fn test_write_text_sections() {
        let selector = Selector::new(MonthFilter::Month(6), DayFilter::Day(Weekday::Wed));
        let text = render(City::Chicago, &selector, &sample_report());

        assert!(text.contains("City: chicago | Month: June | Day: Wednesday | Trips: 1"));
        assert!(text.contains("Most Frequent Month: June"));
        assert!(text.contains("Most Frequent Day: Wednesday"));
        assert!(text.contains("Most Frequent Start Hour: 17"));
        assert!(text.contains("Most Popular Trip: Canal St -> Clinton St (1 trips)"));
        assert!(text.contains("Total Travel Time: 600.000 s (10m 0s)"));
        assert!(text.contains("  Subscriber: 1"));
        assert!(text.contains("Gender:"));
        assert!(text.contains("Most Common Year of Birth: 1984"));
    }

    #[test]
    fn test_write_text_empty_report() {
        let report = TripReport::build(&Dataset::default());
        let text = render(City::Washington, &Selector::default(), &report);

        assert_eq!(text.matches(NO_DATA).count(), 2);
        assert!(text.contains("Mean Travel Time: no data"));
        assert!(!text.contains("Gender:"));
        assert!(!text.contains("Year of Birth"));
    }

    #[test]
    fn test_write_json_is_valid() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["trip_count"], 1);
        assert_eq!(value["time"]["most_frequent_weekday"], "Wednesday");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(59.4), "59s");
        assert_eq!(format_duration(61.0), "1m 1s");
        assert_eq!(format_duration(3_600.0), "1h 0m 0s");
        assert_eq!(format_duration(90_061.0), "1d 1h 1m 1s");
    }
}
