use chrono::{NaiveTime, Weekday};

use crate::locale::Locale;

/// Canonical day names used by the file formats, Monday-first to match
/// `Weekday::num_days_from_monday`.
const CANONICAL_DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One class-schedule entry: a weekday, a time of day, a subject and a
/// classroom. Equality is plain value equality over all four fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleItem {
    pub day: Weekday,
    pub time: NaiveTime,
    pub subject: String,
    pub classroom: String,
}

impl ScheduleItem {
    pub fn new(
        day: Weekday,
        time: NaiveTime,
        subject: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Self {
        Self {
            day,
            time,
            subject: subject.into(),
            classroom: classroom.into(),
        }
    }

    /// Render the item as a single display line, with the day name drawn
    /// from the given locale table.
    pub fn format_line(&self, locale: &Locale) -> String {
        format!(
            "{}: {} - {} ({})",
            locale.day_name(self.day),
            format_time(self.time),
            self.subject,
            self.classroom
        )
    }
}

/// Canonical text form of a day, e.g. `Monday`. This is what the file
/// formats store, independent of any display locale.
pub fn format_day(day: Weekday) -> &'static str {
    CANONICAL_DAY_NAMES[day.num_days_from_monday() as usize]
}

/// Parse a day name. Accepts full and three-letter English names in any
/// case, so everything written by `format_day` re-parses.
pub fn parse_day(input: &str) -> Option<Weekday> {
    input.trim().parse::<Weekday>().ok()
}

/// Canonical text form of a time of day, e.g. `08:00:00`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Parse a time of day. `HH:MM` is accepted alongside the canonical
/// `HH:MM:SS` for hand-edited files.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_text_form_round_trips() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(parse_day(format_day(day)), Some(day));
        }
    }

    #[test]
    fn time_parsing_accepts_short_form() {
        let expected = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        assert_eq!(parse_time("08:30"), Some(expected));
        assert_eq!(parse_time("08:30:00"), Some(expected));
        assert_eq!(parse_time("not a time"), None);
    }
}
