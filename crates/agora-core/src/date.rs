//! Relative-time formatting.
//!
//! Produces strings such as "about 3 hours ago" or "há cerca de 3 horas".
//! Bucketing follows the usual distance-in-words rules: minutes are rounded,
//! hours and days are rounded from minutes, and anything beyond two months
//! is measured in calendar months.

use chrono::{DateTime, Datelike, Months, Utc};

use crate::{Locale, Timestamp};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Bucketed distance between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// Under 30 seconds.
    LessThanMinute,
    /// Whole minutes.
    Minutes(i64),
    /// Rounded hours.
    AboutHours(i64),
    /// Rounded days.
    Days(i64),
    /// One or two months, rounded.
    AboutMonths(i64),
    /// Rounded months, under a year.
    Months(i64),
    /// Within three months past a whole year.
    AboutYears(i64),
    /// Between three and nine months past a whole year.
    OverYears(i64),
    /// Nine months or more past a whole year, counted up.
    AlmostYears(i64),
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

fn month_index(date: DateTime<Utc>) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Whole calendar months from `earlier` to `later`.
fn months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let calendar = month_index(later) - month_index(earlier);
    if calendar < 1 {
        return 0;
    }

    let shifted = u32::try_from(calendar)
        .ok()
        .and_then(|m| later.checked_sub_months(Months::new(m)));
    match shifted {
        Some(shifted) if shifted < earlier => calendar - 1,
        _ => calendar,
    }
}

impl Distance {
    /// Distance between two instants, in either order.
    pub fn between(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let seconds = (later - earlier).num_seconds();
        let minutes = round_div(seconds, 60);

        if minutes == 0 {
            Self::LessThanMinute
        } else if minutes < 45 {
            Self::Minutes(minutes)
        } else if minutes < 90 {
            Self::AboutHours(1)
        } else if minutes < MINUTES_IN_DAY {
            Self::AboutHours(round_div(minutes, 60))
        } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            Self::Days(1)
        } else if minutes < MINUTES_IN_MONTH {
            Self::Days(round_div(minutes, MINUTES_IN_DAY))
        } else if minutes < MINUTES_IN_TWO_MONTHS {
            Self::AboutMonths(round_div(minutes, MINUTES_IN_MONTH))
        } else {
            let months = months_between(earlier, later);
            if months < 12 {
                Self::Months(round_div(minutes, MINUTES_IN_MONTH))
            } else {
                let years = months / 12;
                match months % 12 {
                    0..3 => Self::AboutYears(years),
                    3..9 => Self::OverYears(years),
                    _ => Self::AlmostYears(years + 1),
                }
            }
        }
    }

    /// Distance in words, without a suffix.
    pub fn words(self, locale: Locale) -> String {
        match locale {
            Locale::EnUs => self.words_en(),
            Locale::PtBr => self.words_pt(),
        }
    }

    fn words_en(self) -> String {
        let plural = |n: i64, one: &str, many: &str| {
            if n == 1 { one.to_owned() } else { format!("{n} {many}") }
        };
        match self {
            Self::LessThanMinute => "less than a minute".to_owned(),
            Self::Minutes(n) => plural(n, "1 minute", "minutes"),
            Self::AboutHours(n) => format!("about {}", plural(n, "1 hour", "hours")),
            Self::Days(n) => plural(n, "1 day", "days"),
            Self::AboutMonths(n) => format!("about {}", plural(n, "1 month", "months")),
            Self::Months(n) => plural(n, "1 month", "months"),
            Self::AboutYears(n) => format!("about {}", plural(n, "1 year", "years")),
            Self::OverYears(n) => format!("over {}", plural(n, "1 year", "years")),
            Self::AlmostYears(n) => format!("almost {}", plural(n, "1 year", "years")),
        }
    }

    fn words_pt(self) -> String {
        let plural = |n: i64, one: &str, many: &str| {
            if n == 1 { one.to_owned() } else { format!("{n} {many}") }
        };
        match self {
            Self::LessThanMinute => "menos de um minuto".to_owned(),
            Self::Minutes(n) => plural(n, "1 minuto", "minutos"),
            Self::AboutHours(n) => format!("cerca de {}", plural(n, "1 hora", "horas")),
            Self::Days(n) => plural(n, "1 dia", "dias"),
            Self::AboutMonths(n) => format!("cerca de {}", plural(n, "1 mês", "meses")),
            Self::Months(n) => plural(n, "1 mês", "meses"),
            Self::AboutYears(n) => format!("cerca de {}", plural(n, "1 ano", "anos")),
            Self::OverYears(n) => format!("mais de {}", plural(n, "1 ano", "anos")),
            Self::AlmostYears(n) => format!("quase {}", plural(n, "1 ano", "anos")),
        }
    }
}

/// Format `timestamp` relative to `now`, with a past/future suffix.
///
/// Returns an empty string for a zero or out-of-range timestamp.
pub fn format_relative(timestamp: Timestamp, now: DateTime<Utc>, locale: Locale) -> String {
    if timestamp == 0 {
        return String::new();
    }
    let Some(date) = DateTime::from_timestamp_millis(timestamp) else {
        return String::new();
    };

    let words = Distance::between(date, now).words(locale);
    let future = date > now;
    match (locale, future) {
        (Locale::EnUs, false) => format!("{words} ago"),
        (Locale::EnUs, true) => format!("in {words}"),
        (Locale::PtBr, false) => format!("há {words}"),
        (Locale::PtBr, true) => format!("em {words}"),
    }
}

/// Format `timestamp` relative to the current wall clock.
pub fn format_date_ago(timestamp: Timestamp, locale: Locale) -> String {
    format_relative(timestamp, Utc::now(), locale)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> Timestamp {
        (now() - duration).timestamp_millis()
    }

    #[test]
    fn zero_timestamp_is_empty() {
        assert_eq!(format_relative(0, now(), Locale::EnUs), "");
    }

    #[test]
    fn three_hours_ago() {
        let ts = ago(Duration::hours(3));

        assert_eq!(format_relative(ts, now(), Locale::EnUs), "about 3 hours ago");
        assert_eq!(format_relative(ts, now(), Locale::PtBr), "há cerca de 3 horas");
    }

    #[test]
    fn minute_buckets() {
        assert_eq!(Distance::between(now() - Duration::seconds(20), now()), Distance::LessThanMinute);
        assert_eq!(Distance::between(now() - Duration::seconds(40), now()), Distance::Minutes(1));
        assert_eq!(Distance::between(now() - Duration::minutes(44), now()), Distance::Minutes(44));
        assert_eq!(Distance::between(now() - Duration::minutes(45), now()), Distance::AboutHours(1));
    }

    #[test]
    fn day_and_month_buckets() {
        assert_eq!(Distance::between(now() - Duration::hours(30), now()), Distance::Days(1));
        assert_eq!(Distance::between(now() - Duration::days(5), now()), Distance::Days(5));
        assert_eq!(Distance::between(now() - Duration::days(35), now()), Distance::AboutMonths(1));
        assert_eq!(Distance::between(now() - Duration::days(95), now()), Distance::Months(3));
    }

    #[test]
    fn year_buckets() {
        let earlier = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Distance::between(earlier, now()), Distance::AboutYears(1));

        let earlier = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(Distance::between(earlier, now()), Distance::OverYears(1));

        let earlier = Utc.with_ymd_and_hms(2022, 8, 1, 12, 0, 0).unwrap();
        assert_eq!(Distance::between(earlier, now()), Distance::AlmostYears(2));
    }

    #[test]
    fn future_dates_use_prefix() {
        let ts = (now() + Duration::days(2)).timestamp_millis();

        assert_eq!(format_relative(ts, now(), Locale::EnUs), "in 2 days");
        assert_eq!(format_relative(ts, now(), Locale::PtBr), "em 2 dias");
    }

    #[test]
    fn singular_words() {
        assert_eq!(Distance::Minutes(1).words(Locale::EnUs), "1 minute");
        assert_eq!(Distance::AboutMonths(1).words(Locale::PtBr), "cerca de 1 mês");
        assert_eq!(Distance::LessThanMinute.words(Locale::PtBr), "menos de um minuto");
    }
}
