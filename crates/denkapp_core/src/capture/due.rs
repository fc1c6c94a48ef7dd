//! Due-date inference from relative date words.
//!
//! All deadlines land at 18:00 local time on the resolved calendar day.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

const TODAY_WORD: &str = "vandaag";
const TOMORROW_WORD: &str = "morgen";
const DEADLINE_HOUR: u32 = 18;

/// Weekday names indexed Sunday = 0 through Saturday = 6.
pub const WEEKDAYS: [&str; 7] = [
    "zondag",
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
];

/// Resolves a due timestamp relative to `now`.
///
/// Checks "vandaag", then "morgen", then weekday names in table order; the
/// first hit decides. A weekday always resolves to a future day, so naming
/// today's weekday rolls over to next week.
///
/// Returns `None` when no date word is present.
pub fn resolve_due(sentence: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let lower = sentence.to_lowercase();
    let today = now.date();

    if lower.contains(TODAY_WORD) {
        return at_deadline(today);
    }
    if lower.contains(TOMORROW_WORD) {
        return at_deadline(today.checked_add_days(Days::new(1))?);
    }

    let current = today.weekday().num_days_from_sunday();
    let target = WEEKDAYS.iter().position(|name| lower.contains(name))?;
    let delta = days_until(current, target as u32);
    at_deadline(today.checked_add_days(Days::new(u64::from(delta)))?)
}

/// Days from `current` to the next `target` weekday, in `1..=7`.
fn days_until(current: u32, target: u32) -> u32 {
    match (target + 7 - current) % 7 {
        0 => 7,
        delta => delta,
    }
}

fn at_deadline(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_milli_opt(DEADLINE_HOUR, 0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::{days_until, resolve_due};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // 2024-05-01 is a Wednesday.
    fn wednesday_morning() -> NaiveDateTime {
        at(2024, 5, 1, 9, 0)
    }

    #[test]
    fn today_resolves_to_six_pm_same_day() {
        let due = resolve_due("vandaag om 10", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 1, 18, 0)));
    }

    #[test]
    fn tomorrow_resolves_to_six_pm_next_day() {
        let due = resolve_due("morgen bellen", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 2, 18, 0)));
    }

    #[test]
    fn tomorrow_crosses_month_and_year_boundaries() {
        assert_eq!(
            resolve_due("Morgen", at(2024, 12, 31, 23, 59)),
            Some(at(2025, 1, 1, 18, 0))
        );
    }

    #[test]
    fn weekday_resolves_to_next_occurrence() {
        let due = resolve_due("bel zondag", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 5, 18, 0)));
        let due = resolve_due("Donderdag vergadering", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 2, 18, 0)));
    }

    #[test]
    fn same_weekday_rolls_over_a_full_week() {
        let due = resolve_due("woensdag overleg", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 8, 18, 0)));

        let sunday = at(2024, 5, 5, 8, 0);
        assert_eq!(resolve_due("bel zondag", sunday), Some(at(2024, 5, 12, 18, 0)));
    }

    #[test]
    fn earlier_rules_win() {
        let due = resolve_due("morgen of vrijdag", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 2, 18, 0)));
        let due = resolve_due("vandaag of morgen", wednesday_morning());
        assert_eq!(due, Some(at(2024, 5, 1, 18, 0)));
    }

    #[test]
    fn no_date_word_yields_none() {
        assert_eq!(resolve_due("bel Jan", wednesday_morning()), None);
    }

    #[test]
    fn days_until_stays_within_one_week() {
        for current in 0..7 {
            for target in 0..7 {
                let delta = days_until(current, target);
                assert!((1..=7).contains(&delta));
                assert_eq!((current + delta) % 7, target);
            }
        }
    }
}
