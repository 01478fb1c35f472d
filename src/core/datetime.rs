//! Fuzzy date resolution.
//!
//! Finds date and time phrases inside free text ("call mom friday at 3pm")
//! and resolves them against a reference instant. Components that a phrase
//! does not mention are taken from the reference, so "3pm" means today at
//! 3pm and "dec 15" means Dec 15 of the reference year at the reference
//! time of day.
//!
//! A `when` taken from a title that lands strictly earlier than the
//! reference is pushed forward by one week: on a Wednesday, "monday" means
//! the coming Monday. Explicit dates resolved with
//! [`DateResolver::resolve_iso`] are kept as written.

use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday,
};

/// ISO 8601 layout used for every timestamp tparse emits.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Longest run of words tried as a single date phrase.
const MAX_PHRASE_WORDS: usize = 3;

/// Format a timestamp the way Things expects it.
#[must_use]
pub fn format_iso(datetime: NaiveDateTime) -> String {
    datetime.format(ISO_FORMAT).to_string()
}

/// Parse an explicit reference instant, e.g. from `--now`.
///
/// Accepts ISO dates, ISO date-times and RFC 3339.
#[must_use]
pub fn parse_reference(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    parse_iso_datetime(input).or_else(|| {
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

/// Date and time components recognized in one phrase.
///
/// Either component may be missing; missing parts come from the reference
/// instant when the result is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateParseResult {
    /// The calendar date, if the phrase named one.
    pub date: Option<NaiveDate>,
    /// The time of day, if the phrase named one.
    pub time: Option<NaiveTime>,
}

impl DateParseResult {
    /// A result carrying only a date.
    #[must_use]
    pub const fn date_only(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            time: None,
        }
    }

    /// A result carrying a date and a time.
    #[must_use]
    pub const fn with_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
        }
    }

    /// A result carrying only a time of day.
    #[must_use]
    pub const fn time_only(time: NaiveTime) -> Self {
        Self {
            date: None,
            time: Some(time),
        }
    }

    /// Combine with a phrase found later in the same text.
    ///
    /// The later phrase wins for every component it sets.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            date: later.date.or(self.date),
            time: later.time.or(self.time),
        }
    }

    /// Fill the missing components from `reference`.
    #[must_use]
    pub fn resolve(&self, reference: NaiveDateTime) -> NaiveDateTime {
        NaiveDateTime::new(
            self.date.unwrap_or_else(|| reference.date()),
            self.time.unwrap_or_else(|| reference.time()),
        )
    }
}

/// Outcome of splitting a line into a title and a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleDate {
    /// The text with every date phrase removed.
    pub title: String,
    /// The resolved date, if one was found.
    pub when: Option<NaiveDateTime>,
}

/// Resolves date phrases against a fixed reference instant.
#[derive(Debug, Clone, Copy)]
pub struct DateResolver {
    reference: NaiveDateTime,
    roll_past_dates: bool,
}

impl DateResolver {
    /// A resolver anchored at `reference`, truncated to whole seconds.
    #[must_use]
    pub fn new(reference: NaiveDateTime) -> Self {
        Self {
            reference: reference.with_nanosecond(0).unwrap_or(reference),
            roll_past_dates: true,
        }
    }

    /// A resolver anchored at the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// Enable or disable pushing past dates one week forward.
    #[must_use]
    pub const fn with_roll_past_dates(mut self, enabled: bool) -> Self {
        self.roll_past_dates = enabled;
        self
    }

    /// The instant phrases are resolved against.
    #[must_use]
    pub const fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Resolve the date phrase inside `text`, pushing past results forward.
    ///
    /// Returns `None` when `text` holds no recognizable date.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<NaiveDateTime> {
        self.resolve_naive(text).and_then(|dt| self.push_to_future(dt))
    }

    /// [`DateResolver::resolve_naive`] formatted as ISO 8601.
    ///
    /// Explicit dates such as deadlines are kept as written, even when past.
    #[must_use]
    pub fn resolve_iso(&self, text: &str) -> Option<String> {
        self.resolve_naive(text).map(format_iso)
    }

    /// Resolve without the push-to-future rule.
    #[must_use]
    pub fn resolve_naive(&self, text: &str) -> Option<NaiveDateTime> {
        scan(text, self.reference.date()).map(|(found, _)| found.resolve(self.reference))
    }

    /// Separate the date phrases in `text` from the rest of the words.
    ///
    /// Without a recognizable date the whole text becomes the title.
    #[must_use]
    pub fn split_title_date(&self, text: &str) -> TitleDate {
        match scan(text, self.reference.date()) {
            Some((found, title)) => TitleDate {
                title,
                when: self.push_to_future(found.resolve(self.reference)),
            },
            None => TitleDate {
                title: text.trim().to_string(),
                when: None,
            },
        }
    }

    /// `None` only when the rolled date leaves chrono's range.
    fn push_to_future(&self, datetime: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.roll_past_dates && datetime < self.reference {
            datetime.checked_add_signed(Duration::days(7))
        } else {
            Some(datetime)
        }
    }
}

/// Scan `text` for date phrases.
///
/// Tries the longest run of words first at every position. Returns the
/// merged date components and the leftover words joined as a title, or
/// `None` when nothing matched.
fn scan(text: &str, today: NaiveDate) -> Option<(DateParseResult, String)> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut title_words = Vec::new();
    let mut found: Option<DateParseResult> = None;
    let mut i = 0;

    'words: while i < words.len() {
        let longest = MAX_PHRASE_WORDS.min(words.len() - i);
        for len in (1..=longest).rev() {
            let phrase = words[i..i + len]
                .iter()
                .map(|w| clean_word(w))
                .collect::<Vec<_>>()
                .join(" ");
            if let Some(parsed) = parse_phrase(&phrase, today) {
                found = Some(found.map_or(parsed, |prev| prev.merge(parsed)));
                i += len;
                continue 'words;
            }
        }
        title_words.push(words[i]);
        i += 1;
    }

    found.map(|f| (f, title_words.join(" ")))
}

/// Strip punctuation that commonly trails or wraps a date word.
fn clean_word(word: &str) -> &str {
    word.trim_matches(|c| matches!(c, ',' | ';' | '!' | '?' | '(' | ')' | '"'))
        .trim_end_matches('.')
}

/// Parse one candidate phrase.
fn parse_phrase(phrase: &str, today: NaiveDate) -> Option<DateParseResult> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return None;
    }

    // Connectives such as "on friday" or "at 3pm" belong to the date.
    let lower = phrase.to_lowercase();
    let (phrase, has_connective) = ["on ", "at ", "by ", "@ "]
        .iter()
        .find(|p| lower.starts_with(*p))
        .map_or((phrase, false), |p| (phrase[p.len()..].trim(), true));

    // ISO forms are case-sensitive ('T'), so check before lowercasing.
    if let Some(datetime) = parse_iso_datetime(phrase) {
        return Some(DateParseResult::with_time(datetime.date(), datetime.time()));
    }

    let input = phrase
        .to_lowercase()
        .replace(" at ", " ")
        .replace(" @ ", " ");
    let (date_part, time) = extract_time(&input);

    if date_part.is_empty() {
        // Words like "morning" are only times when clearly meant as one.
        let time = time?;
        let numeric = input.chars().any(|c| c.is_ascii_digit());
        return (numeric || has_connective).then(|| DateParseResult::time_only(time));
    }

    let result = parse_date_internal(&date_part, today)?;
    Some(DateParseResult {
        date: result.date,
        time: time.or(result.time),
    })
}

/// Parse ISO 8601 / RFC 3339 date-times.
fn parse_iso_datetime(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Internal date parsing logic.
fn parse_date_internal(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let input = input.trim();

    // Relative dates
    match input {
        "today" => return Some(DateParseResult::date_only(today)),
        "tonight" => {
            return NaiveTime::from_hms_opt(21, 0, 0).map(|t| DateParseResult::with_time(today, t))
        },
        "tomorrow" => return today.succ_opt().map(DateParseResult::date_only),
        "yesterday" => return today.pred_opt().map(DateParseResult::date_only),
        _ => {},
    }

    // "in X days/weeks/months"
    if let Some(result) = parse_relative_offset(input, today) {
        return Some(result);
    }

    // Day of week ("monday", "next tuesday")
    if let Some(result) = parse_weekday(input, today) {
        return Some(result);
    }

    // "next week" (next Monday)
    if input == "next week" {
        return start_of_week(today)
            .and_then(|monday| monday.checked_add_signed(Duration::days(7)))
            .map(DateParseResult::date_only);
    }

    // Month and day ("dec 15", "15 december", "dec 15 2026")
    if let Some(result) = parse_month_day(input, today) {
        return Some(result);
    }

    // ISO format (2024-12-15); shorter dash dates are month first
    if input.split('-').next().is_some_and(|year| year.len() == 4) {
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Some(DateParseResult::date_only(date));
        }
    }

    // US format (12/15/2024, 12/15 or 5-3-17)
    parse_us_date(input, today)
}

/// Monday of the week containing `day`.
fn start_of_week(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_sub_signed(Duration::days(i64::from(day.weekday().num_days_from_monday())))
}

/// Parse "in X days/weeks/months" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() == 3 && parts[0] == "in" {
        let amount: i64 = parts[1].parse().ok()?;
        let unit = parts[2].trim_end_matches('s'); // Handle "days" and "day"

        let days = match unit {
            "day" => Some(amount),
            "week" => amount.checked_mul(7),
            "month" => amount.checked_mul(30), // Approximate
            _ => return None,
        }?;

        return Duration::try_days(days)
            .and_then(|offset| today.checked_add_signed(offset))
            .map(DateParseResult::date_only);
    }

    None
}

/// Parse weekday names.
///
/// A bare weekday is that day of the current Monday-based week, which may
/// already be in the past; "next" moves it one week on.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target = weekday_from_name(day_str)?;
    let weeks_ahead = if is_next { 7 } else { 0 };
    let offset = Duration::days(i64::from(target.num_days_from_monday()) + weeks_ahead);
    start_of_week(today)
        .and_then(|monday| monday.checked_add_signed(offset))
        .map(DateParseResult::date_only)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse month and day patterns in either order, with an optional year.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let (month, day, year) = match parts.as_slice() {
        [a, b] => {
            let (month, day) = month_and_day(a, b)?;
            (month, day, today.year())
        },
        [a, b, y] => {
            let (month, day) = month_and_day(a, b)?;
            (month, day, y.parse().ok()?)
        },
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day).map(DateParseResult::date_only)
}

fn month_and_day(a: &str, b: &str) -> Option<(u32, u32)> {
    parse_month_name(a)
        .zip(parse_day(b))
        .or_else(|| parse_month_name(b).zip(parse_day(a)))
}

/// Parse a day of month, allowing ordinal suffixes ("15th").
fn parse_day(input: &str) -> Option<u32> {
    let digits = input.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &input[digits.len()..];
    if !matches!(suffix, "" | "st" | "nd" | "rd" | "th") {
        return None;
    }
    digits.parse().ok().filter(|d| (1..=31).contains(d))
}

/// Parse month name to number.
fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse US date format (MM/DD, MM/DD/YYYY or MM-DD-YY).
fn parse_us_date(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let separator = if input.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = input.split(separator).collect();

    match parts.len() {
        // "5-3" reads as a range, not a date
        2 if separator == '/' => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;

            NaiveDate::from_ymd_opt(today.year(), month, day).map(DateParseResult::date_only)
        },
        3 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;
            let year: i32 = parts[2].parse().ok()?;

            // Handle 2-digit years
            let year = if year < 100 { 2000 + year } else { year };

            NaiveDate::from_ymd_opt(year, month, day).map(DateParseResult::date_only)
        },
        _ => None,
    }
}

/// Extract time from the end of a string.
///
/// Returns the remaining string and the parsed time.
fn extract_time(input: &str) -> (String, Option<NaiveTime>) {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some((last, rest)) = parts.split_last() else {
        return (String::new(), None);
    };

    match parse_time(last) {
        Some(time) => (rest.join(" "), Some(time)),
        None => (parts.join(" "), None),
    }
}

/// Parse a time string.
fn parse_time(input: &str) -> Option<NaiveTime> {
    // Special times
    match input {
        "morning" => return NaiveTime::from_hms_opt(9, 0, 0),
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "afternoon" => return NaiveTime::from_hms_opt(14, 0, 0),
        "evening" => return NaiveTime::from_hms_opt(18, 0, 0),
        "night" => return NaiveTime::from_hms_opt(21, 0, 0),
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        _ => {},
    }

    // 24-hour format (15:00, 15:30)
    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return Some(time);
    }

    // 12-hour format (3pm, 3:30pm)
    let (time_str, is_pm) = if let Some(t) = input.strip_suffix("pm") {
        (t, true)
    } else if let Some(t) = input.strip_suffix("am") {
        (t, false)
    } else {
        return None;
    };

    let (hour, minute) = match time_str.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None => (time_str.parse::<u32>().ok()?, 0),
    };
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wednesday, 21 October 2026, 10:00.
    fn wednesday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 21)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn resolver() -> DateResolver {
        DateResolver::new(wednesday())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_is_truncated_to_seconds() {
        let precise = wednesday().with_nanosecond(123_456_789).unwrap();
        assert_eq!(DateResolver::new(precise).reference(), wednesday());
    }

    #[test]
    fn test_past_weekday_rolls_forward_one_week() {
        let r = resolver();
        let naive = r.resolve_naive("Monday").unwrap();
        assert_eq!(naive.date(), day(2026, 10, 19));

        let resolved = r.resolve("Monday").unwrap();
        assert_eq!(resolved - naive, Duration::days(7));
        assert_eq!(resolved.date(), day(2026, 10, 26));
    }

    #[test]
    fn test_future_weekday_is_kept() {
        let resolved = resolver().resolve("friday").unwrap();
        assert_eq!(resolved.date(), day(2026, 10, 23));
        assert_eq!(resolved.time(), wednesday().time());
    }

    #[test]
    fn test_same_weekday_is_today() {
        let resolved = resolver().resolve("wednesday").unwrap();
        assert_eq!(resolved, wednesday());
    }

    #[test]
    fn test_roll_forward_can_be_disabled() {
        let r = resolver().with_roll_past_dates(false);
        assert_eq!(r.resolve("monday").unwrap().date(), day(2026, 10, 19));
    }

    #[test]
    fn test_next_weekday() {
        let resolved = resolver().resolve("next friday").unwrap();
        assert_eq!(resolved.date(), day(2026, 10, 30));
    }

    #[test]
    fn test_iso_datetime_is_unchanged() {
        let resolved = resolver().resolve_iso("2026-12-01T09:30:00").unwrap();
        assert_eq!(resolved, "2026-12-01T09:30:00");
    }

    #[test]
    fn test_iso_date_keeps_its_day() {
        let resolved = resolver().resolve("2026-12-01").unwrap();
        assert_eq!(resolved.date(), day(2026, 12, 1));
    }

    #[test]
    fn test_resolve_iso_keeps_past_dates() {
        let r = resolver();
        assert_eq!(r.resolve_iso("2026-01-05").unwrap(), "2026-01-05T10:00:00");
        assert_eq!(r.resolve_iso("monday").unwrap(), "2026-10-19T10:00:00");
    }

    #[test]
    fn test_dash_date_with_short_year_is_month_first() {
        let r = resolver();
        assert_eq!(r.resolve_naive("5-3-17").unwrap().date(), day(2017, 5, 3));
        assert_eq!(r.resolve_naive("12-24-2027").unwrap().date(), day(2027, 12, 24));
        assert_eq!(r.resolve_naive("2027-1-5").unwrap().date(), day(2027, 1, 5));
        assert_eq!(r.resolve_naive("5-3"), None);
    }

    #[test]
    fn test_offsets_past_the_calendar_are_rejected() {
        let r = resolver();
        assert_eq!(r.resolve("in 99999999 days"), None);
        assert_eq!(r.resolve("in 9000000000000000000 months"), None);
        assert_eq!(r.resolve("in 2000000000000 weeks"), None);
    }

    #[test]
    fn test_roll_forward_at_calendar_end_is_rejected() {
        let last = NaiveDate::MAX.and_hms_opt(23, 0, 0).unwrap();
        let r = DateResolver::new(last);
        assert_eq!(r.resolve("9am"), None);
        assert!(r.split_title_date("Close books 9am").when.is_none());
    }

    #[test]
    fn test_rfc3339() {
        let resolved = resolver().resolve("2026-11-02T08:15:00+02:00").unwrap();
        assert_eq!(format_iso(resolved), "2026-11-02T08:15:00");
    }

    #[test]
    fn test_relative_words() {
        let r = resolver();
        assert_eq!(r.resolve("today").unwrap(), wednesday());
        assert_eq!(r.resolve("tomorrow").unwrap().date(), day(2026, 10, 22));
        assert_eq!(r.resolve("in 2 weeks").unwrap().date(), day(2026, 11, 4));
        assert_eq!(r.resolve("next week").unwrap().date(), day(2026, 10, 26));
    }

    #[test]
    fn test_month_day_forms() {
        let r = resolver();
        assert_eq!(r.resolve("dec 15").unwrap().date(), day(2026, 12, 15));
        assert_eq!(r.resolve("15th december").unwrap().date(), day(2026, 12, 15));
        assert_eq!(r.resolve("jan 3 2027").unwrap().date(), day(2027, 1, 3));
        assert_eq!(r.resolve("12/24").unwrap().date(), day(2026, 12, 24));
    }

    #[test]
    fn test_past_month_day_advances_seven_days() {
        let resolved = resolver().resolve("oct 1").unwrap();
        assert_eq!(resolved.date(), day(2026, 10, 8));
    }

    #[test]
    fn test_time_only_uses_reference_date() {
        let resolved = resolver().resolve("3pm").unwrap();
        assert_eq!(resolved.date(), day(2026, 10, 21));
        assert_eq!(resolved.time(), NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    }

    #[test]
    fn test_earlier_time_today_rolls_forward() {
        let resolved = resolver().resolve("9am").unwrap();
        assert_eq!(resolved.date(), day(2026, 10, 28));
    }

    #[test]
    fn test_unrecognized_text() {
        assert_eq!(resolver().resolve("buy milk"), None);
        assert_eq!(resolver().resolve(""), None);
    }

    #[test]
    fn test_split_title_date() {
        let split = resolver().split_title_date("Call mom friday at 3pm");
        assert_eq!(split.title, "Call mom");
        let when = split.when.unwrap();
        assert_eq!(when.date(), day(2026, 10, 23));
        assert_eq!(when.time(), NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    }

    #[test]
    fn test_split_title_date_with_connective() {
        let split = resolver().split_title_date("Dentist on dec 3, bring forms");
        assert_eq!(split.title, "Dentist bring forms");
        assert_eq!(split.when.unwrap().date(), day(2026, 12, 3));
    }

    #[test]
    fn test_split_without_date_keeps_text() {
        let split = resolver().split_title_date("  Water the plants  ");
        assert_eq!(split.title, "Water the plants");
        assert!(split.when.is_none());
    }

    #[test]
    fn test_word_times_need_context() {
        let split = resolver().split_title_date("Morning run");
        assert_eq!(split.title, "Morning run");
        assert!(split.when.is_none());

        let split = resolver().split_title_date("Run tomorrow morning");
        assert_eq!(split.title, "Run");
        assert_eq!(
            split.when.unwrap(),
            day(2026, 10, 22).and_hms_opt(9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_numbers_alone_are_not_dates() {
        let split = resolver().split_title_date("Buy 2 apples");
        assert_eq!(split.title, "Buy 2 apples");
        assert!(split.when.is_none());
    }

    #[test]
    fn test_parse_time_12hour() {
        assert_eq!(parse_time("3pm"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time("3:30pm"), NaiveTime::from_hms_opt(15, 30, 0));
        assert_eq!(parse_time("12am"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time("12pm"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_time("13pm"), None);
    }

    #[test]
    fn test_parse_time_24hour() {
        assert_eq!(parse_time("15:00"), NaiveTime::from_hms_opt(15, 0, 0));
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("2026-10-21T10:00:00"), Some(wednesday()));
        assert_eq!(
            parse_reference("2026-10-21"),
            day(2026, 10, 21).and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_reference("soon"), None);
    }

    #[test]
    fn test_merge_prefers_later_components() {
        let a = DateParseResult::date_only(day(2026, 1, 1));
        let b = DateParseResult::time_only(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        let merged = a.merge(b);
        assert_eq!(merged.date, Some(day(2026, 1, 1)));
        assert_eq!(merged.time, NaiveTime::from_hms_opt(8, 0, 0));
    }
}
