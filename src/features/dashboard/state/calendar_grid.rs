use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let day_idx = day.weekday().num_days_from_monday() as i64;
    let start_idx = week_start.num_days_from_monday() as i64;
    let diff = (7 + day_idx - start_idx) % 7;
    day.checked_sub_signed(Duration::days(diff)).unwrap_or(day)
}

fn days_from(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// The seven days of the week containing `day`.
pub fn week_of(day: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    days_from(start_of_week(day, week_start), 7)
}

/// Six full weeks covering the month of `month`, padded with days of the adjacent months.
pub fn month_grid(month: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let first = month.with_day(1).unwrap_or(month);
    days_from(start_of_week(first, week_start), 42)
}

pub fn weekday_labels(week_start: Weekday) -> Vec<&'static str> {
    let mut day = week_start;
    (0..7)
        .map(|_| {
            let label = match day {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            };
            day = day.succ();
            label
        })
        .collect()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
