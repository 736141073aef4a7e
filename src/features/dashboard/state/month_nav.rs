use chrono::{Datelike, Months, NaiveDate};

/// Shifts `date` by whole calendar months, clamping the day to the end of the target month.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// What a date click did to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateClick {
    Selected,
    MovedBack,
    MovedForward,
}

/// Displayed month plus selected date for the date list and calendar panel.
///
/// The two are independent: paging through months never moves the selection, and clicking a
/// day outside the displayed month only moves the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNavigator {
    current_month: NaiveDate,
    selected_date: NaiveDate,
}

impl MonthNavigator {
    pub fn new(today: NaiveDate) -> Self {
        Self { current_month: today, selected_date: today }
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn go_to_previous_month(&mut self, reference: NaiveDate) {
        self.current_month = add_months(reference, -1);
    }

    pub fn go_to_next_month(&mut self, reference: NaiveDate) {
        self.current_month = add_months(reference, 1);
    }

    /// Handles a click on `day`.
    ///
    /// Only the month of the year is compared with the displayed month; the year is ignored,
    /// so March 2023 counts as "same month" while March 2024 is displayed.
    pub fn select_date(&mut self, day: NaiveDate) -> DateClick {
        let clicked = day.month();
        let active = self.current_month.month();

        if clicked == active {
            self.selected_date = day;
            DateClick::Selected
        } else if active > clicked {
            self.go_to_previous_month(add_months(day, 1));
            DateClick::MovedBack
        } else {
            self.go_to_next_month(add_months(day, -1));
            DateClick::MovedForward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_on_today() {
        let nav = MonthNavigator::new(date(2024, 3, 15));
        assert_eq!(nav.current_month(), date(2024, 3, 15));
        assert_eq!(nav.selected_date(), date(2024, 3, 15));
    }

    #[test]
    fn same_month_click_selects_without_moving() {
        let mut nav = MonthNavigator::new(date(2024, 3, 15));
        for day in 1..=31 {
            let clicked = date(2024, 3, day);
            assert_eq!(nav.select_date(clicked), DateClick::Selected);
            assert_eq!(nav.current_month(), date(2024, 3, 15));
            assert_eq!(nav.selected_date(), clicked);
        }
    }

    #[test]
    fn earlier_month_click_moves_back_and_keeps_selection() {
        let mut nav = MonthNavigator::new(date(2024, 3, 15));
        assert_eq!(nav.select_date(date(2024, 2, 10)), DateClick::MovedBack);
        assert_eq!(nav.current_month().month(), 2);
        assert_eq!(nav.current_month(), date(2024, 2, 10));
        assert_eq!(nav.selected_date(), date(2024, 3, 15));
    }

    #[test]
    fn later_month_click_moves_forward() {
        let mut nav = MonthNavigator::new(date(2024, 3, 15));
        assert_eq!(nav.select_date(date(2024, 4, 20)), DateClick::MovedForward);
        assert_eq!(nav.current_month(), date(2024, 4, 20));
        assert_eq!(nav.selected_date(), date(2024, 3, 15));
    }

    #[test]
    fn year_is_ignored_when_comparing_months() {
        let mut nav = MonthNavigator::new(date(2024, 3, 15));
        assert_eq!(nav.select_date(date(2023, 3, 5)), DateClick::Selected);
        assert_eq!(nav.current_month(), date(2024, 3, 15));
        assert_eq!(nav.selected_date(), date(2023, 3, 5));
    }

    #[test]
    fn december_click_from_january_counts_as_later_month() {
        let mut nav = MonthNavigator::new(date(2024, 1, 10));
        assert_eq!(nav.select_date(date(2023, 12, 28)), DateClick::MovedForward);
        assert_eq!(nav.current_month(), date(2023, 12, 28));
    }

    #[test]
    fn month_round_trip_clamps_to_month_end() {
        let mut nav = MonthNavigator::new(date(2024, 3, 1));
        nav.select_date(date(2024, 1, 31));
        // Jan 31 + 1 month clamps to Feb 29, then back to Jan 29.
        assert_eq!(nav.current_month(), date(2024, 1, 29));
    }

    #[test]
    fn month_buttons_shift_from_reference() {
        let mut nav = MonthNavigator::new(date(2023, 1, 31));
        nav.go_to_next_month(nav.current_month());
        assert_eq!(nav.current_month(), date(2023, 2, 28));
        nav.go_to_previous_month(date(2023, 1, 15));
        assert_eq!(nav.current_month(), date(2022, 12, 15));
        assert_eq!(nav.selected_date(), date(2023, 1, 31));
    }

    #[test]
    fn add_months_handles_negative_offsets() {
        assert_eq!(add_months(date(2024, 5, 31), -3), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 5, 31), 0), date(2024, 5, 31));
        assert_eq!(add_months(date(2024, 11, 30), 14), date(2026, 1, 30));
    }
}
