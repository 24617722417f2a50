//! Month calendar of the surgical map.

use crate::shared::list::{FilteredList, Named};

/// Cells of a month grid: six Monday-first weeks.
pub(crate) const GRID_CELLS: usize = 42;

const MONTH_KEYS: [&str; 12] = [
    "month.janeiro",
    "month.fevereiro",
    "month.marco",
    "month.abril",
    "month.maio",
    "month.junho",
    "month.julho",
    "month.agosto",
    "month.setembro",
    "month.outubro",
    "month.novembro",
    "month.dezembro",
];

/// Translation keys of the grid header, Monday first.
pub(crate) const WEEKDAY_KEYS: [&str; 7] = [
    "weekday.segunda",
    "weekday.terca",
    "weekday.quarta",
    "weekday.quinta",
    "weekday.sexta",
    "weekday.sabado",
    "weekday.domingo",
];

/// Calendar month; `month` runs from 1 to 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Build a month, clamping `month` into 1..=12.
    pub(crate) const fn new(year: i32, month: u32) -> Self {
        let month = if month < 1 {
            1
        } else if month > 12 {
            12
        } else {
            month
        };
        Self { year, month }
    }

    pub(crate) fn year(self) -> i32 {
        self.year
    }

    pub(crate) fn month(self) -> u32 {
        self.month
    }

    /// Move by `delta` months across year boundaries.
    pub(crate) fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12
            + i64::from(self.month)
            - 1
            + i64::from(delta);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub(crate) fn label_key(self) -> &'static str {
        MONTH_KEYS[(self.month - 1) as usize]
    }

    pub(crate) fn days(self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the first day, Monday being 0.
    fn first_weekday(self) -> u32 {
        const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let year = if self.month < 3 {
            self.year - 1
        } else {
            self.year
        };
        let days = year + year.div_euclid(4) - year.div_euclid(100)
            + year.div_euclid(400)
            + OFFSETS[(self.month - 1) as usize]
            + 1;
        let sunday_based = days.rem_euclid(7) as u32;
        (sunday_based + 6) % 7
    }

    /// Day numbers laid out Monday first; `None` pads before the first and
    /// after the last day.
    pub(crate) fn grid(self) -> [Option<u32>; GRID_CELLS] {
        let mut cells = [None; GRID_CELLS];
        let offset = self.first_weekday() as usize;
        for day in 1..=self.days() {
            cells[offset + day as usize - 1] = Some(day);
        }
        cells
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Calendar day of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventDate {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

/// Entry of the surgical map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CalendarEvent {
    pub(crate) id: &'static str,
    pub(crate) date: EventDate,
    pub(crate) time: Option<&'static str>,
    pub(crate) title: &'static str,
}

impl Named for CalendarEvent {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.title
    }
}

/// Displayed month plus the searchable event list.
#[derive(Debug, Clone)]
pub(crate) struct CalendarBoard {
    month: Month,
    events: FilteredList<CalendarEvent>,
}

impl CalendarBoard {
    pub(crate) fn new(month: Month, events: Vec<CalendarEvent>) -> Self {
        Self {
            month,
            events: FilteredList::new(events),
        }
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn shift_month(&mut self, delta: i32) {
        self.month = self.month.shift(delta);
    }

    pub(crate) fn query(&self) -> &str {
        self.events.query()
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.events.set_query(query);
    }

    /// Events matching the filter on `day` of the displayed month.
    pub(crate) fn events_on(&self, day: u32) -> Vec<&CalendarEvent> {
        let date = EventDate {
            year: self.month.year(),
            month: self.month.month(),
            day,
        };
        self.events
            .visible()
            .into_iter()
            .filter(|event| event.date == date)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarBoard, CalendarEvent, EventDate, Month};

    fn event(
        id: &'static str,
        day: u32,
        title: &'static str,
    ) -> CalendarEvent {
        CalendarEvent {
            id,
            date: EventDate {
                year: 2025,
                month: 7,
                day,
            },
            time: None,
            title,
        }
    }

    #[test]
    fn given_month_when_shifting_then_year_boundaries_are_crossed() {
        let july = Month::new(2025, 7);

        assert_eq!(july.shift(6), Month::new(2026, 1));
        assert_eq!(july.shift(-7), Month::new(2024, 12));
        assert_eq!(july.shift(0), july);
        assert_eq!(
            Month::new(2025, 1).shift(-1).label_key(),
            "month.dezembro"
        );
    }

    #[test]
    fn given_july_2025_when_building_grid_then_first_day_falls_on_tuesday() {
        let grid = Month::new(2025, 7).grid();

        assert_eq!(grid[0], None);
        assert_eq!(grid[1], Some(1));
        assert_eq!(grid[31], Some(31));
        assert_eq!(grid[32], None);
        assert_eq!(grid.iter().flatten().count(), 31);
    }

    #[test]
    fn given_february_when_counting_days_then_leap_years_have_29() {
        assert_eq!(Month::new(2024, 2).days(), 29);
        assert_eq!(Month::new(2025, 2).days(), 28);
        assert_eq!(Month::new(1900, 2).days(), 28);
        assert_eq!(Month::new(2000, 2).days(), 29);
        // 1 June 2025 is a Sunday: the last column of the first week.
        assert_eq!(Month::new(2025, 6).grid()[6], Some(1));
    }

    #[test]
    fn given_search_text_when_listing_day_events_then_titles_are_filtered() {
        let mut board = CalendarBoard::new(
            Month::new(2025, 7),
            vec![
                event("a", 12, "Reunião"),
                event("b", 12, "+ 3 assuntos"),
                event("c", 9, "4 eventos"),
            ],
        );
        board.set_query(String::from("REUNI"));

        assert_eq!(board.events_on(12).len(), 1);
        assert!(board.events_on(9).is_empty());
        board.set_query(String::new());
        assert_eq!(board.events_on(12).len(), 2);
    }

    #[test]
    fn given_other_month_when_listing_day_events_then_nothing_matches() {
        let mut board =
            CalendarBoard::new(Month::new(2025, 7), vec![event("a", 12, "x")]);
        board.shift_month(1);

        assert!(board.events_on(12).is_empty());
        board.shift_month(-1);
        assert_eq!(board.events_on(12).len(), 1);
    }
}
