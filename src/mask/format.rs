use super::render::{SlotValues, substitute};
use super::template::{Slot, Template};
use serde::{Deserialize, Serialize};

/// Order in which the date segments are typed and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    MonthYear,
    #[default]
    DayMonthYear,
    MonthDayYear,
}

impl DateFormat {
    pub const ALL: [DateFormat; 3] = [
        DateFormat::MonthYear,
        DateFormat::DayMonthYear,
        DateFormat::MonthDayYear,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::MonthYear => "MM'$'yyyy",
            DateFormat::DayMonthYear => "dd'*'MM'$'yyyy",
            DateFormat::MonthDayYear => "MM'$'dd'*'yyyy",
        }
    }

    pub fn template(self) -> Template {
        Template::parse(self.pattern())
    }

    pub fn slots(self) -> Vec<Slot> {
        self.template().slots().collect()
    }

    /// Digit widths consumed from the typed digit stream, in typing order.
    pub fn widths(self) -> Vec<usize> {
        self.template().widths()
    }

    pub fn max_digits(self) -> usize {
        self.template().max_digits()
    }

    /// Placeholder such as `DD / MM / YYYY`.
    pub fn placeholder(self, separator: &str) -> String {
        let values = SlotValues {
            day: Slot::Day.placeholder(),
            month: Slot::Month.placeholder(),
            year: Slot::Year.placeholder(),
        };
        substitute(&self.template(), &values, separator, |_, _| true)
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFormat::MonthYear => "month/year",
            DateFormat::DayMonthYear => "day/month/year",
            DateFormat::MonthDayYear => "month/day/year",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DateFormat::MonthYear => DateFormat::DayMonthYear,
            DateFormat::DayMonthYear => DateFormat::MonthDayYear,
            DateFormat::MonthDayYear => DateFormat::MonthYear,
        }
    }
}
