use super::format::DateFormat;
use super::render::{SlotValues, substitute};
use super::template::{Slot, TemplateToken};
use crate::error::DateError;
use chrono::{Datelike, NaiveDate};

/// Reads a complete masked string back into a date. Every gap must hold the
/// separator and every slot its full width of digits; anything else is `None`.
/// Formats without a day slot resolve to the first of the month.
pub fn parse(text: &str, format: DateFormat, separator: &str) -> Option<NaiveDate> {
    let mut rest = text;
    let mut day = None::<u32>;
    let mut month = None::<u32>;
    let mut year = None::<u32>;

    for token in format.template().tokens() {
        match token {
            TemplateToken::Slot(slot) => {
                let (digits, tail) = take_digits(rest, slot.width())?;
                let value = digits.parse::<u32>().ok()?;
                match slot {
                    Slot::Day => day = Some(value),
                    Slot::Month => month = Some(value),
                    Slot::Year => year = Some(value),
                }
                rest = tail;
            }
            TemplateToken::Gap(_) => rest = rest.strip_prefix(separator)?,
            TemplateToken::Literal(ch) => rest = rest.strip_prefix(*ch)?,
        }
    }

    if !rest.is_empty() {
        return None;
    }

    let year = i32::try_from(year?).ok()?;
    NaiveDate::from_ymd_opt(year, month?, day.unwrap_or(1))
}

/// Renders `date` with the separator in every gap.
pub fn format(date: NaiveDate, format: DateFormat, separator: &str) -> Result<String, DateError> {
    let year = date.year();
    if !(0..=9999).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }

    let day = format!("{:02}", date.day());
    let month = format!("{:02}", date.month());
    let year = format!("{year:04}");
    let values = SlotValues {
        day: day.as_str(),
        month: month.as_str(),
        year: year.as_str(),
    };
    Ok(substitute(&format.template(), &values, separator, |_, _| true))
}

fn take_digits(text: &str, width: usize) -> Option<(&str, &str)> {
    let digits = text.get(..width)?;
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some((digits, text.get(width..)?))
}

#[cfg(test)]
mod tests {
    use super::{format, parse};
    use crate::error::DateError;
    use crate::mask::format::DateFormat;
    use chrono::{Datelike, NaiveDate};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn parses_complete_day_month_year() {
        assert_eq!(
            parse("01 / 01 / 2020", DateFormat::DayMonthYear, " / "),
            Some(date(2020, 1, 1))
        );
        assert_eq!(
            parse("12 / 31 / 1999", DateFormat::MonthDayYear, " / "),
            Some(date(1999, 12, 31))
        );
    }

    #[test]
    fn month_year_resolves_to_first_of_month() {
        assert_eq!(
            parse("01-2020", DateFormat::MonthYear, "-"),
            Some(date(2020, 1, 1))
        );
    }

    #[test]
    fn incomplete_or_malformed_text_is_none() {
        let format = DateFormat::DayMonthYear;
        assert_eq!(parse("01 / 01 / 202", format, " / "), None);
        assert_eq!(parse("01 / 01", format, " / "), None);
        assert_eq!(parse("01/01/2020", format, " / "), None);
        assert_eq!(parse("01 / 01 / 2020x", format, " / "), None);
        assert_eq!(parse("", format, " / "), None);
        assert_eq!(parse("0a / 01 / 2020", format, " / "), None);
    }

    #[test]
    fn impossible_dates_are_none() {
        assert_eq!(parse("31 / 02 / 2020", DateFormat::DayMonthYear, " / "), None);
        assert_eq!(parse("13-2020", DateFormat::MonthYear, "-"), None);
        assert_eq!(parse("00 / 01 / 2020", DateFormat::DayMonthYear, " / "), None);
    }

    #[test]
    fn formats_with_unconditional_separators() {
        let value = date(2012, 3, 9);
        assert_eq!(
            format(value, DateFormat::DayMonthYear, " / ").expect("format"),
            "09 / 03 / 2012"
        );
        assert_eq!(
            format(value, DateFormat::MonthDayYear, "-").expect("format"),
            "03-09-2012"
        );
        assert_eq!(
            format(value, DateFormat::MonthYear, "").expect("format"),
            "032012"
        );
    }

    #[test]
    fn years_beyond_four_digits_are_errors() {
        let value = date(12345, 1, 1);
        assert_eq!(
            format(value, DateFormat::DayMonthYear, "/"),
            Err(DateError::YearOutOfRange(12345))
        );
    }

    #[test]
    fn round_trips_boundary_dates() {
        let dates = [
            date(2020, 1, 1),
            date(1999, 12, 31),
            date(2009, 9, 9),
            date(2024, 2, 29),
            date(1970, 1, 31),
            date(2012, 12, 1),
        ];
        for format_kind in DateFormat::ALL {
            for separator in [" / ", "-", ""] {
                for value in dates {
                    let text = format(value, format_kind, separator).expect("format");
                    let parsed = parse(&text, format_kind, separator).expect("parse");
                    if format_kind == DateFormat::MonthYear {
                        assert_eq!(parsed, value.with_day(1).expect("first of month"));
                    } else {
                        assert_eq!(parsed, value, "{format_kind:?} {separator:?} {text}");
                    }
                }
            }
        }
    }
}
