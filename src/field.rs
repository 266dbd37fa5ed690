use crate::config::FormatterConfig;
use crate::error::DateError;
use crate::mask::edit::TextEdit;
use crate::mask::format::DateFormat;
use crate::mask::{EditOutcome, MaskedDateFormatter};
use chrono::NaiveDate;
use std::fmt;

/// Passed to listeners whenever the field's date may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChanged<'a> {
    pub text: &'a str,
    pub date: Option<NaiveDate>,
}

pub type ChangeListener = Box<dyn FnMut(&ValueChanged<'_>)>;

/// A date text field: the text buffer a host widget displays, driven by a
/// [`MaskedDateFormatter`].
pub struct DateField {
    formatter: MaskedDateFormatter,
    text: String,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateField")
            .field("formatter", &self.formatter)
            .field("text", &self.text)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for DateField {
    fn default() -> Self {
        Self::new(MaskedDateFormatter::default())
    }
}

impl DateField {
    pub fn new(formatter: MaskedDateFormatter) -> Self {
        Self {
            formatter,
            text: String::new(),
            listeners: Vec::new(),
        }
    }

    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(MaskedDateFormatter::from_config(config))
    }

    pub fn with_listener(mut self, listener: impl FnMut(&ValueChanged<'_>) + 'static) -> Self {
        self.on_change(listener);
        self
    }

    pub fn on_change(&mut self, listener: impl FnMut(&ValueChanged<'_>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn formatter(&self) -> &MaskedDateFormatter {
        &self.formatter
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn placeholder(&self) -> String {
        self.formatter.placeholder()
    }

    /// Switching format clears the text, since digits typed for one order
    /// mean something else in another.
    pub fn set_format(&mut self, format: DateFormat) {
        self.formatter.set_format(format);
        self.clear();
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.formatter.set_separator(separator);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn apply_edit(&mut self, edit: &TextEdit) -> EditOutcome {
        let outcome = self.formatter.apply_edit(self.text.as_str(), edit);
        self.adopt(&outcome);
        outcome
    }

    pub fn apply_edit_utf16(
        &mut self,
        location: usize,
        length: usize,
        replacement: &str,
    ) -> EditOutcome {
        let outcome = self.formatter.apply_edit_utf16(
            self.text.as_str(),
            location,
            length,
            replacement,
        );
        self.adopt(&outcome);
        outcome
    }

    /// Types `text` at the end of the field.
    pub fn type_str(&mut self, text: &str) -> EditOutcome {
        self.apply_edit(&TextEdit::insert(self.char_len(), text))
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) -> EditOutcome {
        let len = self.char_len();
        self.apply_edit(&TextEdit::delete(len.saturating_sub(1)..len))
    }

    /// The parsed date, or `None` while the text is incomplete or invalid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.formatter.parse(self.text.as_str())
    }

    /// Replaces the text with the rendered `date`, or clears it for `None`.
    pub fn set_date(&mut self, date: Option<NaiveDate>) -> Result<(), DateError> {
        self.text = match date {
            Some(date) => self.formatter.format_date(date)?,
            None => String::new(),
        };
        self.notify();
        Ok(())
    }

    fn adopt(&mut self, outcome: &EditOutcome) {
        if let Some(text) = outcome.text() {
            self.text = text.to_string();
        }
        if outcome.value_changed() {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let change = ValueChanged {
            text: self.text.as_str(),
            date: self.formatter.parse(self.text.as_str()),
        };
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateField;
    use crate::config::FormatterConfig;
    use crate::error::EditRejection;
    use crate::mask::EditOutcome;
    use crate::mask::format::DateFormat;
    use crate::mask::render::SeparatorPolicy;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn recording_field(config: &FormatterConfig) -> (DateField, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let field = DateField::from_config(config)
            .with_listener(move |change| sink.borrow_mut().push(change.text.to_string()));
        (field, seen)
    }

    #[test]
    fn typing_one_digit_at_a_time() {
        let mut field = DateField::default();
        for ch in "01012020".chars() {
            field.type_str(ch.to_string().as_str());
        }
        assert_eq!(field.text(), "01 / 01 / 2020");
        assert_eq!(field.date(), Some(date(2020, 1, 1)));
    }

    #[test]
    fn ninth_digit_leaves_text_unchanged() {
        let mut field = DateField::default();
        field.type_str("01012020");
        let outcome = field.type_str("9");
        assert!(matches!(
            outcome,
            EditOutcome::Veto(EditRejection::TooManyDigits { .. })
        ));
        assert_eq!(field.text(), "01 / 01 / 2020");
    }

    #[test]
    fn listeners_fire_on_accepted_edits_only() {
        let config = FormatterConfig {
            format: DateFormat::MonthYear,
            separator: "-".to_string(),
            ..FormatterConfig::default()
        };
        let (mut field, seen) = recording_field(&config);
        field.type_str("01");
        field.type_str("2020");
        field.type_str("1");
        field.backspace();
        assert_eq!(*seen.borrow(), vec!["01", "01-2020", "01-202"]);
    }

    #[test]
    fn backspace_passes_through() {
        let mut field = DateField::default();
        field.type_str("010");
        assert_eq!(field.text(), "01 / 0");
        let outcome = field.backspace();
        assert!(outcome.accepts_host_edit());
        assert_eq!(field.text(), "01 / ");
        field.backspace();
        field.backspace();
        field.backspace();
        assert_eq!(field.text(), "01");
        field.type_str("1");
        assert_eq!(field.text(), "01 / 1");
    }

    #[test]
    fn backspace_on_empty_field() {
        let mut field = DateField::default();
        let outcome = field.backspace();
        assert!(outcome.accepts_host_edit());
        assert_eq!(field.text(), "");
    }

    #[test]
    fn set_date_renders_and_notifies() {
        let config = FormatterConfig {
            format: DateFormat::MonthDayYear,
            separator: "-".to_string(),
            separator_policy: SeparatorPolicy::Lazy,
        };
        let (mut field, seen) = recording_field(&config);
        field.set_date(Some(date(2019, 3, 1))).expect("set date");
        assert_eq!(field.text(), "03-01-2019");
        assert_eq!(field.date(), Some(date(2019, 3, 1)));

        field.set_date(None).expect("clear");
        assert_eq!(field.text(), "");
        assert_eq!(field.date(), None);
        assert_eq!(*seen.borrow(), vec!["03-01-2019", ""]);
    }

    #[test]
    fn changing_format_clears_text() {
        let mut field = DateField::default();
        field.type_str("0101");
        field.set_format(DateFormat::MonthYear);
        assert!(field.is_empty());
        assert_eq!(field.placeholder(), "MM / YYYY");
    }

    #[test]
    fn utf16_edits_from_host() {
        let mut field = DateField::default();
        field.apply_edit_utf16(0, 0, "31");
        field.apply_edit_utf16(2, 0, "12");
        assert_eq!(field.text(), "31 / 12");
        field.apply_edit_utf16(7, 0, "1999");
        assert_eq!(field.date(), Some(date(1999, 12, 31)));
    }

    #[test]
    fn mid_text_insert_is_remasked() {
        let mut field = DateField::default();
        field.type_str("0120");
        assert_eq!(field.text(), "01 / 20");
        field.apply_edit_utf16(0, 0, "3");
        assert_eq!(field.text(), "30 / 12 / 0");
    }
}
