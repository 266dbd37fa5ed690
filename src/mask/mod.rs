pub mod bridge;
pub mod edit;
pub mod format;
pub mod render;
pub mod sanitize;
pub mod segment;
pub mod template;

use crate::config::FormatterConfig;
use crate::error::{DateError, EditRejection};
use chrono::NaiveDate;
use edit::TextEdit;
use format::DateFormat;
use render::SeparatorPolicy;
use template::Template;

/// What the host should do with a proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Apply the edit as proposed. `text` is the result of doing so.
    Accept { text: String },
    /// Discard the proposed edit and display `text` instead.
    Replace { text: String },
    /// Keep the current text.
    Veto(EditRejection),
}

impl EditOutcome {
    /// Whether the host's own default edit goes ahead.
    pub fn accepts_host_edit(&self) -> bool {
        matches!(self, EditOutcome::Accept { .. })
    }

    /// New text to display, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            EditOutcome::Accept { text } | EditOutcome::Replace { text } => Some(text.as_str()),
            EditOutcome::Veto(_) => None,
        }
    }

    /// Whether the date value behind the text may have changed.
    pub fn value_changed(&self) -> bool {
        !matches!(self, EditOutcome::Veto(_))
    }

    pub fn into_text(self, current: &str) -> String {
        match self {
            EditOutcome::Accept { text } | EditOutcome::Replace { text } => text,
            EditOutcome::Veto(_) => current.to_string(),
        }
    }
}

/// The masking engine: turns raw edits into a punctuated date string.
///
/// Every call recomputes the mask from the host's text and the pending edit.
/// Only configuration is kept between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedDateFormatter {
    format: DateFormat,
    template: Template,
    separator: String,
    separator_policy: SeparatorPolicy,
}

impl Default for MaskedDateFormatter {
    fn default() -> Self {
        Self::from_config(&FormatterConfig::default())
    }
}

impl MaskedDateFormatter {
    pub fn new(format: DateFormat, separator: impl Into<String>) -> Self {
        Self {
            format,
            template: format.template(),
            separator: separator.into(),
            separator_policy: SeparatorPolicy::default(),
        }
    }

    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(config.format, config.separator.as_str())
            .with_separator_policy(config.separator_policy)
    }

    pub fn with_separator_policy(mut self, policy: SeparatorPolicy) -> Self {
        self.separator_policy = policy;
        self
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }

    pub fn separator_policy(&self) -> SeparatorPolicy {
        self.separator_policy
    }

    pub fn set_format(&mut self, format: DateFormat) {
        self.format = format;
        self.template = format.template();
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Decides a single edit against `current`.
    ///
    /// Deletions pass through untouched. Any other edit is applied to a copy
    /// of the text, reduced to digits, checked against the format's digit
    /// limit and rendered from scratch.
    pub fn apply_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        let candidate = match edit.apply(current) {
            Ok(candidate) => candidate,
            Err(rejection) => return veto(rejection),
        };

        if edit.is_deletion() {
            return EditOutcome::Accept { text: candidate };
        }

        let digits = sanitize::sanitize(candidate.as_str());
        if !segment::within_limit(digits.as_str(), &self.template) {
            return veto(EditRejection::TooManyDigits {
                digits: digits.chars().count(),
                max: self.template.max_digits(),
            });
        }

        let text = self.render_digits(digits.as_str());
        log::trace!("{current:?} -> {text:?}");
        EditOutcome::Replace { text }
    }

    /// Same as [`apply_edit`](Self::apply_edit) with a UTF-16 range.
    pub fn apply_edit_utf16(
        &self,
        current: &str,
        location: usize,
        length: usize,
        replacement: &str,
    ) -> EditOutcome {
        match TextEdit::from_utf16(current, location, length, replacement) {
            Ok(edit) => self.apply_edit(current, &edit),
            Err(rejection) => veto(rejection),
        }
    }

    /// Renders a digit stream without checking its length. Digits beyond the
    /// width plan are dropped.
    pub fn render_digits(&self, digits: &str) -> String {
        let segments = segment::segment(digits, self.template.widths().as_slice());
        render::render(
            segments.as_slice(),
            &self.template,
            self.separator.as_str(),
            self.separator_policy,
        )
    }

    /// Re-derives the mask of arbitrary text.
    pub fn remask(&self, text: &str) -> String {
        self.render_digits(sanitize::sanitize(text).as_str())
    }

    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        bridge::parse(text, self.format, self.separator.as_str())
    }

    pub fn format_date(&self, date: NaiveDate) -> Result<String, DateError> {
        bridge::format(date, self.format, self.separator.as_str())
    }

    pub fn placeholder(&self) -> String {
        self.format.placeholder(self.separator.as_str())
    }
}

fn veto(rejection: EditRejection) -> EditOutcome {
    log::debug!("edit vetoed: {rejection}");
    EditOutcome::Veto(rejection)
}
