use super::template::{Slot, Template, TemplateToken};
use serde::{Deserialize, Serialize};

/// When a gap between two slots shows the separator while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorPolicy {
    /// Left slot is full and the right slot has started: `01`, `01 / 2`.
    #[default]
    Lazy,
    /// Left slot is full: `01 / `, `01 / 2`.
    Eager,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotValues<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
}

impl<'a> SlotValues<'a> {
    /// Assigns typed chunks to slots in template order. Missing slots stay empty.
    pub fn assign(segments: &[&'a str], template: &Template) -> Self {
        let mut values = Self::default();
        for (slot, value) in template.slots().zip(segments.iter().copied()) {
            values.set(slot, value);
        }
        values
    }

    pub fn get(&self, slot: Slot) -> &'a str {
        match slot {
            Slot::Day => self.day,
            Slot::Month => self.month,
            Slot::Year => self.year,
        }
    }

    fn set(&mut self, slot: Slot, value: &'a str) {
        match slot {
            Slot::Day => self.day = value,
            Slot::Month => self.month = value,
            Slot::Year => self.year = value,
        }
    }

    fn is_full(&self, slot: Slot) -> bool {
        self.get(slot).chars().count() >= slot.width()
    }
}

/// Renders typed chunks into `template`. Callers parse the template once and
/// reuse it across keystrokes.
pub fn render(
    segments: &[&str],
    template: &Template,
    separator: &str,
    policy: SeparatorPolicy,
) -> String {
    let values = SlotValues::assign(segments, template);
    substitute(template, &values, separator, |left, right| {
        let Some(left) = left else {
            return false;
        };
        if !values.is_full(left) {
            return false;
        }
        match policy {
            SeparatorPolicy::Eager => true,
            SeparatorPolicy::Lazy => right.is_some_and(|right| !values.get(right).is_empty()),
        }
    })
}

/// Writes `values` into the template. `gap_open` receives the slots on either
/// side of a gap and decides whether it shows `separator`.
pub(crate) fn substitute(
    template: &Template,
    values: &SlotValues<'_>,
    separator: &str,
    gap_open: impl Fn(Option<Slot>, Option<Slot>) -> bool,
) -> String {
    let mut out = String::new();
    let mut prev_slot: Option<Slot> = None;

    for (idx, token) in template.tokens().iter().enumerate() {
        match token {
            TemplateToken::Slot(slot) => {
                out.push_str(values.get(*slot));
                prev_slot = Some(*slot);
            }
            TemplateToken::Gap(_) => {
                if gap_open(prev_slot, template.next_slot(idx)) {
                    out.push_str(separator);
                }
            }
            TemplateToken::Literal(ch) => out.push(*ch),
        }
    }

    out
}
