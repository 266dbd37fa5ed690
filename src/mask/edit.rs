use crate::error::EditRejection;
use std::ops::Range;

/// A replacement of a character range. Offsets count Unicode scalar values;
/// host offsets in other units are converted once, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    range: Range<usize>,
    replacement: String,
}

impl TextEdit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at..at, text)
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, String::new())
    }

    /// Builds an edit from a UTF-16 `location`/`length` pair, the way text
    /// widgets on many platforms report ranges.
    pub fn from_utf16(
        text: &str,
        location: usize,
        length: usize,
        replacement: impl Into<String>,
    ) -> Result<Self, EditRejection> {
        let utf16_len = text.encode_utf16().count();
        let Some(end) = location
            .checked_add(length)
            .filter(|end| *end <= utf16_len)
        else {
            return Err(EditRejection::RangeOutOfBounds {
                start: location,
                end: location.saturating_add(length),
                len: utf16_len,
            });
        };

        let start = char_index_from_utf16(text, location)?;
        let end = char_index_from_utf16(text, end)?;
        Ok(Self::new(start..end, replacement))
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn replacement(&self) -> &str {
        self.replacement.as_str()
    }

    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }

    /// Text the host would show if it applied this edit itself.
    pub fn apply(&self, text: &str) -> Result<String, EditRejection> {
        let len = text.chars().count();
        if self.range.start > self.range.end || self.range.end > len {
            return Err(EditRejection::RangeOutOfBounds {
                start: self.range.start,
                end: self.range.end,
                len,
            });
        }

        let start = byte_index_at_char(text, self.range.start);
        let end = byte_index_at_char(text, self.range.end);
        let mut out = String::with_capacity(text.len() - (end - start) + self.replacement.len());
        out.push_str(&text[..start]);
        out.push_str(self.replacement.as_str());
        out.push_str(&text[end..]);
        Ok(out)
    }
}

fn byte_index_at_char(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte_idx, _)| byte_idx)
}

fn char_index_from_utf16(text: &str, offset: usize) -> Result<usize, EditRejection> {
    let mut units = 0usize;
    for (char_idx, ch) in text.chars().enumerate() {
        if units == offset {
            return Ok(char_idx);
        }
        units += ch.len_utf16();
        if units > offset {
            return Err(EditRejection::SplitSurrogate { offset });
        }
    }
    Ok(text.chars().count())
}
