#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Day,
    Month,
    Year,
}

impl Slot {
    /// Number of digits a complete value of this slot holds.
    pub fn width(self) -> usize {
        match self {
            Slot::Year => 4,
            Slot::Day | Slot::Month => 2,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Slot::Day => "DD",
            Slot::Month => "MM",
            Slot::Year => "YYYY",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "dd" => Some(Slot::Day),
            "MM" => Some(Slot::Month),
            "yyyy" => Some(Slot::Year),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    Slot(Slot),
    /// Separator placeholder, keyed by the marker that produced it.
    Gap(char),
    Literal(char),
}

/// A parsed date template such as `dd'*'MM'$'yyyy`.
///
/// Unquoted letter runs name a slot (`dd`, `MM`, `yyyy`). Text between single
/// quotes is literal, except for the gap markers `*` and `$`, which stand for
/// the caller's separator. Quote characters never reach the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<TemplateToken>,
}

const QUOTE: char = '\'';
const GAP_MARKERS: [char; 2] = ['*', '$'];

impl Template {
    pub fn parse(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::<TemplateToken>::new();
        let mut quoted = false;
        let mut idx = 0usize;

        while idx < chars.len() {
            let ch = chars[idx];
            if ch == QUOTE {
                quoted = !quoted;
                idx += 1;
                continue;
            }

            if quoted {
                if GAP_MARKERS.contains(&ch) {
                    tokens.push(TemplateToken::Gap(ch));
                } else {
                    tokens.push(TemplateToken::Literal(ch));
                }
                idx += 1;
                continue;
            }

            if ch.is_ascii_alphabetic() {
                let start = idx;
                while idx < chars.len() && chars[idx] == ch {
                    idx += 1;
                }
                let token: String = chars[start..idx].iter().collect();
                match Slot::from_token(token.as_str()) {
                    Some(slot) => tokens.push(TemplateToken::Slot(slot)),
                    None => tokens.extend(token.chars().map(TemplateToken::Literal)),
                }
                continue;
            }

            tokens.push(TemplateToken::Literal(ch));
            idx += 1;
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        self.tokens.as_slice()
    }

    /// Slots in left-to-right order, which is also the order digits are typed in.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            TemplateToken::Slot(slot) => Some(*slot),
            TemplateToken::Gap(_) | TemplateToken::Literal(_) => None,
        })
    }

    pub fn widths(&self) -> Vec<usize> {
        self.slots().map(Slot::width).collect()
    }

    pub fn max_digits(&self) -> usize {
        self.slots().map(Slot::width).sum()
    }

    pub(crate) fn next_slot(&self, from: usize) -> Option<Slot> {
        self.tokens.get(from + 1..)?.iter().find_map(|token| match token {
            TemplateToken::Slot(slot) => Some(*slot),
            TemplateToken::Gap(_) | TemplateToken::Literal(_) => None,
        })
    }
}
