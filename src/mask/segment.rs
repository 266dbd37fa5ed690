use super::template::Template;

/// Splits `digits` into chunks of the planned widths. The last chunk may be
/// short and the result stops early once the digits run out.
pub fn segment<'a>(digits: &'a str, widths: &[usize]) -> Vec<&'a str> {
    let mut chunks = Vec::with_capacity(widths.len());
    let mut rest = digits;

    for &width in widths {
        if rest.is_empty() {
            break;
        }
        let split_at = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(byte_idx, _)| byte_idx);
        let (chunk, tail) = rest.split_at(split_at);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}

pub fn within_limit(digits: &str, template: &Template) -> bool {
    digits.chars().count() <= template.max_digits()
}
