//! Input line splitting

use crate::syslog::{Priority, Severity};

///Literal tag forcing error severity when per-category routing is enabled
const ERROR_TAG: &str = "[ERROR]";

///Decoded parts of one input line
pub struct Record<'a> {
    ///Line text with decoded prefixes stripped and surrounding whitespace trimmed
    pub body: &'a str,
    ///Severity decoded from the priority token, or forced by the `[ERROR]` tag
    pub severity: Severity,
    ///Category name, present only when per-category routing is enabled
    pub category: Option<&'a str>,
}

///Splits one raw input line into body, severity and category.
///
///Returns `None` for lines containing only whitespace.
///
///A missing or malformed priority token is never an error, the line falls
///back to the default priority and its text is left untouched. With
///`categories` disabled the bracket syntax is left untouched as well.
pub fn parse(raw: &str, categories: bool) -> Option<Record<'_>> {
    if raw.trim().is_empty() {
        return None;
    }

    let (priority, mut rest) = split_priority(raw);
    let mut severity = priority.severity();
    let mut category = None;

    if categories {
        let (name, tail) = split_category(rest);
        category = Some(name.unwrap_or(""));
        rest = tail;

        if let Some(tail) = rest.strip_prefix(ERROR_TAG) {
            severity = Severity::LOG_ERR;
            rest = tail;
        }
    }

    Some(Record {
        body: rest.trim(),
        severity,
        category,
    })
}

///Takes leading `<digits>` token off the line.
///
///The token must start the line, carry at least one ASCII digit and close
///immediately with `>`, otherwise the line is returned whole with the
///default priority.
fn split_priority(line: &str) -> (Priority, &str) {
    if let Some(rest) = line.strip_prefix('<') {
        let digits = rest.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(rest.len());
        if digits > 0 {
            if let Some(tail) = rest[digits..].strip_prefix('>') {
                if let Ok(value) = rest[..digits].parse() {
                    return (Priority::new(value), tail);
                }
            }
        }
    }

    (Priority::DEFAULT, line)
}

///Takes leading `[name]` token off the line, allowing empty name
fn split_category(line: &str) -> (Option<&str>, &str) {
    if let Some(rest) = line.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            return (Some(&rest[..end]), &rest[end + 1..]);
        }
    }

    (None, line)
}
