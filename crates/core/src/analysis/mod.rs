use serde_json::Value;

/// Responses whose rendering is longer than this are "too large to parse".
pub const OVERSIZED_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Not JSON at all.
    Malformed,
    /// A JSON object carrying an `"error"` key.
    AdmitsError,
    Oversized,
    Empty,
    Ordinary,
}

pub fn classify(text: &str) -> ResponseShape {
    let Ok(data) = serde_json::from_str::<Value>(text) else {
        return ResponseShape::Malformed;
    };

    // Checked in this order: an oversized error object still admits the error.
    if admits_error(&data) {
        ResponseShape::AdmitsError
    } else if complexity(&data) > OVERSIZED_THRESHOLD {
        ResponseShape::Oversized
    } else if is_falsy(&data) {
        ResponseShape::Empty
    } else {
        ResponseShape::Ordinary
    }
}

/// Character count of `data` rendered as a literal: single-quoted strings,
/// `None`/`True`/`False`, and `", "` / `": "` separators.
pub fn complexity(data: &Value) -> usize {
    match data {
        Value::Null => "None".len(),
        Value::Bool(true) => "True".len(),
        Value::Bool(false) => "False".len(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => float_len(f),
            _ => n.to_string().len(),
        },
        Value::String(s) => quoted_len(s),
        Value::Array(items) => {
            2 + items.iter().map(complexity).sum::<usize>() + separators_len(items.len())
        }
        Value::Object(obj) => {
            let entries: usize = obj
                .iter()
                .map(|(k, v)| quoted_len(k) + ": ".len() + complexity(v))
                .sum();
            2 + entries + separators_len(obj.len())
        }
    }
}

fn separators_len(count: usize) -> usize {
    count.saturating_sub(1) * ", ".len()
}

/// Shortest round-trip digits; positional for exponents in -4..16, otherwise `1.5e+20` style.
fn float_len(f: f64) -> usize {
    let sci = format!("{f:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = usize::from(mantissa.starts_with('-'));
    let digits = mantissa.chars().filter(char::is_ascii_digit).count();

    let body = if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits <= int_len {
                int_len + ".0".len()
            } else {
                digits + 1
            }
        } else {
            "0.".len() + (-exp - 1) as usize + digits
        }
    } else {
        let mantissa_len = if digits == 1 { 1 } else { digits + 1 };
        let exp_digits = exp.unsigned_abs().to_string().len().max(2);
        mantissa_len + "e+".len() + exp_digits
    };
    sign + body
}

fn quoted_len(s: &str) -> usize {
    // Double quotes are used only when the text has a single quote and no double quote.
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    2 + s
        .chars()
        .map(|c| match c {
            '\\' | '\n' | '\r' | '\t' => 2,
            c if c == quote => 2,
            c if c.is_control() || (c.is_whitespace() && c != ' ') => escape_len(c),
            _ => 1,
        })
        .sum::<usize>()
}

fn escape_len(c: char) -> usize {
    match c as u32 {
        0..=0xff => 4,
        0x100..=0xffff => 6,
        _ => 10,
    }
}

fn admits_error(data: &Value) -> bool {
    data.as_object().is_some_and(|obj| obj.contains_key("error"))
}

fn is_falsy(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(obj) => obj.is_empty(),
    }
}
