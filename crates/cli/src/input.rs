use std::io::Read;

use anyhow::Context;
use api_fortune_core::domain::catalog::LAZY_USER_FALLBACK;

/// Reads everything up to end-of-stream and joins its lines with `\n`.
///
/// Invalid UTF-8 is replaced rather than rejected; it will simply fail to parse as JSON.
pub fn read_response(mut reader: impl Read) -> anyhow::Result<String> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .context("read API response from stdin failed")?;

    let text = String::from_utf8_lossy(&raw);
    Ok(text.lines().collect::<Vec<_>>().join("\n"))
}

pub fn or_lazy_fallback(text: String) -> String {
    if text.trim().is_empty() {
        tracing::debug!("no response pasted; using fallback");
        return LAZY_USER_FALLBACK.to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_fortune_core::domain::catalog::ADMITS_ERROR_FORTUNE;
    use api_fortune_core::teller::FortuneTeller;

    #[test]
    fn joins_lines_and_drops_trailing_newline() {
        let input = "{\r\n  \"a\": 1\r\n}\n";
        assert_eq!(read_response(input.as_bytes()).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn keeps_text_without_trailing_newline() {
        assert_eq!(read_response("hello".as_bytes()).unwrap(), "hello");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = read_response(&[0x7b, 0xff, 0x7d][..]).unwrap();
        assert_eq!(text, "{\u{fffd}}");
    }

    #[test]
    fn blank_input_falls_back_to_lazy_user_error() {
        for input in ["", "\n\n", "   \t\n  "] {
            let text = or_lazy_fallback(read_response(input.as_bytes()).unwrap());
            assert_eq!(text, LAZY_USER_FALLBACK);
            let reading = FortuneTeller::seeded(3).analyze(&text);
            assert_eq!(reading.fortune, ADMITS_ERROR_FORTUNE);
        }
    }

    #[test]
    fn non_blank_input_is_untouched() {
        assert_eq!(or_lazy_fallback(" [] ".to_string()), " [] ");
    }
}
