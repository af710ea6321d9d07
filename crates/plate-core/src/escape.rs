//! Escaping and text conversion for rendered output.

use std::borrow::Cow;

/// Escape text content: `&`, `<` and `>`.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape(s, false)
}

/// Escape an attribute value: `&`, `<`, `>` and `"`.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s, true)
}

fn escape(s: &str, quotes: bool) -> Cow<'_, str> {
    let special = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !s.contains(special) {
        return Cow::Borrowed(s);
    }

    // Single pass, so entities introduced here are never escaped again.
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quotes => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Format a number the way a JavaScript host prints it: integers without
/// `.0`, `NaN`, `Infinity` and `-Infinity` spelled out, `-0` as `0`, and
/// exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)` in magnitude.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".into()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        }
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Text
    // =========================================================================

    #[test]
    fn test_plain_text_is_borrowed() {
        assert_eq!(escape_text("Hello"), Cow::Borrowed("Hello"));
    }

    #[test]
    fn test_text_angle_brackets() {
        assert_eq!(escape_text("<input>"), "&lt;input&gt;");
    }

    #[test]
    fn test_text_ampersands_not_double_escaped() {
        assert_eq!(escape_text("a && b"), "a &amp;&amp; b");
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_text_keeps_quotes() {
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_text_unicode() {
        assert_eq!(escape_text("👋 <Hello>"), "👋 &lt;Hello&gt;");
    }

    #[test]
    fn test_text_decodes_back() {
        let original = "<input a && b>";
        let escaped = escape_text(original);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        let decoded = escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&");
        assert_eq!(decoded, original);
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"a "b" & c"#), "a &quot;b&quot; &amp; c");
    }

    #[test]
    fn test_attr_url_untouched() {
        assert_eq!(
            escape_attr("https://vanjs.org/"),
            Cow::Borrowed("https://vanjs.org/")
        );
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn test_number_float() {
        assert_eq!(format_number(3.25), "3.25");
    }

    #[test]
    fn test_number_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(u64::MAX as f64), "18446744073709552000");
    }

    #[test]
    fn test_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
