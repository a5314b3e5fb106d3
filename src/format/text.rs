use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Single display line: `<time>  <text>`, collapsed to one line and cut to
/// `max_width` columns.
pub(crate) fn format_mood_line(display_time: &str, text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let prefix = format!("{}  ", display_time);
    let prefix_width = UnicodeWidthStr::width(prefix.as_str());
    if max_width <= prefix_width {
        return truncate_with_ellipsis(display_time, max_width);
    }

    let text_width = max_width - prefix_width;
    let flattened = flatten_whitespace(text);
    format!("{}{}", prefix, truncate_with_ellipsis(&flattened, text_width))
}

fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_with_ellipsis(value: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(value) <= max_width {
        return value.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut result = String::new();
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + ch_width > budget {
            break;
        }
        result.push(ch);
        used += ch_width;
    }
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_untouched() {
        assert_eq!(
            format_mood_line("2025-01-01 10:00:00", "calm", 80),
            "2025-01-01 10:00:00  calm"
        );
    }

    #[test]
    fn long_text_is_truncated_to_width() {
        let line = format_mood_line("12:00", "a very long mood description", 20);
        assert_eq!(line, "12:00  a very lon...");
        assert_eq!(UnicodeWidthStr::width(line.as_str()), 20);
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(format_mood_line("t", "tired\n\tbut\r\nhappy", 40), "t  tired but happy");
    }

    #[test]
    fn wide_characters_count_double() {
        let line = format_mood_line("t", "楽しい気分です", 10);
        assert!(UnicodeWidthStr::width(line.as_str()) <= 10);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn narrow_width_keeps_time_only() {
        assert_eq!(format_mood_line("12:00:00", "calm", 5), "12...");
        assert_eq!(format_mood_line("12:00:00", "calm", 0), "");
    }
}
