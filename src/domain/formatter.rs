//! Chat reply formatter: plain text in, light inline markup out.
//!
//! Rules run in a fixed order and each one sees the previous rule's output.
//! No escaping is performed; callers pass text from the LoanVista service only.

use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.\s+[^\n]+)").expect("numbered item pattern"));

static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[-*•]\s+(.+)$").expect("bullet pattern"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern"));

/// Format a raw chat reply into markup.
///
/// 1. `N. text` runs become `chat-list-item` blocks.
/// 2. Lines starting with `-`, `*` or `•` become `chat-bullet` blocks.
/// 3. Blank lines split paragraphs, single newlines become `<br>`.
/// 4. Output without a paragraph break is wrapped in one `<p>`.
/// 5. `**x**` becomes bold, then the remaining `*x*` becomes italic.
pub fn format_chat_message(message: &str) -> String {
    let formatted = NUMBERED_ITEM.replace_all(message, r#"<div class="chat-list-item">${1}</div>"#);
    let formatted = BULLET_LINE.replace_all(&formatted, r#"<div class="chat-bullet">• ${1}</div>"#);

    let mut formatted = formatted.replace("\n\n", "</p><p>").replace('\n', "<br>");

    if !formatted.contains("<p>") {
        formatted = format!("<p>{}</p>", formatted);
    }

    let formatted = BOLD.replace_all(&formatted, "<strong>${1}</strong>");
    ITALIC.replace_all(&formatted, "<em>${1}</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_single_paragraph() {
        let out = format_chat_message("Hello there, how can I help?");
        assert_eq!(out, "<p>Hello there, how can I help?</p>");
        assert_eq!(out.matches("<p>").count(), 1);
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            format_chat_message("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_numbered_list_items() {
        let out = format_chat_message("Steps:\n1. Save money\n2. Pay debt");
        assert_eq!(
            out,
            "<p>Steps:<br><div class=\"chat-list-item\">1. Save money</div><br>\
             <div class=\"chat-list-item\">2. Pay debt</div></p>"
        );
    }

    #[test]
    fn test_bullets_rewritten_before_italics() {
        let out = format_chat_message("Tips:\n- budget\n* invest\n• save");
        assert_eq!(
            out,
            "<p>Tips:<br><div class=\"chat-bullet\">• budget</div><br>\
             <div class=\"chat-bullet\">• invest</div><br>\
             <div class=\"chat-bullet\">• save</div></p>"
        );
        assert!(!out.contains("<em>"));
    }

    #[test]
    fn test_bullets_on_crlf_lines() {
        assert_eq!(
            format_chat_message("Tips:\r\n- budget\r\n- save"),
            "<p>Tips:\r<br><div class=\"chat-bullet\">• budget</div>\r<br>\
             <div class=\"chat-bullet\">• save</div></p>"
        );
    }

    #[test]
    fn test_paragraph_breaks_skip_outer_wrap() {
        let out = format_chat_message("First.\n\nSecond.");
        assert_eq!(out, "First.</p><p>Second.");
    }

    #[test]
    fn test_bold_consumed_before_italic() {
        let out = format_chat_message("a **b** *c* **d**");
        assert_eq!(
            out,
            "<p>a <strong>b</strong> <em>c</em> <strong>d</strong></p>"
        );
    }

    #[test]
    fn test_unbalanced_asterisks_left_as_regex_yields() {
        assert_eq!(format_chat_message("5 * 3 = 15"), "<p>5 * 3 = 15</p>");
        assert_eq!(format_chat_message("**open only"), "<p>**open only</p>");
        assert_eq!(format_chat_message("a *b **c"), "<p>a <em>b </em>*c</p>");
    }

    #[test]
    fn test_no_escaping() {
        assert_eq!(format_chat_message("<b>x</b>"), "<p><b>x</b></p>");
    }
}
