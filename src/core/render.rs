//! Presenter: HTML-safe rendering with a mode label.

use crate::core::mode::Mode;

/// Escape text for HTML display. Ampersands are replaced first so the
/// entities produced by the later steps are not double-escaped; newlines
/// become `<br>` last.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
        .replace('\n', "<br>")
}

/// Wrap `text` in the result fragment, labelled when the mode is known.
pub fn render(mode: Option<Mode>, text: &str) -> String {
    let body = format!("<div class=\"result\">{}</div>", escape_html(text));
    match mode {
        Some(mode) => format!("<strong>{}:</strong>{}", mode.label(), body),
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_order_avoids_double_escaping() {
        assert_eq!(escape_html("<a&b>"), "&lt;a&amp;b&gt;");
    }

    #[test]
    fn escape_quotes_and_newlines() {
        assert_eq!(escape_html("\"hi\"\n'there'"), "&quot;hi&quot;<br>&#039;there&#039;");
    }

    #[test]
    fn render_labels_known_modes() {
        let out = render(Some(Mode::QuickAnswer), "done");
        assert_eq!(out, "<strong>Quick Answer:</strong><div class=\"result\">done</div>");
    }

    #[test]
    fn render_omits_label_for_unknown_mode() {
        assert_eq!(render(None, "done"), "<div class=\"result\">done</div>");
    }

    #[test]
    fn render_contains_escaped_text_for_every_mode() {
        let text = "a<b> & \"c\"\nd";
        let escaped = escape_html(text);
        for code in ["1", "2", "3", "4", "5", "6", "7", "0", "nope", ""] {
            let out = render(Mode::from_code(code), text);
            assert!(out.contains(&escaped), "mode {:?} lost the text", code);
        }
    }
}
