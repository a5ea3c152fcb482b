//! HTML rendition of the chat transcript (used for export)

use crate::types::{ChatMessage, ChatRole};
use std::fmt::Write;

/// Escape markup and turn newlines into `<br/>`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br/>"),
            _ => out.push(c),
        }
    }
    out
}

pub fn bubble_html(message: &ChatMessage) -> String {
    let text = escape_html(&message.text);
    match message.role {
        ChatRole::User => format!(r#"<div class="chat-bubble user">{}</div>"#, text),
        ChatRole::Bot => format!(r#"<div class="chat-bubble bot">{}</div>"#, text),
        ChatRole::Error => format!(r#"<div class="chat-bubble bot">Error: {}</div>"#, text),
    }
}

/// Standalone HTML page with every bubble in order
pub fn render_document(messages: &[ChatMessage], title: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n\
         .chat-bubble {{ margin: 6px 0; padding: 8px 12px; border-radius: 8px; max-width: 70%; }}\n\
         .user {{ background: #115e59; color: #fff; margin-left: auto; }}\n\
         .bot {{ background: #27272a; color: #e4e4e7; }}\n\
         .meta {{ color: #71717a; font-size: 11px; }}\n\
         </style>\n</head>\n<body>\n",
        escape_html(title)
    );
    for message in messages {
        let _ = writeln!(
            html,
            "<div class=\"meta\">{}</div>",
            message.at.format("%Y-%m-%d %H:%M")
        );
        let _ = writeln!(html, "{}", bubble_html(message));
        if let Some(details) = &message.details {
            if !details.citations.is_empty() {
                let _ = writeln!(
                    html,
                    "<div class=\"meta\">Sources: {}</div>",
                    escape_html(&details.citations.join(", "))
                );
            }
            if let Some(disclaimer) = &details.disclaimer {
                let _ = writeln!(html, "<div class=\"meta\">{}</div>", escape_html(disclaimer));
            }
        }
    }
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerDetails;

    #[test]
    fn escapes_markup_and_newlines() {
        assert_eq!(escape_html("a<b\nc"), "a&lt;b<br/>c");
        assert_eq!(escape_html("x & y > z"), "x &amp; y &gt; z");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn bot_bubble_contains_escaped_summary() {
        let message = ChatMessage::new(ChatRole::Bot, "a<b\nc");
        let html = bubble_html(&message);
        assert!(html.contains("a&lt;b<br/>c"));
        assert!(!html.contains("a<b"));
    }

    #[test]
    fn error_bubble_is_prefixed() {
        let message = ChatMessage::new(ChatRole::Error, "X");
        assert_eq!(bubble_html(&message), r#"<div class="chat-bubble bot">Error: X</div>"#);
    }

    #[test]
    fn user_text_is_escaped_too() {
        let message = ChatMessage::new(ChatRole::User, "<script>");
        assert_eq!(
            bubble_html(&message),
            r#"<div class="chat-bubble user">&lt;script&gt;</div>"#
        );
    }

    #[test]
    fn document_lists_bubbles_in_order_with_sources() {
        let mut answer = ChatMessage::new(ChatRole::Bot, "two");
        answer.details = Some(AnswerDetails {
            citations: vec!["doc-1".into()],
            disclaimer: Some("Not advice".into()),
            ..Default::default()
        });
        let messages = vec![ChatMessage::new(ChatRole::User, "one"), answer];

        let html = render_document(&messages, "Transcript");

        let first = html.find(">one<").unwrap();
        let second = html.find(">two<").unwrap();
        assert!(first < second);
        assert!(html.contains("Sources: doc-1"));
        assert!(html.contains("Not advice"));
        assert!(html.ends_with("</html>\n"));
    }
}
