use crate::server::lib::ErrorMessage;

mod base;
mod error;
mod index;

pub enum Template<'text> {
    Cleaned {
        cleaned: &'text str,
        strip_message_ids: bool,
        text: &'text str,
    },
    Error(Option<ErrorMessage<'text, 'text>>),
    Index,
}

pub fn render_template_string(template: Template<'_>) -> String {
    match template {
        Template::Cleaned {
            cleaned,
            strip_message_ids,
            text,
        } => index::cleaned(text, cleaned, strip_message_ids).to_string(),
        Template::Error(error_detail) => error::rejected_message(&error_detail).to_string(),
        Template::Index => index::index("", true).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::{
        server::lib::ErrorMessage,
        templates::{Template, render_template_string},
    };

    #[test]
    fn index_has_form() {
        let html = render_template_string(Template::Index);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<form method=\"post\" action=\"./\">"));
        assert!(html.contains("name=\"strip_message_ids\""));
    }

    #[test]
    fn cleaned_text_is_escaped() {
        let html = render_template_string(Template::Cleaned {
            cleaned: "<script>alert(1)</script>",
            strip_message_ids: false,
            text: "[WebChat x] <script>alert(1)</script>",
        });

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Injected wrappers were removed."));
    }

    #[test]
    fn rejected_message_lists_reason() {
        let html = render_template_string(Template::Error(Some(ErrorMessage {
            name: Cow::Borrowed("Message too large"),
            description: Cow::Borrowed("The limit is 16 bytes."),
        })));

        assert!(html.contains("<h2>The submitted message wasn"));
        assert!(html.contains("<dt>Message too large</dt><dd>The limit is 16 bytes.</dd>"));
        assert!(html.contains("Back to the message form"));
    }

    #[test]
    fn rejected_message_without_reason() {
        let html = render_template_string(Template::Error(None));

        assert!(html.contains("The form couldn"));
        assert!(!html.contains("<dl>"));
    }

    #[test]
    fn unchanged_text_is_reported() {
        let html = render_template_string(Template::Cleaned {
            cleaned: "hello",
            strip_message_ids: true,
            text: "hello",
        });

        assert!(html.contains("Nothing to strip"));
    }
}
