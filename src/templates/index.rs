use crate::templates::base::Base;

pub fn index(
    text: &str,
    strip_message_ids: bool,
) -> Base<impl std::fmt::Display + markup::Render, impl std::fmt::Display + markup::Render> {
    Base {
        header: markup::new! {
            h2 {
                "Paste raw inbound chat text to see what the chat view will display."
            }
        },
        content: message_form(text, strip_message_ids),
    }
}

pub fn cleaned<'text>(
    text: &'text str,
    cleaned: &'text str,
    strip_message_ids: bool,
) -> Base<
    impl std::fmt::Display + markup::Render,
    impl std::fmt::Display + markup::Render + 'text,
> {
    let unchanged = text.trim() == cleaned;

    Base {
        header: markup::new! {
            h2 {
                @if unchanged {
                    "Nothing to strip, the message is displayed as submitted."
                } else {
                    "Injected wrappers were removed."
                }
            }
        },
        content: markup::new! {
            h3 { "Displayed text" }
            pre["class" = "message"] { @cleaned }
            @message_form(text, strip_message_ids)
        },
    }
}

fn message_form(
    text: &str,
    strip_message_ids: bool,
) -> impl std::fmt::Display + markup::Render + '_ {
    markup::new! {
        form["method" = "post", "action" = "./"] {
            label["for" = "text"] { "Raw message text" }
            textarea["id" = "text", "name" = "text", "required" = true] { @text }
            label {
                input["type" = "checkbox", "name" = "strip_message_ids", "value" = "on", "checked" = strip_message_ids];
                " Remove "
                code { "[message_id: ...]" }
                " hint lines"
            }
            button["type" = "submit"] { "Clean" }
        }
    }
}
