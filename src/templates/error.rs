use crate::{server::lib::ErrorMessage, templates::base::Base};

pub fn rejected_message<'error_detail>(
    error_message_opt: &'error_detail Option<ErrorMessage<'_, '_>>,
) -> Base<
    impl std::fmt::Display + markup::Render,
    impl std::fmt::Display + markup::Render + 'error_detail,
> {
    Base {
        header: markup::new! {
            h2 { "The submitted message wasn't cleaned." }
        },
        content: markup::new! {
            @match error_message_opt {
                Some(error_message) => {
                    dl {
                        dt { @error_message.name.as_ref() }
                        dd { @error_message.description.as_ref() }
                    }
                }
                None => {
                    p { "The form couldn't be read. Paste the raw text again and resubmit it." }
                }
            }
            p {
                a["href" = "./"] { "Back to the message form" }
            }
        },
    }
}
