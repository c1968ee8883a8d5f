use std::borrow::Cow;

/// Labels of the metadata blocks the gateway prepends for the model's context.
pub const INBOUND_META_LABELS: [&str; 6] = [
    "Conversation info",
    "Sender",
    "Forwarded message context",
    "Chat history since last reply",
    "Replied message",
    "Thread starter",
];

/// Channel names a gateway envelope header may start with (each followed by a space).
pub const ENVELOPE_CHANNELS: [&str; 13] = [
    "WebChat",
    "WhatsApp",
    "Telegram",
    "Signal",
    "Slack",
    "Discord",
    "Google Chat",
    "iMessage",
    "Teams",
    "Matrix",
    "Zalo",
    "Zalo Personal",
    "BlueBubbles",
];

const MESSAGE_ID_MARKER: &str = "[message_id:";
// `\s` plus U+FEFF, which the gateway's JavaScript side counts as whitespace
const WHITESPACE_CLASS: &str = r"[\s\x{FEFF}]";

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

static INBOUND_META_REGEX: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    let labels = INBOUND_META_LABELS
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<String>>()
        .join("|");

    regex::Regex::new(&format!(
        r"(?:{labels}){ws}*\([^)]*\):{ws}*```(?:json)?{ws}*[\s\S]*?```{ws}*",
        labels = labels,
        ws = WHITESPACE_CLASS
    ))
    .expect("RegExp compilation failed")
});
static ENVELOPE_PREFIX_REGEX: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| {
        regex::Regex::new(&format!(r"^\[([^\]]+)\]{}*", WHITESPACE_CLASS))
            .expect("RegExp compilation failed")
    });
// `YYYY-MM-DDThh:mmZ` or `YYYY-MM-DD hh:mm`, ASCII word boundary after the minutes
static ENVELOPE_TIMESTAMP_REGEX: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| {
        regex::Regex::new(
            r"[0-9]{4}-[0-9]{2}-[0-9]{2}(?:T[0-9]{2}:[0-9]{2}Z| [0-9]{2}:[0-9]{2})(?-u:\b)",
        )
        .expect("RegExp compilation failed")
    });
static MESSAGE_ID_LINE_REGEX: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| {
        regex::Regex::new(&format!(
            r"(?i)^{ws}*\[message_id:{ws}*[^\]]+\]{ws}*$",
            ws = WHITESPACE_CLASS
        ))
        .expect("RegExp compilation failed")
    });

pub fn looks_like_envelope_header(header: &str) -> bool {
    ENVELOPE_TIMESTAMP_REGEX.is_match(header)
        || ENVELOPE_CHANNELS.iter().any(|label| {
            header
                .strip_prefix(label)
                .is_some_and(|rest| rest.starts_with(' '))
        })
}

/// Removes every injected "untrusted metadata" block and trims the result.
///
/// A block looks like this:
///
/// ````text
/// Conversation info (untrusted metadata):
/// ```json
/// { "message_id": "...", "sender": "..." }
/// ```
/// ````
///
/// Blocks with an unterminated fence don't match and are kept as they are.
pub fn strip_inbound_meta(text: &str) -> Cow<'_, str> {
    match INBOUND_META_REGEX.replace_all(text, "") {
        Cow::Borrowed(unchanged) => Cow::Borrowed(unchanged.trim_matches(is_whitespace)),
        Cow::Owned(stripped) => Cow::Owned(String::from(stripped.trim_matches(is_whitespace))),
    }
}

/// Strips metadata blocks and a leading `[...]` envelope header.
///
/// The bracketed prefix is only removed if it looks like an envelope (timestamp or
/// channel label), so citations and markdown links at the start of a message survive.
pub fn strip_envelope(text: &str) -> Cow<'_, str> {
    let stripped = strip_inbound_meta(text);
    let envelope_end = ENVELOPE_PREFIX_REGEX
        .captures(&stripped)
        .filter(|captures| looks_like_envelope_header(&captures[1]))
        .and_then(|captures| captures.get(0))
        .map(|prefix| prefix.end());

    match (envelope_end, stripped) {
        (None, stripped) => stripped,
        (Some(end), Cow::Borrowed(stripped)) => Cow::Borrowed(&stripped[end..]),
        (Some(end), Cow::Owned(mut stripped)) => {
            stripped.drain(..end);
            Cow::Owned(stripped)
        }
    }
}

/// Drops lines that consist of nothing but a `[message_id: ...]` hint.
///
/// The input is returned as is (including its line endings) if no line was dropped,
/// otherwise the remaining lines are joined with `\n`.
pub fn strip_message_id_hints(text: &str) -> Cow<'_, str> {
    if !text.contains(MESSAGE_ID_MARKER) {
        return Cow::Borrowed(text);
    }

    let mut lines: Vec<&str> = text.split('\n').collect();
    let line_count = lines.len();

    // a `\r` only belongs to the line ending when a `\n` follows it
    if let Some((_, terminated_lines)) = lines.split_last_mut() {
        for line in terminated_lines {
            let terminated_line: &str = *line;

            *line = terminated_line
                .strip_suffix('\r')
                .unwrap_or(terminated_line);
        }
    }

    lines.retain(|line| !MESSAGE_ID_LINE_REGEX.is_match(line));

    if lines.len() == line_count {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(lines.join("\n"))
    }
}

/// Cleans inbound message text for display in the control UI.
pub fn clean_message(text: &str, strip_message_ids: bool) -> Cow<'_, str> {
    let without_envelope = strip_envelope(text);

    if !strip_message_ids {
        return without_envelope;
    }

    let without_hints = match strip_message_id_hints(&without_envelope) {
        Cow::Owned(cleaned) => Some(cleaned),
        Cow::Borrowed(_) => None,
    };

    without_hints.map_or(without_envelope, Cow::Owned)
}
