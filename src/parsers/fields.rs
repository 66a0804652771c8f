use std::sync::OnceLock;

use regex::Regex;

fn quoted_body_re() -> &'static Regex {
    static QUOTED_BODY_RE: OnceLock<Regex> = OnceLock::new();
    // `[^"]` also matches newlines, so multi-line bodies are captured whole
    QUOTED_BODY_RE.get_or_init(|| Regex::new(r#"\bbody="([^"]*)""#).expect("valid quoted body regex"))
}

fn plain_body_re() -> &'static Regex {
    static PLAIN_BODY_RE: OnceLock<Regex> = OnceLock::new();
    PLAIN_BODY_RE.get_or_init(|| Regex::new(r"\bbody=([^,\n]*)").expect("valid plain body regex"))
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Extract a scalar `key=value` field from a dump block
///
/// Returns the text after the first `key=` (at a key boundary, so `date` never matches
/// inside `update_date=`) up to the next comma or newline, trimmed. Returns an empty
/// string when the key is absent.
///
/// Values containing commas or newlines are truncated, which is why the message body
/// has its own extractor, [`extract_body`].
///
/// # Examples
///
/// ```
/// use sms_backup::parsers::fields::extract_field;
///
/// let block = "_id=7, address=+33612345678, date=1609459200000, type=1";
/// assert_eq!(extract_field(block, "address"), "+33612345678");
/// assert_eq!(extract_field(block, "subject"), "");
/// ```
pub fn extract_field(block: &str, key: &str) -> String {
    let needle = format!("{}=", key);

    for (start, _) in block.match_indices(&needle) {
        let at_boundary = block[..start].chars().next_back().is_none_or(|c| !is_key_char(c));
        if !at_boundary {
            continue;
        }

        let rest = &block[start + needle.len()..];
        let end = rest.find([',', '\n']).unwrap_or(rest.len());
        return rest[..end].trim().to_string();
    }

    String::new()
}

/// Extract the message body from a dump block
///
/// Tries the quoted form `body="..."` first and returns its interior verbatim,
/// embedded commas and newlines included. Falls back to an unquoted `body=` value read
/// up to the next comma or newline. Returns an empty string when neither is present.
///
/// # Examples
///
/// ```
/// use sms_backup::parsers::fields::extract_body;
///
/// assert_eq!(extract_body("date=1, body=\"Hello, world\", type=1"), "Hello, world");
/// assert_eq!(extract_body("date=1, body=Bye, type=2"), "Bye");
/// ```
pub fn extract_body(block: &str) -> String {
    if let Some(caps) = quoted_body_re().captures(block) {
        return caps[1].to_string();
    }

    if let Some(caps) = plain_body_re().captures(block) {
        return caps[1].trim().to_string();
    }

    String::new()
}
