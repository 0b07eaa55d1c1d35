//! Response decoding: repair of the malformations the service is known to
//! emit, followed by strict deserialization into typed records.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::{errors::truncate_body, Error};

/// Repairs the specific corruptions seen in service responses:
///
/// * a leading byte-order mark,
/// * raw control characters inside string literals (escaped),
/// * stray control characters between tokens (dropped),
/// * unescaped `"` inside string literals (escaped).
///
/// A quote inside a string is taken as the closing quote only when the next
/// non-whitespace character can follow a JSON string (`,` `:` `}` `]` or end
/// of input). Anything else is left untouched so genuine structural errors
/// still fail to parse. Returns the input unchanged when nothing was repaired.
pub fn repair_json(raw: &str) -> Cow<'_, str> {
    let body = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut repaired = String::with_capacity(body.len());
    let mut changed = body.len() != raw.len();
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in body.char_indices() {
        if !in_string {
            if c == '"' {
                in_string = true;
                repaired.push(c);
            } else if c.is_control() && !matches!(c, ' ' | '\t' | '\n' | '\r') {
                changed = true;
            } else {
                repaired.push(c);
            }
            continue;
        }

        if escaped {
            escaped = false;
            repaired.push(c);
        } else if c == '\\' {
            escaped = true;
            repaired.push(c);
        } else if c == '"' {
            if closes_string(&body[idx + c.len_utf8()..]) {
                in_string = false;
                repaired.push(c);
            } else {
                repaired.push_str("\\\"");
                changed = true;
            }
        } else if (c as u32) < 0x20 {
            match c {
                '\n' => repaired.push_str("\\n"),
                '\r' => repaired.push_str("\\r"),
                '\t' => repaired.push_str("\\t"),
                other => repaired.push_str(&format!("\\u{:04x}", other as u32)),
            }
            changed = true;
        } else {
            repaired.push(c);
        }
    }

    if changed {
        Cow::Owned(repaired)
    } else {
        Cow::Borrowed(raw)
    }
}

fn closes_string(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    match trimmed.chars().next() {
        None => true,
        Some(next) => {
            matches!(next, ',' | ':' | '}' | ']')
                // A quote after blank space starts the next token; leave the
                // missing separator for the parser to reject.
                || (next == '"' && trimmed.len() < rest.len())
        }
    }
}

/// Repairs `body` and decodes it as a JSON array of `R`.
///
/// Columns the record type does not declare are ignored. A column whose value
/// does not fit its declared type fails the whole decode.
pub fn decode_records<R: DeserializeOwned>(body: &str) -> Result<Vec<R>, Error> {
    let repaired = repair_json(body);
    if let Cow::Owned(_) = repaired {
        tracing::warn!("Repaired malformed JSON in response body");
    }
    serde_json::from_str::<Vec<R>>(&repaired).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Decode {
            message: e.to_string(),
            body: snippet,
        }
    })
}
