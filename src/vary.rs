use crate::constants::header;
use crate::response::{CombinedHeader, CorsResponse};
use crate::util::{equals_ignore_case, split_list};

/// Adds `field` to the response's `Vary` header.
///
/// Existing values are kept verbatim (repeated `Vary` lines are folded into one)
/// and `field` is appended after `", "`. A field
/// that is already listed is not repeated, `*` absorbs everything, and nothing
/// happens once the response head has been sent.
pub fn append_vary<R: CorsResponse + ?Sized>(response: &mut R, field: &str) {
    if response.headers_sent() {
        tracing::trace!(field, "response head already sent; leaving Vary untouched");
        return;
    }

    let field = field.trim();
    if field.is_empty() {
        return;
    }

    let updated = match response.combined_header(header::VARY) {
        CombinedHeader::Absent => merge_vary("", field),
        CombinedHeader::Text(current) => merge_vary(&current, field),
        CombinedHeader::Opaque => {
            tracing::warn!(field, "existing Vary value is not valid text; leaving it untouched");
            None
        }
    };

    if let Some(updated) = updated {
        response.set_header(header::VARY, &updated);
    }
}

/// Computes the new `Vary` value, `None` when the current one already covers `field`.
pub(crate) fn merge_vary(current: &str, field: &str) -> Option<String> {
    let current = current.trim();

    if current == "*" {
        return None;
    }

    if field == "*" {
        return Some("*".to_string());
    }

    if split_list(current).any(|existing| equals_ignore_case(existing, field)) {
        return None;
    }

    if current.is_empty() {
        Some(field.to_string())
    } else {
        Some(format!("{current}, {field}"))
    }
}

#[cfg(test)]
#[path = "vary_test.rs"]
mod vary_test;
