//! Identifier validation.
//!
//! Not applied unless a binding opts into strict identifiers: by default
//! table and column names are interpolated as given.

use dbwrap_core::errors::{WrapError, WrapResult};

/// Accept `name` or `schema.name` where each part is `[A-Za-z_][A-Za-z0-9_]*`.
pub fn check_identifier(name: &str) -> WrapResult<()> {
    let valid = !name.is_empty() && name.split('.').all(is_plain_identifier) && name.split('.').count() <= 2;
    if valid {
        Ok(())
    } else {
        Err(WrapError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

fn is_plain_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_qualified_names() {
        for ok in ["flights", "_t1", "main.flights", "Lat_2"] {
            assert!(check_identifier(ok).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for bad in [
            "",
            "1abc",
            "flights; DROP TABLE flights",
            "a b",
            "a.b.c",
            "t--",
            "\"quoted\"",
            "main.",
        ] {
            let err = check_identifier(bad).unwrap_err();
            assert!(matches!(err, WrapError::InvalidIdentifier { .. }), "{bad}");
        }
    }
}
