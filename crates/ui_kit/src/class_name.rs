//! Class-name joiner shared by every primitive.

/// Joins the present, non-empty class tokens with single spaces.
///
/// Tokens are kept in input order and never de-duplicated; `None` and
/// empty-string entries are dropped. Boolean-conditional tokens are
/// expressed as `flag.then_some("token")` at the call site.
pub fn cn<'a>(tokens: impl IntoIterator<Item = Option<&'a str>>) -> String {
    tokens
        .into_iter()
        .flatten()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::cn;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(cn([]), "");
    }

    #[test]
    fn drops_absent_entries_and_preserves_order() {
        assert_eq!(
            cn([Some("a"), false.then_some("x"), Some("b"), None, Some("c")]),
            "a b c"
        );
    }

    #[test]
    fn drops_empty_tokens() {
        assert_eq!(cn([Some(""), Some("box"), Some("")]), "box");
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(cn([Some("a"), Some("a")]), "a a");
    }
}
