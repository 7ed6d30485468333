/// Characters with meaning in openFDA's Lucene-style `search` syntax.
const QUERY_SYNTAX_CHARS: &[char] = &[
    '\\', '"', ':', '/', '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '~', '*', '?', '&',
    '|',
];

/// Backslash-escapes query syntax so a drug name only ever matches as a literal phrase.
pub(crate) fn escape_lucene_value(value: &str) -> String {
    value.chars().fold(String::with_capacity(value.len()), |mut out, ch| {
        if QUERY_SYNTAX_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::escape_lucene_value;

    #[test]
    fn escapes_quotes_and_operators() {
        let escaped = escape_lucene_value(r#"tylenol" OR openfda.brand_name:"advil"#);
        assert_eq!(
            escaped,
            r#"tylenol\" OR openfda.brand_name\:\"advil"#
        );
    }

    #[test]
    fn escapes_only_special_characters() {
        assert_eq!(escape_lucene_value("Children's Tylenol"), "Children's Tylenol");
        assert_eq!(
            escape_lucene_value("sulfamethoxazole/trimethoprim"),
            r"sulfamethoxazole\/trimethoprim"
        );
        assert_eq!(escape_lucene_value(r"co-trimoxazole\"), r"co\-trimoxazole\\");
    }
}
