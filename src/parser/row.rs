/// Splits one line of comma-separated text into trimmed fields.
///
/// Commas inside double quotes do not split, and a doubled quote inside a
/// quoted field yields one literal `"`. Fields cannot span lines.
pub fn parse_csv_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_trimmed() {
        assert_eq!(parse_csv_row("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        assert_eq!(parse_csv_row(r#"1,"a,b",2"#), vec!["1", "a,b", "2"]);
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        assert_eq!(
            parse_csv_row(r#""she said ""hi""",x"#),
            vec![r#"she said "hi""#, "x"]
        );
    }

    #[test]
    fn test_empty_and_trailing_fields() {
        assert_eq!(parse_csv_row(""), vec![""]);
        assert_eq!(parse_csv_row("a,,"), vec!["a", "", ""]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest() {
        assert_eq!(parse_csv_row(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn test_whitespace_inside_quotes_trimmed_after_tokenizing() {
        assert_eq!(parse_csv_row(r#"" padded ",x"#), vec!["padded", "x"]);
    }
}
