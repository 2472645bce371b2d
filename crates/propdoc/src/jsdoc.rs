//! Documentation comment text extraction.

/// Extract the descriptive text of a JSDoc block (without comment delimiters).
///
/// The leading `*` gutter is stripped from every line and block tags
/// (`@param`, `@default`, ...) end the description, so only the prose before
/// the first tag is kept. Lines are joined with `\n` and the result trimmed.
pub fn doc_comment_text(raw: &str) -> String {
    let lines = normalize_lines(raw);
    let description = lines
        .iter()
        .take_while(|line| !line.trim_start().starts_with('@'))
        .map(String::as_str)
        .collect::<Vec<_>>();
    description.join("\n").trim().to_string()
}

fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let line = line.trim_start();
            match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            }
            .trim_end()
            .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_gutter_and_keeps_line_breaks() {
        let raw = "*\n * General component description.\n * Second line.\n ";
        assert_eq!(
            doc_comment_text(raw),
            "General component description.\nSecond line."
        );
    }

    #[test]
    fn stops_at_first_tag() {
        let raw = "* Button label.\n * @default \"OK\"\n * @deprecated use title\n";
        assert_eq!(doc_comment_text(raw), "Button label.");
    }

    #[test]
    fn single_line_comment() {
        assert_eq!(doc_comment_text("* Description of prop \"foo\". "), "Description of prop \"foo\".");
    }

    #[test]
    fn preserves_inner_indentation() {
        let raw = "*\n * Example:\n *   indented\n";
        assert_eq!(doc_comment_text(raw), "Example:\n  indented");
    }

    #[test]
    fn tag_only_comment_is_empty() {
        assert_eq!(doc_comment_text("* @internal "), "");
    }
}
