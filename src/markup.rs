/// Remove markup tags from translation text.
///
/// A tag starts at `<` followed by at least one character other than `>`, and
/// runs through the next `>` or to the end of the input when unterminated. A
/// lone `<` at the end of the text or directly before `>` is kept as-is.
pub fn strip_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(character) = chars.next() {
        if character != '<' {
            output.push(character);
            continue;
        }

        match chars.peek() {
            Some('>') | None => output.push(character),
            Some(_) => {
                for inner in chars.by_ref() {
                    if inner == '>' {
                        break;
                    }
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_paired_and_self_closing_tags() {
        assert_eq!(strip_markup("<p>O you who believe...</p>"), "O you who believe...");
        assert_eq!(strip_markup("line<br/>break"), "linebreak");
        assert_eq!(
            strip_markup(r#"patient<sup foot_note="77">1</sup> ones"#),
            "patient1 ones"
        );
    }

    #[test]
    fn unterminated_tag_runs_to_end() {
        assert_eq!(strip_markup("keep this <span class"), "keep this ");
        assert_eq!(strip_markup("a < b"), "a ");
    }

    #[test]
    fn bare_angle_brackets_survive() {
        assert_eq!(strip_markup("<>"), "<>");
        assert_eq!(strip_markup("trailing <"), "trailing <");
        assert_eq!(strip_markup("x > y"), "x > y");
    }

    #[test]
    fn plain_and_multibyte_text_is_untouched() {
        assert_eq!(strip_markup("Allah is with the patient"), "Allah is with the patient");
        assert_eq!(strip_markup("<b>ٱلصَّٰبِرِينَ</b>"), "ٱلصَّٰبِرِينَ");
        assert_eq!(strip_markup(""), "");
    }
}
