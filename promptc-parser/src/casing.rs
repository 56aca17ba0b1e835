//! Identifier case conversion.
//!
//! Raw title, file-name, and variable bytes are mapped onto target-language
//! identifier casings. Words split on ASCII non-alphanumerics and on
//! lower-to-upper boundaries; bytes outside `[A-Za-z0-9]` never reach the
//! output.

/// Target identifier casing for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `helloUser`
    Camel,
    /// `HelloUser`
    Pascal,
    /// `hello_user`
    Snake,
}

/// Convert raw identifier bytes to the given case style.
pub fn convert(raw: &[u8], style: CaseStyle) -> String {
    let words = split_words(raw);
    match style {
        CaseStyle::Camel => {
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(word);
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
        CaseStyle::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        CaseStyle::Snake => words.join("_"),
    }
}

/// Split raw bytes into lowercase words.
fn split_words(raw: &[u8]) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_was_lower = false;
    for &b in raw {
        let c = b as char;
        if c.is_ascii_alphanumeric() {
            if prev_was_lower && c.is_ascii_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c.to_ascii_lowercase());
            prev_was_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_was_lower = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_from_spaced_words() {
        assert_eq!(convert(b"hello user", CaseStyle::Camel), "helloUser");
    }

    #[test]
    fn camel_from_snake_file_name() {
        assert_eq!(
            convert(b"no_vars_no_title", CaseStyle::Camel),
            "noVarsNoTitle"
        );
    }

    #[test]
    fn camel_keeps_trailing_digits() {
        assert_eq!(convert(b"hello1", CaseStyle::Camel), "hello1");
    }

    #[test]
    fn camel_splits_on_case_boundary() {
        assert_eq!(convert(b"userName", CaseStyle::Camel), "userName");
        assert_eq!(convert(b"userName", CaseStyle::Snake), "user_name");
    }

    #[test]
    fn pascal_capitalizes_every_word() {
        assert_eq!(convert(b"hello user", CaseStyle::Pascal), "HelloUser");
    }

    #[test]
    fn snake_joins_lowercase_words() {
        assert_eq!(convert(b"Hello  User", CaseStyle::Snake), "hello_user");
    }

    #[test]
    fn separator_runs_collapse() {
        assert_eq!(convert(b"a--b__c", CaseStyle::Camel), "aBC");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(convert(b"", CaseStyle::Camel), "");
    }
}
