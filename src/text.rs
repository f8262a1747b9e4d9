//! String transform helpers.

/// Lowercases the leading character of a pascal-cased identifier. Input
/// that does not start with an uppercase letter is returned unchanged.
pub fn to_camel_case(source: &str) -> String {
    let mut chars = source.chars();

    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => source.to_string(),
    }
}

/// Uppercases the first letter of every whitespace-separated word. The
/// rest of each word is left as it is.
pub fn to_title_case(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut at_word_start = true;

    for ch in source.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Cuts the text to at most `max_chars` characters without splitting a
/// word, appending `suffix` in place of the cut. When the cut lands in
/// the middle of a word, the text backtracks to the last space before it.
pub fn cut_to(text: &str, max_chars: usize, suffix: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_chars {
        return text.to_string();
    }

    let mut cut: Vec<char> = chars[..max_chars].to_vec();

    if chars[max_chars] != ' ' {
        if let Some(last_space) = cut.iter().rposition(|&ch| ch == ' ') {
            cut.truncate(last_space);
        }
    }

    let mut out: String = cut.into_iter().collect();
    out.push_str(suffix);
    out
}

/// Converts a camel- or pascal-cased identifier to readable text:
/// "HelloWorld" becomes "Hello World", "ABCWidget" becomes "ABC Widget",
/// "Catch22" becomes "Catch 22".
pub fn to_friendly(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for (at, &ch) in chars.iter().enumerate() {
        out.push(ch);
        if breaks_word(&chars, at) {
            out.push(' ');
        }
    }

    out
}

fn breaks_word(chars: &[char], at: usize) -> bool {
    let ch = chars[at];
    let next = match chars.get(at + 1) {
        Some(&next) => next,
        None => return false,
    };
    let after_lower = chars.get(at + 2).is_some_and(|ch| ch.is_lowercase());

    (ch.is_lowercase() && (next.is_uppercase() || next.is_ascii_digit()))
        || (ch.is_uppercase() && ((next.is_uppercase() && after_lower) || next.is_ascii_digit()))
        || (ch.is_ascii_digit() && next.is_uppercase() && after_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_lowercases_the_first_letter() {
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("hello"), "hello");
        assert_eq!(to_camel_case("A"), "a");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn title_case_uppercases_each_word() {
        assert_eq!(to_title_case("war and peace"), "War And Peace");
        assert_eq!(to_title_case("already Title"), "Already Title");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn cut_to_leaves_short_text_alone() {
        assert_eq!(cut_to("hello world", 20, "..."), "hello world");
        assert_eq!(cut_to("", 5, "..."), "");
    }

    #[test]
    fn cut_to_does_not_split_words() {
        assert_eq!(cut_to("hello world", 7, "..."), "hello...");
        assert_eq!(cut_to("hello world", 6, "..."), "hello...");
    }

    #[test]
    fn cut_to_keeps_a_cut_landing_on_a_space() {
        assert_eq!(cut_to("hello world", 5, "..."), "hello...");
    }

    #[test]
    fn friendly_splits_identifier_words() {
        assert_eq!(to_friendly("HelloWorld"), "Hello World");
        assert_eq!(to_friendly("ABCWidget"), "ABC Widget");
        assert_eq!(to_friendly("Catch22Rule"), "Catch 22 Rule");
        assert_eq!(to_friendly("HTML5"), "HTML 5");
        assert_eq!(to_friendly("plain text"), "plain text");
    }
}
