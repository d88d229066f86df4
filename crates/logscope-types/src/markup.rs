//! Markup helpers for displaying file contents

/// Escape text for direct inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Tag { quote: Option<char> },
    Comment,
}

/// Remove HTML tags and comments, keeping the text between them
///
/// A `<` followed by whitespace is kept as text. An unterminated tag swallows
/// the rest of the input.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Text;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match state {
            State::Text => {
                if c != '<' {
                    out.push(c);
                    continue;
                }
                match chars.peek() {
                    Some((_, next)) if next.is_whitespace() => out.push(c),
                    None => out.push(c),
                    _ if text[idx..].starts_with("<!--") => {
                        state = State::Comment;
                        // skip "!--"
                        for _ in 0..3 {
                            chars.next();
                        }
                    }
                    _ => state = State::Tag { quote: None },
                }
            }
            State::Tag { quote: Some(q) } => {
                if c == q {
                    state = State::Tag { quote: None };
                }
            }
            State::Tag { quote: None } => match c {
                '"' | '\'' => state = State::Tag { quote: Some(c) },
                '>' => state = State::Text,
                _ => {}
            },
            State::Comment => {
                if c == '>' && text[..idx].ends_with("--") {
                    state = State::Text;
                }
            }
        }
    }

    out
}
