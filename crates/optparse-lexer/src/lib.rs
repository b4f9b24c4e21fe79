//! Argument tokenizer for optparse
//!
//! Splits a raw argument vector into a flat stream of [`Token`]s.  Every `-` becomes a
//! [`Token::Dash`], so `--long` shows up as two dashes followed by a name while `-s` is a single
//! dash followed by a name.  `=` and spaces separate tokens without producing one, which makes
//! `--name=value` and `--name value` tokenize identically.
//!
//! ## Example
//!
//! ```rust
//! use optparse_lexer::Lexer;
//! use optparse_lexer::Token;
//!
//! let raw = ["bin", "--reply=42", "-v"];
//! let tokens = Lexer::new(&raw).collect::<Vec<_>>();
//! assert_eq!(
//!     tokens,
//!     [
//!         Token::name("bin"),
//!         Token::Dash,
//!         Token::Dash,
//!         Token::name("reply"),
//!         Token::name("42"),
//!         Token::Dash,
//!         Token::name("v"),
//!     ]
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

use std::borrow::Cow;

/// Lexical unit of an argument vector
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A single `-`
    Dash,
    /// A run of characters up to the next delimiter, with escapes resolved
    ///
    /// May be empty, e.g. for a trailing `\`.
    Name(Cow<'a, str>),
}

impl<'a> Token<'a> {
    /// Shorthand for a borrowed [`Token::Name`]
    pub fn name(text: &'a str) -> Self {
        Self::Name(Cow::Borrowed(text))
    }

    /// The text of a [`Token::Name`]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Dash => None,
            Self::Name(text) => Some(text.as_ref()),
        }
    }

    /// Whether this is a [`Token::Dash`]
    pub fn is_dash(&self) -> bool {
        matches!(self, Self::Dash)
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dash => "-".fmt(f),
            Self::Name(text) => text.fmt(f),
        }
    }
}

/// Tokenize an argument vector
///
/// Each argument is fully consumed before moving to the next.  Argument boundaries are not
/// marked in the output.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    raw: Vec<&'a str>,
    current: usize,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    /// Tokenize `raw`, including the program name in position 0
    pub fn new<S: AsRef<str>>(raw: &'a [S]) -> Self {
        Self {
            raw: raw.iter().map(|s| s.as_ref()).collect(),
            current: 0,
            cursor: 0,
        }
    }

    fn advance_arg(&mut self) {
        self.current += 1;
        self.cursor = 0;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let arg = *self.raw.get(self.current)?;
            let rest = &arg[self.cursor..];
            match rest.chars().next() {
                // `\0` terminates an argument like a C string would
                None | Some('\0') => {
                    self.advance_arg();
                }
                Some(c @ ('=' | ' ')) => {
                    self.cursor += c.len_utf8();
                }
                Some('-') => {
                    self.cursor += 1;
                    return Some(Token::Dash);
                }
                Some(_) => {
                    let (name, consumed) = scan_name(rest);
                    self.cursor += consumed;
                    return Some(Token::Name(name));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Collect a name from the start of `text`
///
/// Returns the unescaped name and the number of bytes consumed.  The terminating delimiter is
/// not consumed.
fn scan_name(text: &str) -> (Cow<'_, str>, usize) {
    let mut unescaped: Option<String> = None;
    let mut end = text.len();
    let mut chars = text.char_indices();
    while let Some((pos, c)) = chars.next() {
        match c {
            '\0' | ' ' | '=' => {
                end = pos;
                break;
            }
            '\\' => {
                let buffer = unescaped.get_or_insert_with(|| text[..pos].to_owned());
                match chars.next() {
                    Some((_, escaped)) if escaped != '\0' => buffer.push(escaped),
                    Some((nul, _)) => {
                        end = nul;
                        break;
                    }
                    None => break,
                }
            }
            _ => {
                if let Some(buffer) = unescaped.as_mut() {
                    buffer.push(c);
                }
            }
        }
    }

    let name = match unescaped {
        Some(buffer) => Cow::Owned(buffer),
        None => Cow::Borrowed(&text[..end]),
    };
    (name, end)
}
