//! Splits a raw header into sections.
//!
//! The scanner follows the informal grammar used by browsers:
//!
//! ```text
//! Header      := Section*
//! Section     := Product (' ' '(' CommentList ')')?
//! Product     := Name ('/' Version)?
//! CommentList := Token ('; ' Token)*
//! ```
//!
//! Comments may contain balanced parentheses of their own, e.g.
//! `(KHTML, like Gecko)` nested in a longer comment.

use std::borrow::Cow;

use crate::constants::{COMMENT_SEPARATOR, MOBILE_SECTION};
use crate::section::{Section, Sections};

/// Output of [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Sections in order of appearance.
    pub sections: Sections,
    /// True when a section named `Mobile` was seen.
    pub mobile: bool,
}

/// Tokenizes a user agent header.
///
/// Empty and whitespace-only input produces no sections.
///
/// # Examples
///
/// ```
/// use user_agent::tokenize;
///
/// let tokenized = tokenize("Mozilla/5.0 (iPhone; CPU iPhone OS 7_0 like Mac OS X) Mobile/11A465");
/// assert_eq!(tokenized.sections.len(), 2);
/// assert!(tokenized.mobile);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Tokenized {
    if input.trim().is_empty() {
        return Tokenized::default();
    }

    let mut mobile = false;
    let sections: Vec<Section> = Tokenizer::new(input)
        .inspect(|section| mobile |= section.name() == MOBILE_SECTION)
        .collect();

    tracing::trace!(sections = sections.len(), mobile, "tokenized user agent");

    Tokenized {
        sections: Sections::from(sections),
        mobile,
    }
}

/// Cursor over the bytes of a header, yielding one [`Section`] at a time.
///
/// Delimiters are all ASCII. Bytes between them are converted lossily so a
/// cursor step that lands inside a multi-byte character cannot fail.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the cursor position in bytes.
    ///
    /// After the input is exhausted the cursor may sit past its end.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads up to `delimiter`, leaving the cursor one past it.
    ///
    /// With `nested`, each `(` opens a group that the next delimiter closes
    /// instead of ending the read. If the delimiter never shows up the rest
    /// of the input is returned and the cursor lands one past the end.
    pub(crate) fn read_until(&mut self, delimiter: u8, nested: bool) -> &'a [u8] {
        let input = self.input;
        let start = self.pos.min(input.len());
        let mut depth = 0usize;

        for (offset, &byte) in input[start..].iter().enumerate() {
            if byte == delimiter {
                if depth == 0 {
                    self.pos = start + offset + 1;
                    return &input[start..start + offset];
                }
                depth -= 1;
            } else if nested && byte == b'(' {
                depth += 1;
            }
        }

        self.pos = input.len() + 1;
        &input[start..]
    }

    fn read_section(&mut self) -> Section {
        let product = self.read_until(b' ', false);
        let (name, version) = split_product(product);

        let mut comment = Vec::new();
        if self.input.get(self.pos) == Some(&b'(') {
            self.pos += 1;
            let body = String::from_utf8_lossy(self.read_until(b')', true));
            comment = body
                .split(COMMENT_SEPARATOR)
                .map(str::to_string)
                .collect();
            // separator that follows the closing parenthesis
            self.pos += 1;
        }

        Section::new(name, version, comment)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Section;

    fn next(&mut self) -> Option<Self::Item> {
        (self.pos < self.input.len()).then(|| self.read_section())
    }
}

fn split_product(product: &[u8]) -> (Cow<'_, str>, Cow<'_, str>) {
    match product.iter().position(|&b| b == b'/') {
        Some(slash) => (
            String::from_utf8_lossy(&product[..slash]),
            String::from_utf8_lossy(&product[slash + 1..]),
        ),
        None => (String::from_utf8_lossy(product), Cow::Borrowed("")),
    }
}
