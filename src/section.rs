//! Section model produced by the tokenizer.

use std::ops::Deref;

/// One `Name/Version (comment)` unit of a user agent header.
///
/// The version and the comment are both optional. Comment tokens keep the
/// order in which they appeared, since the classifiers give meaning to
/// fixed positions.
///
/// # Examples
///
/// ```
/// use user_agent::tokenize;
///
/// let tokenized = tokenize("Mozilla/5.0 (X11; Linux x86_64)");
/// let section = &tokenized.sections[0];
/// assert_eq!(section.name(), "Mozilla");
/// assert_eq!(section.version(), "5.0");
/// assert_eq!(section.comment_at(1), Some("Linux x86_64"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Section {
    name: String,
    version: String,
    comment: Vec<String>,
}

impl Section {
    /// Creates a section from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, comment: Vec<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            comment,
        }
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product version, empty when the product had no `/`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the comment tokens, empty when no comment followed.
    #[must_use]
    pub fn comment(&self) -> &[String] {
        &self.comment
    }

    /// Returns the comment token at `index`, if present.
    #[must_use]
    pub fn comment_at(&self, index: usize) -> Option<&str> {
        self.comment.get(index).map(String::as_str)
    }

    /// Returns true if a comment followed the product.
    #[must_use]
    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty()
    }
}

/// The ordered sections of one header.
///
/// Dereferences to a slice, so `len`, `get`, `first` and `last` are
/// available directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections(Vec<Section>);

impl Sections {
    /// Returns the name of the section at `index`, if present.
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(Section::name)
    }

    /// Returns the version of the section at `index`, if present.
    #[must_use]
    pub fn version_at(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(Section::version)
    }

    /// Consumes the sequence, returning the sections.
    #[must_use]
    pub fn into_inner(self) -> Vec<Section> {
        self.0
    }
}

impl From<Vec<Section>> for Sections {
    fn from(sections: Vec<Section>) -> Self {
        Self(sections)
    }
}

impl Deref for Sections {
    type Target = [Section];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
