use std::fmt;

use moldable_lang_printer::tokens::KEYWORDS;
use moldable_lang_printer::{Alloc, Builder, DocAllocator, Print, PrintCfg};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Ident::new(name)
    }
}

impl Print for Ident {
    fn print<'a>(&'a self, _cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        alloc.text(self.name.as_str())
    }
}

/// Whether `s` is a Go identifier: a letter or underscore followed by letters, digits and
/// underscores, and not a keyword.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (is_letter(first) || first == '_')
        && chars.all(|c| is_letter(c) || is_digit(c) || c == '_')
        && !KEYWORDS.contains(&s)
}

/// Letters as Go defines them. Letter numbers such as `Ⅻ` are alphabetic but not letters.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Decimal digits. Superscripts and other numeric characters do not count.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("mocks"));
        assert!(is_identifier("_internal"));
        assert!(is_identifier("v2"));
        assert!(is_identifier("πkg"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("my-mocks"));
        assert!(!is_identifier("interface"));
        assert!(!is_identifier("v²"));
        assert!(!is_identifier("Ⅻ"));
    }
}
