//! Search predicate construction

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::Book;

/// Term substituted for an empty or missing search, so the route and the
/// predicate always receive a non-empty value.
pub const BLANK_SEARCH_TERM: &str = " ";

/// Map an absent or empty term to [`BLANK_SEARCH_TERM`]; anything else is kept verbatim.
pub fn normalize_search_term(raw: Option<&str>) -> String {
    match raw {
        Some(term) if !term.is_empty() => term.to_string(),
        _ => BLANK_SEARCH_TERM.to_string(),
    }
}

/// Case-sensitive substring match over title, author, genre and year, OR-combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPredicate {
    term: String,
}

impl SearchPredicate {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, book: &Book) -> bool {
        let term = self.term.as_str();
        book.title.contains(term)
            || book.author.contains(term)
            || book.genre.as_deref().is_some_and(|g| g.contains(term))
            || book.year.as_deref().is_some_and(|y| y.contains(term))
    }

    /// `LIKE` pattern for the term, with wildcards escaped (escape char `\`)
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

pub fn build_search_predicate(term: &str) -> SearchPredicate {
    SearchPredicate {
        term: normalize_search_term(Some(term)),
    }
}

/// Which rows a listing covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    Matching(SearchPredicate),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Matching(predicate) => predicate.matches(book),
        }
    }
}

/// Build an absolute path from raw segments, percent-encoding each one.
pub(crate) fn encode_path(segments: &[&str], trailing_slash: bool) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&encode_segment(segment));
    }
    if trailing_slash {
        path.push('/');
    }
    path
}

/// Bytes escaped inside one path segment; non-ASCII is always escaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(segment: &str) -> String {
    // Dot segments would be collapsed by clients normalizing the path
    if segment == "." || segment == ".." {
        return "%2E".repeat(segment.len());
    }
    utf8_percent_encode(segment, SEGMENT).to_string()
}
