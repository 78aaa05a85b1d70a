//! Filename ordering by embedded sequence number.
//!
//! Image sequences are usually exported as `frame1.png`, `frame2.png`, ...
//! `frame10.png`, which a plain string sort puts in the wrong order. The
//! comparator here pulls the first run of ASCII digits out of each name and
//! compares those numerically:
//!
//! - both names have a number: ascending by value, ties keep input order
//! - only one has a number: the numbered one comes first
//! - neither has a number: lexicographic compare of the full names, ignoring
//!   case except to break ties
//!
//! Numbers are compared as digit strings (leading zeros dropped, then length,
//! then digits), so values of any magnitude order exactly.

use std::cmp::Ordering;

use super::item::{Item, SourceFile};

/// Anything the sequencer can order by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for SourceFile {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Returns the first maximal run of ASCII decimal digits in `name`.
///
/// # Examples
///
/// ```
/// use seqview::domain::numeric_token;
///
/// assert_eq!(numeric_token("shot_007_v2.png"), Some("007"));
/// assert_eq!(numeric_token("cover.png"), None);
/// ```
#[must_use]
pub fn numeric_token(name: &str) -> Option<&str> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Compares two digit strings by numeric value.
fn compare_tokens(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Orders two names the way the viewer sequences files.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match (numeric_token(a), numeric_token(b)) {
        (Some(ta), Some(tb)) => compare_tokens(ta, tb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_text(a, b),
    }
}

/// Case-insensitive compare; on a case-only tie, lowercase sorts first.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Sorts `files` into viewing order.
///
/// The sort is stable, so files whose numbers are equal keep the order they
/// arrived in. Output length always equals input length.
///
/// # Examples
///
/// ```
/// use seqview::domain::order;
///
/// let ordered = order(vec!["b2.png", "a10.png", "c.png"]);
/// assert_eq!(ordered, vec!["b2.png", "a10.png", "c.png"]);
/// ```
#[must_use]
pub fn order<T: Named>(mut files: Vec<T>) -> Vec<T> {
    files.sort_by(|a, b| compare_names(a.name(), b.name()));
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_digit_run() {
        assert_eq!(numeric_token("a10b20"), Some("10"));
        assert_eq!(numeric_token("42"), Some("42"));
        assert_eq!(numeric_token("img-3.jpg"), Some("3"));
        assert_eq!(numeric_token(""), None);
        assert_eq!(numeric_token("no digits"), None);
    }

    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(numeric_token("frame٣.png"), None);
    }

    #[test]
    fn numbered_names_sort_numerically() {
        let ordered = order(vec!["f10.png", "f9.png", "f100.png", "f1.png"]);
        assert_eq!(ordered, vec!["f1.png", "f9.png", "f10.png", "f100.png"]);
    }

    #[test]
    fn numbered_names_come_before_unnumbered() {
        let ordered = order(vec!["zeta.png", "b2.png", "alpha.png", "a10.png"]);
        assert_eq!(ordered, vec!["b2.png", "a10.png", "alpha.png", "zeta.png"]);
    }

    #[test]
    fn unnumbered_names_ignore_case() {
        let ordered = order(vec!["Beta.png", "alpha.png", "Gamma.png", "delta.png"]);
        assert_eq!(ordered, vec!["alpha.png", "Beta.png", "delta.png", "Gamma.png"]);
    }

    #[test]
    fn case_only_differences_put_lowercase_first() {
        let ordered = order(vec!["Cover.png", "cover.png", "COVER.png"]);
        assert_eq!(ordered, vec!["cover.png", "Cover.png", "COVER.png"]);
    }

    #[test]
    fn equal_numbers_keep_input_order() {
        let ordered = order(vec!["b01.png", "a1.png", "c001.png"]);
        assert_eq!(ordered, vec!["b01.png", "a1.png", "c001.png"]);
    }

    #[test]
    fn huge_numbers_compare_exactly() {
        let ordered = order(vec![
            "x900719925474099300.png",
            "x900719925474099299.png",
        ]);
        assert_eq!(
            ordered,
            vec!["x900719925474099299.png", "x900719925474099300.png"]
        );
    }

    #[test]
    fn reordering_is_idempotent() {
        let once = order(vec!["c.png", "7.png", "a3.png", "b.png", "a03.png"]);
        let twice = order(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 5);
    }

    #[test]
    fn orders_source_files() {
        let files = vec![
            SourceFile::new("scan12.tif", vec![1]),
            SourceFile::new("scan2.tif", vec![2]),
        ];
        let ordered = order(files);
        assert_eq!(ordered[0].content, vec![2]);
        assert_eq!(ordered[1].content, vec![1]);
    }
}
