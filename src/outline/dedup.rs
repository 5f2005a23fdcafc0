//! Outline de-duplication.

use super::Heading;
use crate::layout::HeadingLevel;
use std::collections::HashSet;

/// Drop repeated headings, keeping first occurrences in their original order.
///
/// Two headings are the same when they share level, page and lower-cased
/// text. Repeats on different pages are kept. Applying this twice gives the
/// same result as applying it once.
///
/// # Examples
///
/// ```
/// use pdf_outliner::layout::HeadingLevel;
/// use pdf_outliner::outline::{dedup_headings, Heading};
///
/// let headings = vec![
///     Heading::new(HeadingLevel::H2, "scope", 3),
///     Heading::new(HeadingLevel::H2, "Scope", 3),
///     Heading::new(HeadingLevel::H2, "scope", 4),
/// ];
/// assert_eq!(dedup_headings(headings).len(), 2);
/// ```
pub fn dedup_headings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut seen: HashSet<(HeadingLevel, usize, String)> = HashSet::with_capacity(headings.len());
    headings
        .into_iter()
        .filter(|h| seen.insert((h.level, h.page, h.text.to_lowercase())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let headings = vec![
            Heading::new(HeadingLevel::H2, "scope", 3),
            Heading::new(HeadingLevel::H2, "Scope", 3),
            Heading::new(HeadingLevel::H2, "scope", 4),
        ];
        let cleaned = dedup_headings(headings);
        assert_eq!(
            cleaned,
            vec![
                Heading::new(HeadingLevel::H2, "scope", 3),
                Heading::new(HeadingLevel::H2, "scope", 4),
            ]
        );
    }

    #[test]
    fn test_level_is_part_of_key() {
        let headings = vec![
            Heading::new(HeadingLevel::H1, "Overview", 1),
            Heading::new(HeadingLevel::H2, "Overview", 1),
        ];
        assert_eq!(dedup_headings(headings).len(), 2);
    }

    #[test]
    fn test_order_is_not_resorted() {
        let headings = vec![
            Heading::new(HeadingLevel::H3, "Zeta", 2),
            Heading::new(HeadingLevel::H1, "Alpha", 1),
            Heading::new(HeadingLevel::H3, "zeta", 2),
        ];
        let cleaned = dedup_headings(headings);
        assert_eq!(cleaned[0].text, "Zeta");
        assert_eq!(cleaned[1].text, "Alpha");
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let headings = vec![
            Heading::new(HeadingLevel::H1, "Intro", 1),
            Heading::new(HeadingLevel::H1, "INTRO", 1),
            Heading::new(HeadingLevel::H2, "Scope", 2),
        ];
        let once = dedup_headings(headings);
        let twice = dedup_headings(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty() {
        assert!(dedup_headings(Vec::new()).is_empty());
    }
}
