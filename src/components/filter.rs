//! Ranked text matching shared by the combobox, command palette and emoji
//! picker.

use std::cmp::Reverse;

use unicode_segmentation::UnicodeSegmentation;

/// How well a query matched. Later variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchRank {
    /// Only one of the item's keywords matched.
    Keyword,
    Substring,
    /// The query starts a word inside the label.
    WordStart,
    Prefix,
    Exact,
}

/// Something that can be matched against a search query.
pub trait Searchable {
    fn label(&self) -> &str;

    fn keywords(&self) -> &[String] {
        &[]
    }
}

impl Searchable for &str {
    fn label(&self) -> &str {
        self
    }
}

impl Searchable for String {
    fn label(&self) -> &str {
        self
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Ranks how `label` (or one of `keywords`) matches `query`, ignoring case.
/// An empty query is a prefix of everything.
pub fn rank_match(query: &str, label: &str, keywords: &[String]) -> Option<MatchRank> {
    let query = normalize(query);
    let label = normalize(label);

    if label == query {
        return Some(MatchRank::Exact);
    }

    if label.starts_with(&query) {
        return Some(MatchRank::Prefix);
    }

    if label
        .split_word_bound_indices()
        .any(|(index, _)| index > 0 && label[index..].starts_with(&query))
    {
        return Some(MatchRank::WordStart);
    }

    if label.contains(&query) {
        return Some(MatchRank::Substring);
    }

    keywords
        .iter()
        .any(|keyword| normalize(keyword).contains(&query))
        .then_some(MatchRank::Keyword)
}

/// A match together with the position of the item in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub rank: MatchRank,
}

/// Returns the items matching `query`, best matches first. Items of equal
/// rank keep their input order.
pub fn filter_ranked<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<Ranked<'a, T>> {
    let mut matches: Vec<Ranked<'a, T>> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            rank_match(query, item.label(), item.keywords()).map(|rank| Ranked { item, index, rank })
        })
        .collect();

    matches.sort_by_key(|ranked| (Reverse(ranked.rank), ranked.index));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        label: &'static str,
        keywords: Vec<String>,
    }

    impl Searchable for Item {
        fn label(&self) -> &str {
            self.label
        }

        fn keywords(&self) -> &[String] {
            &self.keywords
        }
    }

    #[test]
    fn test_rank_order() {
        let none: &[String] = &[];

        assert_eq!(rank_match("open", "Open", none), Some(MatchRank::Exact));
        assert_eq!(rank_match("op", "Open file", none), Some(MatchRank::Prefix));
        assert_eq!(rank_match("fi", "Open file", none), Some(MatchRank::WordStart));
        assert_eq!(rank_match("pen", "Open file", none), Some(MatchRank::Substring));
        assert_eq!(
            rank_match("load", "Open file", &["load".to_string()]),
            Some(MatchRank::Keyword)
        );
        assert_eq!(rank_match("zzz", "Open file", none), None);

        assert!(MatchRank::Exact > MatchRank::Prefix);
        assert!(MatchRank::WordStart > MatchRank::Substring);
        assert!(MatchRank::Substring > MatchRank::Keyword);
    }

    #[test]
    fn test_filter_ranked_sorts_stably() {
        let items = [
            Item {
                label: "Reopen tab",
                keywords: vec![],
            },
            Item {
                label: "Settings",
                keywords: vec!["open preferences".to_string()],
            },
            Item {
                label: "Open tab",
                keywords: vec![],
            },
            Item {
                label: "Open window",
                keywords: vec![],
            },
        ];

        let labels: Vec<&str> = filter_ranked(&items, "open")
            .iter()
            .map(|ranked| ranked.item.label)
            .collect();

        assert_eq!(labels, ["Open tab", "Open window", "Reopen tab", "Settings"]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let items = ["b", "a", "c"];
        let ranked = filter_ranked(&items, "  ");

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.iter().map(|r| r.index).collect::<Vec<_>>(), [0, 1, 2]);
    }
}
