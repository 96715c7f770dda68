use std::collections::HashMap;
use std::hash::Hash;

use log::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Occurrence count of every distinct symbol of an input.
///
/// Symbols that never occur are never inserted, so every count produced by
/// [`count`] is at least 1. Maps assembled by hand are checked again when a
/// tree is built from them.
pub type FrequencyMap<S> = HashMap<S, usize>;

/// Counts how many times each symbol occurs in `symbols`.
///
/// # Examples
///
/// ```
/// let freq = huffman_tree::count(vec![3, 1, 3, 3]);
/// assert_eq!(freq.get(&3), Some(&3));
/// assert_eq!(freq.get(&1), Some(&1));
/// assert_eq!(freq.len(), 2);
/// ```
pub fn count<S, I>(symbols: I) -> FrequencyMap<S>
where
    S: Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut freq = FrequencyMap::new();
    for s in symbols {
        *(freq.entry(s).or_insert(0)) += 1;
    }
    trace!("counted {} distinct symbols", freq.len());
    freq
}

/// Counts the characters (Unicode scalar values) of `text`.
///
/// # Examples
///
/// ```
/// let freq = huffman_tree::count_chars("aaabb");
/// assert_eq!(freq.get(&'a'), Some(&3));
/// assert_eq!(freq.get(&'b'), Some(&2));
/// ```
pub fn count_chars(text: &str) -> FrequencyMap<char> {
    count(text.chars())
}

/// Counts the [extended grapheme clusters](http://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundaries)
/// of `text`, so that a base character and its combining marks are a single
/// symbol.
///
/// ```
/// let freq = huffman_tree::count_graphemes("ضَضَ");
/// assert_eq!(freq.get("ضَ"), Some(&2));
/// assert_eq!(freq.len(), 1);
/// ```
pub fn count_graphemes(text: &str) -> FrequencyMap<&str> {
    count(UnicodeSegmentation::graphemes(text, true))
}

/// Sum of all counts, which is also the weight of the root built from `freq`.
///
/// Returns `None` if the sum does not fit in a `usize`.
pub fn total<S>(freq: &FrequencyMap<S>) -> Option<usize> {
    freq.values().try_fold(0usize, |acc, &count| acc.checked_add(count))
}
