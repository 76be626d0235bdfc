//! Query matcher for the chat demo
//!
//! Picks the single best stored response for free-text input using a
//! priority-ordered substring heuristic:
//!
//! 1. **Exact**: lowercased trigger equals the normalized input.
//! 2. **Partial**: the input contains the trigger, or the trigger contains
//!    the input. Candidates are ranked with [`specificity`] and the first
//!    one wins.
//! 3. **Fallback**: the first record in the `general` category.
//!
//! Ties always resolve to store order.

use crate::content::types::ResponseRecord;
use std::cmp::Ordering;

/// Category used when nothing else matches
pub const FALLBACK_CATEGORY: &str = "general";

/// Lowercase and trim user input
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Select the best response for `query_text`, or `None` when nothing
/// matches and no `general` record exists.
pub fn best_match<'a>(records: &'a [ResponseRecord], query_text: &str) -> Option<&'a ResponseRecord> {
    let input = normalize(query_text);
    let triggers: Vec<String> = records.iter().map(|r| r.query.to_lowercase()).collect();

    if let Some(pos) = triggers.iter().position(|t| *t == input) {
        return Some(&records[pos]);
    }

    let mut partial: Vec<usize> = (0..records.len())
        .filter(|&i| input.contains(triggers[i].as_str()) || triggers[i].contains(input.as_str()))
        .collect();

    if !partial.is_empty() {
        stable_insertion_sort_by(&mut partial, |&a, &b| {
            specificity(&input, &triggers[a], &triggers[b])
        });
        return Some(&records[partial[0]]);
    }

    records.iter().find(|r| r.category == FALLBACK_CATEGORY)
}

/// Partial-match ranking between two lowercased triggers.
///
/// When both triggers occur inside the input the longer one sorts first;
/// when both contain the input the shorter one sorts first. Mixed pairs
/// compare equal, so this is not a total order.
pub fn specificity(input: &str, a: &str, b: &str) -> Ordering {
    if input.contains(a) && input.contains(b) {
        return b.len().cmp(&a.len());
    }
    if a.contains(input) && b.contains(input) {
        return a.len().cmp(&b.len());
    }
    Ordering::Equal
}

/// Stable sort that tolerates comparators which are not a total order.
///
/// `slice::sort_by` may panic on such comparators, so candidates (a handful
/// at most) are ordered by straight insertion: an element moves left only
/// past neighbours it compares strictly less than.
fn stable_insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
