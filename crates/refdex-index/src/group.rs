//! Result grouping and ordering.
//!
//! Records whose names share the text before a spaced dash ("Assessment – weekday",
//! "Assessment – night") form one display group. Groups are ordered by their best score,
//! then by where they first appear in the catalog; members are ordered the same way. Group
//! key text never influences order.

use std::collections::HashMap;

use crate::search::{Match, RankedCollection};

/// Separators that end a group key, in lookup order.
const GROUP_SEPARATORS: [&str; 2] = [" \u{2013} ", " - "];

/// Returns the group key of a record name.
///
/// The key is the text before the first spaced en dash, or failing that the first spaced
/// hyphen. Names without either are their own key.
pub fn group_key(name: &str) -> &str {
    GROUP_SEPARATORS
        .iter()
        .find_map(|sep| name.find(sep))
        .map_or(name, |idx| &name[..idx])
}

/// One display group being assembled.
struct Group<'a> {
    /// Highest score among members.
    best_score: f32,
    /// Lowest catalog position among members.
    first_position: usize,
    /// Members in encounter order.
    items: Vec<Match<'a>>,
}

/// Groups, sorts, and caps one collection's matches.
///
/// `total` in the result is the number of matches before truncation to `cap`.
pub fn finalize(matches: Vec<Match<'_>>, cap: usize) -> RankedCollection<'_> {
    let total = matches.len();
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for m in matches {
        let slot = *slots.entry(m.group_key()).or_insert_with(|| {
            groups.push(Group {
                best_score: 0.0,
                first_position: m.position,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.best_score = group.best_score.max(m.score);
        group.first_position = group.first_position.min(m.position);
        group.items.push(m);
    }

    groups.sort_by(|a, b| {
        b.best_score
            .total_cmp(&a.best_score)
            .then(a.first_position.cmp(&b.first_position))
    });

    let mut results = Vec::with_capacity(total.min(cap));
    for mut group in groups {
        group.items.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.position.cmp(&b.position))
        });
        results.extend(group.items);
        if results.len() >= cap {
            break;
        }
    }
    results.truncate(cap);

    RankedCollection { results, total }
}
