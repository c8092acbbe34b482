use std::collections::HashMap;
use std::hash::Hash;

/// Counts each distinct value, keeping values in first-encountered order.
fn tally<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// Most frequent value. Ties go to the value seen first; `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Frequency of each distinct value, most frequent first. Equal counts keep
/// first-encountered order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = tally(values);
    // stable sort keeps encounter order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
