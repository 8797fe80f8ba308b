use std::collections::HashMap;
use std::hash::Hash;

use crate::analyzers::types::Popular;

/// Counts occurrences of each distinct value.
///
/// The result is ordered by descending count; values with equal counts keep
/// the order in which they were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value).copied() {
            Some(idx) => counts[idx].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, first-seen on ties. `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<Popular<T>>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values)
        .into_iter()
        .next()
        .map(|(value, count)| Popular { value, count })
}

/// Computes the arithmetic mean. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value, or the average of the two middle values for even lengths.
/// Returns `None` for empty input.
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
