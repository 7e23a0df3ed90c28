/// Summary statistics over a set of scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub max: u8,
    pub min: u8,
    pub average: f64,
    pub median: f64,
}

impl Summary {
    pub fn from_scores(scores: &[u8]) -> Self {
        Self {
            count: scores.len(),
            max: max_score(scores),
            min: min_score(scores),
            average: average(scores),
            median: median(scores),
        }
    }
}

/// Arithmetic mean, or 0 for no scores
pub fn average(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    sum as f64 / scores.len() as f64
}

/// Middle score, or the mean of the two middle scores for an even count.
/// 0 for no scores.
pub fn median(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        f64::from(sorted[mid])
    } else {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    }
}

pub fn max_score(scores: &[u8]) -> u8 {
    scores.iter().copied().max().unwrap_or(0)
}

pub fn min_score(scores: &[u8]) -> u8 {
    scores.iter().copied().min().unwrap_or(0)
}
