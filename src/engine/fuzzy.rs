use std::collections::HashMap;

/// Multiset of lowercase character bigrams.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigramBag {
    counts: HashMap<[char; 2], usize>,
    total: usize,
}

impl BigramBag {
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
        let mut counts = HashMap::new();
        for window in chars.windows(2) {
            *counts.entry([window[0], window[1]]).or_insert(0) += 1;
        }
        let total = chars.len().saturating_sub(1);
        Self { counts, total }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn shared(&self, other: &BigramBag) -> usize {
        self.counts
            .iter()
            .map(|(gram, &count)| count.min(other.counts.get(gram).copied().unwrap_or(0)))
            .sum()
    }

    /// Jaccard index over the two multisets: |A ∩ B| / |A ∪ B|.
    /// Two bags without any bigrams score 0.
    pub fn similarity(&self, other: &BigramBag) -> f64 {
        let shared = self.shared(other);
        let union = self.total + other.total - shared;
        if union == 0 {
            return 0.0;
        }
        shared as f64 / union as f64
    }
}

pub fn similarity(a: &str, b: &str) -> f64 {
    BigramBag::from_text(a).similarity(&BigramBag::from_text(b))
}
