use tracing::debug;

use crate::engine::fuzzy::BigramBag;

/// Tags understood by the Codeforces problemset API. `combine-tags-by-or`
/// is a query modifier rather than a topic, but the API accepts it in the
/// same list so it stays resolvable.
pub const CODEFORCES_TAGS: &[&str] = &[
    "combine-tags-by-or",
    "2-sat",
    "binary search",
    "bitmasks",
    "brute force",
    "chinese remainder theorem",
    "combinatorics",
    "constructive algorithms",
    "data structures",
    "dfs and similar",
    "divide and conquer",
    "dp",
    "dsu",
    "expression parsing",
    "fft",
    "flows",
    "games",
    "geometry",
    "graph matchings",
    "graphs",
    "greedy",
    "hashing",
    "implementation",
    "interactive",
    "math",
    "matrices",
    "meet-in-the-middle",
    "number theory",
    "probabilities",
    "schedules",
    "shortest paths",
    "sortings",
    "string suffix structures",
    "strings",
    "ternary search",
    "trees",
    "two pointers",
];

/// Closed, ordered set of tags. Order matters: it decides fuzzy ties.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    tags: Vec<&'static str>,
    bags: Vec<BigramBag>,
}

impl Vocabulary {
    pub fn new(tags: &[&'static str]) -> Self {
        Self {
            tags: tags.to_vec(),
            bags: tags.iter().map(|t| BigramBag::from_text(t)).collect(),
        }
    }

    pub fn codeforces() -> Self {
        Self::new(CODEFORCES_TAGS)
    }

    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::codeforces()
    }
}

/// Topic -> tag pairs in the order the topics were first given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagResolution {
    entries: Vec<(String, &'static str)>,
}

impl TagResolution {
    pub fn get(&self, topic: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(t, _)| t == topic)
            .map(|&(_, tag)| tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(t, tag)| (t.as_str(), *tag))
    }

    /// Distinct resolved tags, first occurrence first.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for &(_, tag) in &self.entries {
            if !out.contains(&tag) {
                out.push(tag);
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct TagResolver {
    vocabulary: Vocabulary,
}

impl TagResolver {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn resolve<S: AsRef<str>>(&self, topics: &[S]) -> TagResolution {
        let mut resolution = TagResolution::default();
        for topic in topics {
            let topic = topic.as_ref();
            if resolution.get(topic).is_some() {
                continue;
            }
            if let Some(tag) = self.resolve_one(topic) {
                resolution.entries.push((topic.to_string(), tag));
            }
        }
        resolution
    }

    /// Exact case-insensitive match wins; otherwise the tag with the highest
    /// bigram similarity. Equal scores keep the tag listed first in the
    /// vocabulary. Only an empty vocabulary yields `None`.
    pub fn resolve_one(&self, topic: &str) -> Option<&'static str> {
        let folded = topic.to_lowercase();
        if let Some(&tag) = self
            .vocabulary
            .tags
            .iter()
            .find(|tag| tag.to_lowercase() == folded)
        {
            debug!(topic, tag, "exact tag match");
            return Some(tag);
        }

        let bag = BigramBag::from_text(topic);
        let mut best: Option<(&'static str, f64)> = None;
        for (&tag, tag_bag) in self.vocabulary.tags.iter().zip(&self.vocabulary.bags) {
            let score = bag.similarity(tag_bag);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((tag, score)),
            }
        }
        if let Some((tag, score)) = best {
            debug!(topic, tag, score, "fuzzy tag match");
        }
        best.map(|(tag, _)| tag)
    }
}

impl Default for TagResolver {
    fn default() -> Self {
        Self::new(Vocabulary::codeforces())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(Vocabulary::codeforces().len(), 37);
    }

    #[test]
    fn test_every_tag_resolves_to_itself_in_any_case() {
        let resolver = TagResolver::default();
        for &tag in CODEFORCES_TAGS {
            assert_eq!(resolver.resolve_one(tag), Some(tag));
            assert_eq!(resolver.resolve_one(&tag.to_uppercase()), Some(tag));
        }
    }

    #[test]
    fn test_typo_resolves_to_closest_tag() {
        let resolver = TagResolver::default();
        assert_eq!(resolver.resolve_one("grpahs"), Some("graphs"));
        assert_eq!(resolver.resolve_one("binary serch"), Some("binary search"));
        assert_eq!(resolver.resolve_one("number theroy"), Some("number theory"));
    }

    #[test]
    fn test_resolution_never_leaves_vocabulary() {
        let resolver = TagResolver::default();
        let vocab = resolver.vocabulary();
        for topic in ["", "x", "???", "zzzzzz", "dynamic programming", "日本語", "  trees  "] {
            let tag = resolver.resolve_one(topic).unwrap();
            assert!(vocab.contains(tag), "{topic:?} resolved to {tag:?}");
        }
    }

    #[test]
    fn test_ties_keep_first_vocabulary_entry() {
        let resolver = TagResolver::new(Vocabulary::new(&["alpha", "beta", "gamma"]));
        // no bigrams at all: every score is 0
        assert_eq!(resolver.resolve_one("q"), Some("alpha"));

        let resolver = TagResolver::new(Vocabulary::new(&["abxx", "abyy"]));
        assert_eq!(resolver.resolve_one("ab"), Some("abxx"));
        let resolver = TagResolver::new(Vocabulary::new(&["abyy", "abxx"]));
        assert_eq!(resolver.resolve_one("ab"), Some("abyy"));
    }

    #[test]
    fn test_empty_vocabulary_resolves_nothing() {
        let resolver = TagResolver::new(Vocabulary::new(&[]));
        assert_eq!(resolver.resolve_one("dp"), None);
        assert!(resolver.resolve(&["dp"]).is_empty());
    }

    #[test]
    fn test_resolve_empty_topics() {
        let resolution = TagResolver::default().resolve::<&str>(&[]);
        assert!(resolution.is_empty());
        assert!(resolution.tags().is_empty());
    }

    #[test]
    fn test_resolve_keeps_input_order_and_dedupes() {
        let resolution = TagResolver::default().resolve(&["dp", "grpahs", "DP", "dp", "graphs"]);
        let pairs: Vec<(&str, &str)> = resolution.iter().collect();
        assert_eq!(
            pairs,
            vec![("dp", "dp"), ("grpahs", "graphs"), ("DP", "dp"), ("graphs", "graphs")]
        );
        assert_eq!(resolution.tags(), vec!["dp", "graphs"]);
        assert_eq!(resolution.get("grpahs"), Some("graphs"));
        assert_eq!(resolution.get("missing"), None);
    }

    #[test]
    fn test_custom_vocabulary_is_used() {
        let resolver = TagResolver::new(Vocabulary::new(&["red", "green", "blue"]));
        assert_eq!(resolver.resolve_one("gren"), Some("green"));
        assert_eq!(resolver.resolve_one("BLUE"), Some("blue"));
    }
}
