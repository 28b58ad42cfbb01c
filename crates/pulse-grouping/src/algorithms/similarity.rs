//! Lightweight question similarity and existing-group compatibility.
//!
//! Pairwise signals with weights:
//! - Same category: 0.3
//! - Same topic: 0.2
//! - Keyword Jaccard: 0.3
//! - Word overlap (tokens longer than 3 chars): 0.2
//!
//! Existing-group blend: topic 0.4, category 0.3, duration ratio 0.3.

use std::collections::BTreeSet;

use pulse_core::models::{ExistingGroup, Question};

const W_CATEGORY: f64 = 0.3;
const W_TOPIC: f64 = 0.2;
const W_KEYWORDS: f64 = 0.3;
const W_WORDS: f64 = 0.2;

const W_GROUP_TOPIC: f64 = 0.4;
const W_GROUP_CATEGORY: f64 = 0.3;
const W_GROUP_DURATION: f64 = 0.3;

/// Tokens of this many characters or fewer are ignored by word overlap.
const MAX_IGNORED_WORD_CHARS: usize = 3;

/// Similarity between two questions, in [0, 1].
pub fn question_similarity(a: &Question, b: &Question) -> f64 {
    let mut score = 0.0;
    if same_category(a.category.as_deref(), b.category.as_deref()) {
        score += W_CATEGORY;
    }
    if a.effective_topic() == b.effective_topic() {
        score += W_TOPIC;
    }
    score += W_KEYWORDS * keyword_jaccard(&a.keywords, &b.keywords);
    score += W_WORDS * word_overlap(&a.text, &b.text);
    score.clamp(0.0, 1.0)
}

/// Jaccard overlap of two keyword lists, case-insensitive. 0.0 when both are empty.
pub fn keyword_jaccard(a: &[String], b: &[String]) -> f64 {
    let a: BTreeSet<String> = a.iter().map(|k| k.trim().to_lowercase()).collect();
    let b: BTreeSet<String> = b.iter().map(|k| k.trim().to_lowercase()).collect();
    jaccard(&a, &b)
}

/// Overlap of the significant words of two texts, over their union.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    jaccard(&significant_words(a), &significant_words(b))
}

fn significant_words(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| w.chars().count() > MAX_IGNORED_WORD_CHARS)
        .collect()
}

fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

fn same_category(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

/// Ratio of the smaller to the larger duration. Two zero durations are identical.
pub fn duration_ratio(a: f64, b: f64) -> f64 {
    let (a, b) = (a.max(0.0), b.max(0.0));
    let hi = a.max(b);
    if hi <= f64::EPSILON {
        1.0
    } else {
        a.min(b) / hi
    }
}

/// Compatibility of a candidate with a persisted group, in [0, 1].
pub fn existing_group_compatibility(
    question: &Question,
    duration: f64,
    group: &ExistingGroup,
) -> f64 {
    let mut score = 0.0;
    if question.effective_topic() == group.topic_category {
        score += W_GROUP_TOPIC;
    }
    if same_category(question.category.as_deref(), group.category.as_deref()) {
        score += W_GROUP_CATEGORY;
    }
    score += W_GROUP_DURATION * duration_ratio(duration, group.average_duration_seconds);
    score.clamp(0.0, 1.0)
}

/// Symmetric pairwise similarity over a set of questions. Diagonal is 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn build(questions: &[&Question]) -> Self {
        let size = questions.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            values[i * size + i] = 1.0;
            for j in (i + 1)..size {
                let s = question_similarity(questions[i], questions[j]);
                values[i * size + j] = s;
                values[j * size + i] = s;
            }
        }
        Self { size, values }
    }

    /// A matrix where every pair is fully compatible.
    pub fn uniform(size: usize) -> Self {
        Self {
            size,
            values: vec![1.0; size * size],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Mean similarity of `member` to the other `members`. 1.0 when alone.
    pub fn mean_to_others(&self, member: usize, members: &[usize]) -> f64 {
        let others: Vec<f64> = members
            .iter()
            .filter(|&&m| m != member)
            .map(|&m| self.get(member, m))
            .collect();
        if others.is_empty() {
            1.0
        } else {
            others.iter().sum::<f64>() / others.len() as f64
        }
    }

    /// Mean pairwise similarity of `members`. 1.0 for fewer than two.
    pub fn mean_pairwise(&self, members: &[usize]) -> f64 {
        let mut sum = 0.0;
        let mut pairs = 0usize;
        for (k, &i) in members.iter().enumerate() {
            for &j in &members[k + 1..] {
                sum += self.get(i, j);
                pairs += 1;
            }
        }
        if pairs == 0 {
            1.0
        } else {
            sum / pairs as f64
        }
    }
}
