//! Phase 3: Greedy seed clustering over a similarity matrix.
//!
//! The first unclustered item seeds a cluster and absorbs every remaining
//! item whose similarity to the seed reaches the threshold.

use crate::algorithms::similarity::SimilarityMatrix;

/// Returns clusters of matrix indices, ordered by seed.
pub fn cluster_greedy(matrix: &SimilarityMatrix, threshold: f64) -> Vec<Vec<usize>> {
    let n = matrix.len();
    let mut clustered = vec![false; n];
    let mut clusters = Vec::new();

    for seed in 0..n {
        if clustered[seed] {
            continue;
        }
        clustered[seed] = true;
        let mut cluster = vec![seed];
        for other in (seed + 1)..n {
            if !clustered[other] && matrix.get(seed, other) >= threshold {
                clustered[other] = true;
                cluster.push(other);
            }
        }
        clusters.push(cluster);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::Question;

    #[test]
    fn similar_items_share_a_cluster() {
        let a = Question::new("a", "delivery speed arrived quickly", 3)
            .unwrap()
            .with_category("delivery")
            .with_keywords(["speed"]);
        let b = Question::new("b", "delivery speed arrived slowly", 3)
            .unwrap()
            .with_category("delivery")
            .with_keywords(["speed"]);
        let c = Question::new("c", "unrelated", 3).unwrap();
        let matrix = SimilarityMatrix::build(&[&a, &b, &c]);
        let clusters = cluster_greedy(&matrix, 0.6);
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn uniform_matrix_forms_one_cluster() {
        assert_eq!(cluster_greedy(&SimilarityMatrix::uniform(3), 0.9), vec![vec![0, 1, 2]]);
        assert!(cluster_greedy(&SimilarityMatrix::uniform(0), 0.5).is_empty());
    }
}
