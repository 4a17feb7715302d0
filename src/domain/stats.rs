use std::cmp::Ordering;

use super::catalog::Catalog;

/// Rating summary over a non-empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    /// Every movie sharing the highest rating, in name order.
    pub best: Vec<String>,
    /// Every movie sharing the lowest rating, in name order.
    pub worst: Vec<String>,
    pub best_rating: f64,
    pub worst_rating: f64,
}

impl CatalogStats {
    pub(crate) fn compute(catalog: &Catalog) -> Option<Self> {
        if catalog.is_empty() {
            return None;
        }

        let mut ratings: Vec<f64> = catalog.iter().map(|(_, record)| record.rating).collect();
        ratings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let count = ratings.len();
        let average = ratings.iter().sum::<f64>() / count as f64;
        let mid = count / 2;
        let median =
            if count % 2 == 0 { (ratings[mid - 1] + ratings[mid]) / 2.0 } else { ratings[mid] };

        let worst_rating = ratings[0];
        let best_rating = ratings[count - 1];
        let names_rated = |target: f64| -> Vec<String> {
            catalog
                .iter()
                .filter(|(_, record)| record.rating == target)
                .map(|(name, _)| name.to_string())
                .collect()
        };

        Some(Self {
            count,
            average,
            median,
            best: names_rated(best_rating),
            worst: names_rated(worst_rating),
            best_rating,
            worst_rating,
        })
    }
}
