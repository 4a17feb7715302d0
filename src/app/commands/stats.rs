use crate::domain::{Catalog, CatalogStats};

/// Rating statistics, or `None` when the catalog is empty.
pub fn execute(catalog: &Catalog) -> Option<CatalogStats> {
    catalog.stats()
}

/// Render statistics as console lines.
pub fn render(stats: &CatalogStats) -> Vec<String> {
    vec![
        format!("Movies: {}", stats.count),
        format!("Average rating: {:.2}", stats.average),
        format!("Median rating: {:.2}", stats.median),
        format!("Best movie(s): {} ({})", stats.best.join(", "), stats.best_rating),
        format!("Worst movie(s): {} ({})", stats.worst.join(", "), stats.worst_rating),
    ]
}
