//! Title search and genre facet filtering.

use std::fmt;

use crate::display::{display_genres, display_title};
use crate::models::CatalogRecord;

/// Label of the facet that matches every record.
pub const ALL: &str = "All";

/// Facets offered in the genre bar, in display order.
pub const GENRES: [&str; 9] = [
    ALL,
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Romance",
    "Sci-Fi",
];

/// Selected genre facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    /// Parse a facet label; `"All"` selects everything.
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Self::All
        } else {
            Self::Genre(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Genre(g) => g,
        }
    }

    /// Exact, case-sensitive membership in the record's display genres.
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        match self {
            Self::All => true,
            Self::Genre(genre) => display_genres(record).contains(&genre.as_str()),
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive substring test against the display title.
pub fn title_matches(record: &CatalogRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    display_title(record)
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Positions in `records` that pass both predicates, in input order.
pub fn filter_indices(records: &[CatalogRecord], query: &str, genre: &GenreFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| title_matches(r, query) && genre.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Stable filter returning the matching records.
pub fn filter<'a>(
    records: &'a [CatalogRecord],
    query: &str,
    genre: &GenreFilter,
) -> Vec<&'a CatalogRecord> {
    records
        .iter()
        .filter(|r| title_matches(r, query) && genre.matches(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::merge;
    use crate::pinned::pinned_records;
    use komik_api::LocalizedText;

    fn remote(id: &str, title: &str, tags: &[&str]) -> CatalogRecord {
        CatalogRecord {
            id: id.to_string(),
            title: LocalizedText::from_pairs([("en", title)]),
            tags: Some(
                tags.iter()
                    .map(|t| LocalizedText::from_pairs([("en", *t)]))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn merged() -> Vec<CatalogRecord> {
        let remote = vec![
            remote("r1", "Frieren: Beyond Journey's End", &["Adventure", "Drama", "Fantasy"]),
            remote("r2", "One-Punch Man", &["Action", "Comedy"]),
            remote("r3", "Kaguya-sama: Love Is War", &["Romance", "Comedy"]),
        ];
        merge(pinned_records(), Ok::<_, std::io::Error>(remote))
    }

    fn ids(records: &[&CatalogRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_all_is_identity() {
        let records = merged();
        let visible = filter(&records, "", &GenreFilter::All);
        assert_eq!(visible.len(), records.len());
        assert!(visible.iter().zip(&records).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = merged();
        for (q, g) in [("o", GenreFilter::All), ("man", GenreFilter::from_label("Action")), ("", GenreFilter::from_label("Comedy"))] {
            let once: Vec<CatalogRecord> = filter(&records, q, &g).into_iter().cloned().collect();
            let twice: Vec<CatalogRecord> = filter(&once, q, &g).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_title_search_ignores_case() {
        let records = merged();
        let upper = ids(&filter(&records, "ONE", &GenreFilter::All));
        let lower = ids(&filter(&records, "one", &GenreFilter::All));
        assert_eq!(upper, lower);
        assert_eq!(upper, ["onepiece", "r2"]);
    }

    #[test]
    fn test_one_piece_genre_scenario() {
        let records = merged();
        assert_eq!(ids(&filter(&records, "piece", &GenreFilter::All)), ["onepiece"]);
        assert!(filter(&records, "piece", &GenreFilter::from_label("Horror")).is_empty());
    }

    #[test]
    fn test_genre_match_is_exact_and_case_sensitive() {
        let records = merged();
        assert_eq!(
            ids(&filter(&records, "", &GenreFilter::from_label("Horror"))),
            ["berserk", "chainsaw"]
        );
        assert!(filter(&records, "", &GenreFilter::from_label("horror")).is_empty());
        assert!(filter(&records, "", &GenreFilter::from_label("Hor")).is_empty());
    }

    #[test]
    fn test_remote_tags_drive_genre_filter() {
        let records = merged();
        assert_eq!(
            ids(&filter(&records, "", &GenreFilter::from_label("Romance"))),
            ["r3"]
        );
    }

    #[test]
    fn test_indices_preserve_order() {
        let records = merged();
        let comedy = GenreFilter::from_label("Comedy");
        let indices = filter_indices(&records, "", &comedy);
        assert_eq!(indices, [1, 3, 6, 7]);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_facet_labels() {
        assert_eq!(GenreFilter::from_label("All"), GenreFilter::All);
        assert_eq!(GenreFilter::from_label("Sci-Fi").label(), "Sci-Fi");
        assert_eq!(GENRES.len(), 9);
        assert_eq!(GENRES[0], ALL);
    }
}
