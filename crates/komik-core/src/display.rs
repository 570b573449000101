//! Display-field resolution for catalog records.
//!
//! Pure functions of one record. Manual overrides always win; API data is
//! read in the default language; everything else falls back to a
//! placeholder. Nothing here is cached.

use komik_api::mangadex::covers;

use crate::models::CatalogRecord;

/// Language read from localized API fields.
pub const DEFAULT_LANGUAGE: &str = "en";

pub const TITLE_PLACEHOLDER: &str = "No Title";

/// Shown when a record carries no rating.
pub const RATING_PLACEHOLDER: &str = "N/A";

/// Number of decorative chapter rows on the detail screen.
pub const PLACEHOLDER_CHAPTER_COUNT: u32 = 10;

const PLACEHOLDER_CHAPTER_NAME: &str = "The Beginning of Legend";

/// Default-language title, else the first available, else a placeholder.
/// Never empty.
pub fn display_title(record: &CatalogRecord) -> &str {
    record
        .title
        .get(DEFAULT_LANGUAGE)
        .filter(|t| !t.is_empty())
        .or_else(|| record.title.iter().map(|(_, t)| t).find(|t| !t.is_empty()))
        .unwrap_or(TITLE_PLACEHOLDER)
}

/// Cover URL against the public MangaDex upload host.
pub fn display_image_url(record: &CatalogRecord) -> String {
    image_url_from(record, covers::COVER_BASE_URL)
}

/// Manual URL, else the cover thumbnail under `cover_base`, else empty.
pub fn image_url_from(record: &CatalogRecord, cover_base: &str) -> String {
    if let Some(url) = &record.manual.image_url {
        return url.clone();
    }
    match &record.cover_file_name {
        Some(file_name) => covers::cover_url(cover_base, &record.id, file_name),
        None => String::new(),
    }
}

pub fn display_rating(record: &CatalogRecord) -> &str {
    record.manual.rating.as_deref().unwrap_or(RATING_PLACEHOLDER)
}

/// Manual synopsis, else the default-language description.
///
/// `None` means the caller shows its own localized placeholder.
pub fn display_synopsis(record: &CatalogRecord) -> Option<&str> {
    record.manual.synopsis.as_deref().or_else(|| {
        record
            .description
            .as_ref()
            .and_then(|d| d.get(DEFAULT_LANGUAGE))
    })
}

/// Manual genres, else default-language tag names (tags without one are
/// skipped), else empty.
pub fn display_genres(record: &CatalogRecord) -> Vec<&str> {
    if let Some(genres) = &record.manual.genres {
        return genres.iter().map(String::as_str).collect();
    }
    record
        .tags
        .iter()
        .flatten()
        .filter_map(|tag| tag.get(DEFAULT_LANGUAGE))
        .collect()
}

/// One decorative chapter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderChapter {
    pub number: u32,
    pub label: String,
    pub name: &'static str,
}

/// Rows `#001` through `#0010`, labelled the way the catalog always has.
pub fn placeholder_chapters() -> Vec<PlaceholderChapter> {
    (1..=PLACEHOLDER_CHAPTER_COUNT)
        .map(|number| PlaceholderChapter {
            number,
            label: format!("#00{number}"),
            name: PLACEHOLDER_CHAPTER_NAME,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ManualOverride, PublicationStatus};
    use crate::pinned::pinned_records;
    use komik_api::LocalizedText;

    fn api_record(id: &str) -> CatalogRecord {
        CatalogRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_prefers_default_language() {
        let mut record = api_record("x");
        record.title = LocalizedText::from_pairs([("ja", "ワンピース"), ("en", "One Piece")]);
        assert_eq!(display_title(&record), "One Piece");
    }

    #[test]
    fn test_title_falls_back_to_first() {
        let mut record = api_record("x");
        record.title = LocalizedText::from_pairs([("ja-ro", "Shingeki no Kyojin"), ("ja", "進撃の巨人")]);
        assert_eq!(display_title(&record), "Shingeki no Kyojin");
    }

    #[test]
    fn test_title_never_empty() {
        let mut record = api_record("x");
        assert_eq!(display_title(&record), TITLE_PLACEHOLDER);

        record.title = LocalizedText::from_pairs([("en", "")]);
        assert_eq!(display_title(&record), TITLE_PLACEHOLDER);

        record.title = LocalizedText::from_pairs([("en", ""), ("ko", "나루토")]);
        assert_eq!(display_title(&record), "나루토");

        for record in pinned_records() {
            assert!(!display_title(&record).is_empty());
        }
    }

    #[test]
    fn test_image_url_from_cover_reference() {
        let mut record = api_record("123");
        record.cover_file_name = Some("abc".into());
        assert_eq!(
            display_image_url(&record),
            "https://uploads.mangadex.org/covers/123/abc.256.jpg"
        );
    }

    #[test]
    fn test_image_url_empty_without_cover() {
        assert_eq!(display_image_url(&api_record("123")), "");
    }

    #[test]
    fn test_manual_image_wins() {
        let mut record = api_record("123");
        record.cover_file_name = Some("abc".into());
        record.manual.image_url = Some("https://img.example/a.jpg".into());
        assert_eq!(display_image_url(&record), "https://img.example/a.jpg");
    }

    #[test]
    fn test_image_url_from_custom_base() {
        let mut record = api_record("m");
        record.cover_file_name = Some("f.jpg".into());
        assert_eq!(
            image_url_from(&record, "http://localhost:8080/covers/"),
            "http://localhost:8080/covers/m/f.jpg.256.jpg"
        );
    }

    #[test]
    fn test_rating_placeholder_is_stable() {
        let record = api_record("x");
        assert_eq!(display_rating(&record), RATING_PLACEHOLDER);
        assert_eq!(display_rating(&record), display_rating(&record));

        let pinned = pinned_records();
        assert_eq!(display_rating(&pinned[2]), "4.9");
    }

    #[test]
    fn test_synopsis_resolution() {
        let mut record = api_record("x");
        assert_eq!(display_synopsis(&record), None);

        record.description = Some(LocalizedText::from_pairs([("ja", "説明")]));
        assert_eq!(display_synopsis(&record), None);

        record.description = Some(LocalizedText::from_pairs([("en", "A story.")]));
        assert_eq!(display_synopsis(&record), Some("A story."));

        record.manual = ManualOverride {
            synopsis: Some("Curated.".into()),
            ..Default::default()
        };
        assert_eq!(display_synopsis(&record), Some("Curated."));
    }

    #[test]
    fn test_genres_from_tags_default_language_only() {
        let mut record = api_record("x");
        assert!(display_genres(&record).is_empty());

        record.tags = Some(vec![
            LocalizedText::from_pairs([("en", "Romance")]),
            LocalizedText::from_pairs([("ja", "ロマンス")]),
            LocalizedText::from_pairs([("en", "Drama")]),
        ]);
        assert_eq!(display_genres(&record), ["Romance", "Drama"]);
    }

    #[test]
    fn test_manual_genres_win() {
        let mut record = CatalogRecord::pinned(
            "p",
            "Pinned",
            PublicationStatus::Ongoing,
            ManualOverride {
                genres: Some(vec!["Horror".into()]),
                ..Default::default()
            },
        );
        record.tags = Some(vec![LocalizedText::from_pairs([("en", "Romance")])]);
        assert_eq!(display_genres(&record), ["Horror"]);
    }

    #[test]
    fn test_placeholder_chapters() {
        let chapters = placeholder_chapters();
        assert_eq!(chapters.len(), 10);
        assert_eq!(chapters[0].label, "#001");
        assert_eq!(chapters[9].label, "#0010");
        assert!(chapters.iter().all(|c| c.name == "The Beginning of Legend"));
    }
}
