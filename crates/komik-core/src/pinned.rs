//! Hand-curated titles shown ahead of the fetched catalog.

use crate::models::{CatalogRecord, ManualOverride, PublicationStatus};

/// Number of pinned titles.
pub const PINNED_COUNT: usize = 5;

fn manual(image_url: &str, rating: &str, synopsis: &str, genres: &[&str]) -> ManualOverride {
    ManualOverride {
        image_url: Some(image_url.to_string()),
        rating: Some(rating.to_string()),
        synopsis: Some(synopsis.to_string()),
        genres: Some(genres.iter().map(|g| g.to_string()).collect()),
    }
}

/// The pinned set, in display order. Built fresh on each call.
pub fn pinned_records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::pinned(
            "aot",
            "Attack on Titan",
            PublicationStatus::Completed,
            manual(
                "https://covers.openlibrary.org/b/isbn/9781612620244-L.jpg",
                "5.0",
                "Eren Yeager vows to cleanse the earth of the giant humanoid Titans that have brought humanity to the brink of extinction.",
                &["Action", "Drama", "Fantasy"],
            ),
        ),
        CatalogRecord::pinned(
            "onepiece",
            "One Piece",
            PublicationStatus::Ongoing,
            manual(
                "https://covers.openlibrary.org/b/isbn/9781569319017-L.jpg",
                "5.0",
                "Monkey D. Luffy and his pirate crew explore a fantasy world of endless oceans and islands in search of the world's ultimate treasure.",
                &["Adventure", "Action", "Comedy"],
            ),
        ),
        CatalogRecord::pinned(
            "berserk",
            "Berserk",
            PublicationStatus::Ongoing,
            manual(
                "https://covers.openlibrary.org/b/isbn/9781593070205-L.jpg",
                "4.9",
                "Guts, a former mercenary now known as the 'Black Swordsman,' is out for revenge.",
                &["Action", "Horror", "Fantasy"],
            ),
        ),
        CatalogRecord::pinned(
            "chainsaw",
            "Chainsaw Man",
            PublicationStatus::Ongoing,
            manual(
                "https://covers.openlibrary.org/b/isbn/9781974709939-L.jpg",
                "4.9",
                "Denji has a simple dream\u{2014}to live a happy and peaceful life, spending time with a girl he likes. But reality is harsh.",
                &["Action", "Horror", "Comedy"],
            ),
        ),
        CatalogRecord::pinned(
            "naruto",
            "Naruto",
            PublicationStatus::Completed,
            manual(
                "https://covers.openlibrary.org/b/isbn/9781569319000-L.jpg",
                "4.8",
                "Naruto Uzumaki wants to be the best ninja in the land.",
                &["Action", "Adventure"],
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_order() {
        let ids: Vec<String> = pinned_records().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["aot", "onepiece", "berserk", "chainsaw", "naruto"]);
        assert_eq!(ids.len(), PINNED_COUNT);
    }

    #[test]
    fn test_pinned_have_full_overrides() {
        for record in pinned_records() {
            assert!(record.manual.image_url.is_some(), "{}", record.id);
            assert!(record.manual.rating.is_some(), "{}", record.id);
            assert!(record.manual.synopsis.is_some(), "{}", record.id);
            assert!(record.manual.genres.is_some(), "{}", record.id);
            assert!(record.title.get("en").is_some(), "{}", record.id);
        }
    }

    #[test]
    fn test_one_piece_genres() {
        let records = pinned_records();
        let one_piece = records.iter().find(|r| r.id == "onepiece").unwrap();
        assert_eq!(
            one_piece.manual.genres.as_deref().unwrap(),
            ["Adventure", "Action", "Comedy"]
        );
        assert_eq!(one_piece.status, PublicationStatus::Ongoing);
    }
}
