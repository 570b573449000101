//! Static UI labels in the two supported languages.
//!
//! Only chrome is translated. Catalog data (titles, synopses, genre names)
//! is shown as received.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Id,
            Self::Id => Self::En,
        }
    }

    /// BCP 47 tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }
}

/// Every translatable string in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    AppTitle,
    SearchPlaceholder,
    Search,
    CloseSearch,
    Language,
    Theme,
    Back,
    Overview,
    Chapters,
    Favorite,
    Read,
    Ongoing,
    Completed,
    NoSynopsis,
    Loading,
    NoResults,
    NoResultsHint,
    TitleCopied,
}

pub fn label(lang: Language, label: Label) -> &'static str {
    match lang {
        Language::En => english(label),
        Language::Id => indonesian(label),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::AppTitle => "Komik",
        Label::SearchPlaceholder => "Search manga...",
        Label::Search => "Search",
        Label::CloseSearch => "Close search",
        Label::Language => "Language",
        Label::Theme => "Theme",
        Label::Back => "Back",
        Label::Overview => "Overview",
        Label::Chapters => "Chapters",
        Label::Favorite => "+ Favorite",
        Label::Read => "Read",
        Label::Ongoing => "Ongoing",
        Label::Completed => "Completed",
        Label::NoSynopsis => "No synopsis available.",
        Label::Loading => "Loading catalog...",
        Label::NoResults => "No manga found",
        Label::NoResultsHint => "Try another title or genre.",
        Label::TitleCopied => "Title copied",
    }
}

fn indonesian(label: Label) -> &'static str {
    match label {
        Label::AppTitle => "Komik",
        Label::SearchPlaceholder => "Cari Komik...",
        Label::Search => "Cari",
        Label::CloseSearch => "Tutup pencarian",
        Label::Language => "Bahasa",
        Label::Theme => "Tema",
        Label::Back => "Kembali",
        Label::Overview => "Ikhtisar",
        Label::Chapters => "Daftar Bab",
        Label::Favorite => "+ Favorit",
        Label::Read => "Baca",
        Label::Ongoing => "Berlangsung",
        Label::Completed => "Tamat",
        Label::NoSynopsis => "Sinopsis belum tersedia.",
        Label::Loading => "Memuat katalog...",
        Label::NoResults => "Komik tidak ditemukan",
        Label::NoResultsHint => "Coba judul atau genre lain.",
        Label::TitleCopied => "Judul disalin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Language::En.toggled(), Language::Id);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_labels_differ_by_language() {
        assert_eq!(label(Language::Id, Label::SearchPlaceholder), "Cari Komik...");
        assert_eq!(label(Language::En, Label::Overview), "Overview");
        assert_eq!(label(Language::Id, Label::Overview), "Ikhtisar");
        assert_eq!(label(Language::Id, Label::Chapters), "Daftar Bab");
    }

    #[test]
    fn test_language_serde_tags() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let w: Wrapper = toml::from_str("language = \"id\"").unwrap();
        assert_eq!(w.language, Language::Id);
        assert_eq!(w.language.tag(), "id");
    }
}
