//! Language-keyed strings as returned by MangaDex (`{"en": "...", "ja": "..."}`).

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered mapping from language code to text.
///
/// Document order is preserved so "first available entry" is stable.
/// MangaDex encodes an empty map as `[]`; both shapes are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    entries: Vec<(String, String)>,
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(language, text)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut text = Self::new();
        for (lang, value) in pairs {
            text.insert(lang, value);
        }
        text
    }

    /// Insert or replace the entry for `lang`.
    pub fn insert(&mut self, lang: impl Into<String>, value: impl Into<String>) {
        let lang = lang.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == lang) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((lang, value)),
        }
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == lang)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (lang, value) in &self.entries {
            map.serialize_entry(lang, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LocalizedTextVisitor)
    }
}

struct LocalizedTextVisitor;

impl<'de> Visitor<'de> for LocalizedTextVisitor {
    type Value = LocalizedText;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language codes to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut text = LocalizedText::new();
        while let Some((lang, value)) = access.next_entry::<String, Option<String>>()? {
            // Null values carry no text.
            if let Some(value) = value {
                text.insert(lang, value);
            }
        }
        Ok(text)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        while access.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(LocalizedText::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(LocalizedText::new())
    }
}
