//! Browse session: the list screen's state and its event reducer.
//!
//! All mutation goes through [`BrowseSession::update`]; views read the
//! session by reference and never change it. Each mount gets a new
//! generation, and catalog results tagged with an older generation are
//! dropped instead of applied.

use crate::filter::{filter_indices, GenreFilter};
use crate::models::CatalogRecord;
use crate::navigation::{BackOutcome, Navigation};

/// Input to the reducer.
#[derive(Debug, Clone)]
pub enum BrowseEvent {
    /// The list screen became active (startup or refresh).
    Mount,
    /// A catalog load finished.
    CatalogLoaded {
        generation: u64,
        records: Vec<CatalogRecord>,
    },
    ToggleSearch,
    QueryChanged(String),
    GenreSelected(GenreFilter),
    /// Open the record at this position in the visible list.
    Select(usize),
    Back,
    SystemBack,
}

/// Work the caller must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a catalog load tagged with this generation.
    FetchCatalog { generation: u64 },
    /// A result for an earlier mount arrived and was dropped.
    StaleResult { generation: u64, current: u64 },
    /// Back was pressed on the list; the platform decides what that means.
    BackIgnored,
}

#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    generation: u64,
    loading: bool,
    records: Vec<CatalogRecord>,
    visible: Vec<usize>,
    query: String,
    searching: bool,
    genre: GenreFilter,
    navigation: Navigation,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: BrowseEvent) -> Effect {
        match event {
            BrowseEvent::Mount => {
                let generation = self.generation + 1;
                *self = Self {
                    generation,
                    loading: true,
                    ..Self::default()
                };
                tracing::debug!(generation, "list mounted");
                Effect::FetchCatalog { generation }
            }
            BrowseEvent::CatalogLoaded {
                generation,
                records,
            } => {
                if !self.is_current(generation) {
                    tracing::debug!(generation, current = self.generation, "discarding stale catalog");
                    return Effect::StaleResult {
                        generation,
                        current: self.generation,
                    };
                }
                self.records = records;
                self.loading = false;
                self.refilter();
                Effect::None
            }
            BrowseEvent::ToggleSearch => {
                self.searching = !self.searching;
                if !self.searching && !self.query.is_empty() {
                    self.query.clear();
                    self.refilter();
                }
                Effect::None
            }
            BrowseEvent::QueryChanged(query) => {
                self.query = query;
                self.refilter();
                Effect::None
            }
            BrowseEvent::GenreSelected(genre) => {
                self.genre = genre;
                self.refilter();
                Effect::None
            }
            BrowseEvent::Select(position) => {
                if let Some(record) = self.visible_record(position) {
                    let record = record.clone();
                    self.navigation.select(record);
                }
                Effect::None
            }
            BrowseEvent::Back => {
                self.navigation.back();
                Effect::None
            }
            BrowseEvent::SystemBack => match self.navigation.system_back() {
                BackOutcome::ReturnedToList => Effect::None,
                BackOutcome::Ignored => Effect::BackIgnored,
            },
        }
    }

    fn refilter(&mut self) {
        self.visible = filter_indices(&self.records, &self.query, &self.genre);
    }

    /// Whether a result tagged `generation` belongs to the live mount.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Full merged catalog, unfiltered.
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Records passing the current search and genre, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &CatalogRecord> + '_ {
        self.visible.iter().map(|&i| &self.records[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_record(&self, position: usize) -> Option<&CatalogRecord> {
        self.visible.get(position).and_then(|&i| self.records.get(i))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn genre(&self) -> &GenreFilter {
        &self.genre
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }
}
