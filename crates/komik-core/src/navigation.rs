//! List ⇄ Detail navigation.

use crate::models::CatalogRecord;

/// Which screen is showing. `Detail` owns a copy of the selected record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    List,
    Detail(Box<CatalogRecord>),
}

/// Result of a system back gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Detail was closed.
    ReturnedToList,
    /// Already on the list; the gesture is swallowed.
    Ignored,
}

impl Navigation {
    pub fn select(&mut self, record: CatalogRecord) {
        *self = Self::Detail(Box::new(record));
    }

    /// Explicit back control. No-op on the list.
    pub fn back(&mut self) {
        *self = Self::List;
    }

    pub fn system_back(&mut self) -> BackOutcome {
        match self {
            Self::List => BackOutcome::Ignored,
            Self::Detail(_) => {
                self.back();
                BackOutcome::ReturnedToList
            }
        }
    }

    pub fn selected(&self) -> Option<&CatalogRecord> {
        match self {
            Self::List => None,
            Self::Detail(record) => Some(&**record),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }
}
