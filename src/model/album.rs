use std::fmt;
use std::fmt::Formatter;

use serde::Deserialize;

use crate::model::normalize_title;

/// Album entry as returned by the albums endpoint. `userId` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AlbumRecord {
    pub(crate) id: u64,
    pub(crate) title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub(crate) id: u64,
    pub(crate) title: String,
}

impl Album {
    pub(crate) fn new(id: u64, title: &str) -> Self {
        Album { id, title: normalize_title(title) }
    }
}

impl From<AlbumRecord> for Album {
    fn from(record: AlbumRecord) -> Self {
        Album::new(record.id, &record.title)
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
