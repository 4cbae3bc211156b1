use std::fmt;
use std::fmt::Formatter;

use serde::Deserialize;

use crate::fetcher::ContentStream;
use crate::model::normalize_title;

/// Photo entry as returned by the photos endpoint. `thumbnailUrl` is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PhotoRecord {
    pub(crate) album_id: u64,
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) url: String,
}

pub struct Photo {
    pub(crate) album_id: u64,
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) content: Option<ContentStream>,
}

impl Photo {
    pub(crate) fn new(album_id: u64, id: u64, title: &str, url: &str) -> Self {
        Photo {
            album_id,
            id,
            title: normalize_title(title),
            url: url.to_owned(),
            content: None,
        }
    }

    pub(crate) fn with_content(mut self, content: ContentStream) -> Self {
        self.content = Some(content);
        self
    }
}

impl From<&PhotoRecord> for Photo {
    fn from(record: &PhotoRecord) -> Self {
        Photo::new(record.album_id, record.id, &record.title, &record.url)
    }
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("album_id", &self.album_id)
            .field("id", &self.id)
            .field("title", &self.title)
            .field("url", &self.url)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}
