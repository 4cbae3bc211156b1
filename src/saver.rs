use std::path::PathBuf;

use futures::TryStreamExt;
use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fetcher::ContentStream;
use crate::file::{ensure_dir, sanitize_component};
use crate::model::album::Album;
use crate::model::photo::Photo;

/// Writes downloaded photos into `<root>/<album>/<photo>.<ext>`.
#[derive(Debug, Clone)]
pub struct PhotoSaver {
    root: PathBuf,
}

impl PhotoSaver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PhotoSaver { root: root.into() }
    }

    /// Streams the photo's content to disk, replacing any file already at the
    /// target path. Returns the path written.
    ///
    /// Bytes go to a temporary file in the album directory which is renamed
    /// over the target once the body is fully read, so the target only ever
    /// holds one complete download. On error the temporary file is removed.
    pub async fn save_photo(&self, album: &Album, photo: Photo) -> Result<PathBuf> {
        let dir = self.root.join(sanitize_component(&album.title, album.id));
        ensure_dir(&dir).await?;

        let mut content = match photo.content {
            Some(content) => content,
            None => return Err(Error::MissingContent { url: photo.url }),
        };
        let extension = extension_of(&content)?;
        let path = dir.join(format!("{}.{}", sanitize_component(&photo.title, photo.id), extension));

        let (file, temp_path) = NamedTempFile::new_in(&dir)?.into_parts();
        let mut file = File::from_std(file);
        while let Some(chunk) = content.body.try_next().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        drop(file);
        temp_path.persist(&path).map_err(|err| Error::Io(err.error))?;

        debug!(path = %path.display(), "photo saved");
        Ok(path)
    }
}

fn extension_of(content: &ContentStream) -> Result<String> {
    match content.content_type() {
        Some(value) => extension_from_content_type(value),
        None => Err(Error::MissingContentType { url: content.url.clone() }),
    }
}

/// `image/jpeg` -> `jpeg`. Parameters such as `; charset=...` are dropped.
pub(crate) fn extension_from_content_type(value: &str) -> Result<String> {
    let mime = value.split(';').next().unwrap_or_default().trim();
    let subtype = match mime.split_once('/') {
        Some((kind, subtype)) if !kind.trim().is_empty() => subtype.trim(),
        _ => "",
    };

    if subtype.is_empty() || subtype.contains('/') {
        return Err(Error::MalformedContentType { value: value.to_owned() });
    }

    Ok(subtype.to_ascii_lowercase())
}
