use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fetcher::FetchClient;
use crate::model::album::{Album, AlbumRecord};
use crate::model::photo::{Photo, PhotoRecord};
use crate::pool::WorkerPool;
use crate::saver::PhotoSaver;

pub(crate) static PHOTOS_URL: &str = "https://jsonplaceholder.typicode.com/photos/";
pub(crate) static ALBUMS_URL: &str = "https://jsonplaceholder.typicode.com/albums/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub failed: usize,
}

/// Downloads every photo listed by `photos_url` into its album's directory.
pub struct Pipeline {
    client: FetchClient,
    saver: PhotoSaver,
    photos_url: String,
    albums_url: String,
    workers: usize,
}

impl Pipeline {
    pub fn new(
        client: FetchClient,
        saver: PhotoSaver,
        photos_url: String,
        albums_url: String,
        workers: usize,
    ) -> Self {
        Pipeline { client, saver, photos_url, albums_url, workers }
    }

    /// Fails only when one of the two metadata lists can't be fetched.
    /// Per-photo failures are logged and counted in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        let pool = WorkerPool::new(self.workers);
        debug!(workers = pool.capacity(), "worker pool ready");

        let photos = {
            let client = self.client.clone();
            let url = self.photos_url.clone();
            pool.spawn(async move { client.fetch_json::<Vec<PhotoRecord>>(&url).await })
        };
        let albums = {
            let client = self.client.clone();
            let url = self.albums_url.clone();
            pool.spawn(async move { client.fetch_json::<Vec<AlbumRecord>>(&url).await })
        };

        let (photos, albums) = futures::join!(photos, albums);
        let photos = photos??;
        let albums = Arc::new(album_lookup(albums??));
        info!(photos = photos.len(), albums = albums.len(), "metadata fetched");

        let tasks: Vec<_> = photos
            .into_iter()
            .map(|record| {
                let client = self.client.clone();
                let saver = self.saver.clone();
                let albums = albums.clone();
                let photo_id = record.id;
                let handle = pool.spawn(async move {
                    download_photo(&client, &saver, &albums, record).await
                });
                (photo_id, handle)
            })
            .collect();

        let (ids, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();
        let mut summary = RunSummary::default();
        for (photo_id, outcome) in ids.into_iter().zip(join_all(handles).await) {
            match outcome.map_err(Error::from).and_then(|res| res) {
                Ok(_) => summary.saved += 1,
                Err(err) => {
                    warn!(photo_id, error = %err, "photo not saved");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

fn album_lookup(records: Vec<AlbumRecord>) -> HashMap<u64, Album> {
    records.into_iter().map(|r| (r.id, Album::from(r))).collect()
}

async fn download_photo(
    client: &FetchClient,
    saver: &PhotoSaver,
    albums: &HashMap<u64, Album>,
    record: PhotoRecord,
) -> Result<()> {
    let album = albums.get(&record.album_id).ok_or(Error::UnknownAlbum {
        album_id: record.album_id,
        photo_id: record.id,
    })?;

    let content = client.fetch_stream(&record.url).await?;
    let photo = Photo::from(&record).with_content(content);
    saver.save_photo(album, photo).await?;

    Ok(())
}
