use crate::rental_data::data_loader::RentalDataLoader;
use crate::rental_data::error::RentalDataError;
use crate::types::dataset::Dataset;
use log::{debug, info};
use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

/// Process-lifetime memo of loaded tables, keyed by file path.
///
/// Share one cache between sessions with `Arc<FrameCache>`. Each path is read
/// from disk at most once: concurrent callers for the same path wait on a
/// single load. A failed load leaves the slot empty, so the next caller
/// retries. Frames are never mutated after insertion and cloning a
/// `DataFrame` only bumps reference counts. Nothing is evicted.
#[derive(Default)]
pub struct FrameCache {
    loader: RentalDataLoader,
    frames: Mutex<HashMap<PathBuf, Arc<OnceCell<DataFrame>>>>,
    disk_reads: AtomicUsize,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the table stored at `path`, reading it from disk on first use.
    pub async fn get_or_load(
        &self,
        path: &Path,
        dataset: Dataset,
    ) -> Result<DataFrame, RentalDataError> {
        // The map lock is only held to find the slot; loads of other paths
        // are not blocked behind this one.
        let slot = {
            let mut frames = self.frames.lock().await;
            Arc::clone(frames.entry(path.to_path_buf()).or_default())
        };

        if let Some(cached) = slot.get() {
            debug!("Cache hit for {} data at {:?}", dataset, path);
            return Ok(cached.clone());
        }

        let df = slot
            .get_or_try_init(|| async {
                info!("Cache miss for {} data at {:?}", dataset, path);
                self.disk_reads.fetch_add(1, Ordering::Relaxed);
                self.loader.load(path, dataset).await
            })
            .await?;
        Ok(df.clone())
    }

    /// Whether a table for `path` has been loaded successfully.
    pub async fn contains(&self, path: &Path) -> bool {
        self.frames
            .lock()
            .await
            .get(path)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of loaded tables.
    pub async fn len(&self) -> usize {
        self.frames
            .lock()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// How many times a table was read from disk, failed attempts included.
    pub fn disk_reads(&self) -> usize {
        self.disk_reads.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn daily_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"dteday,yr,workingday,weathersit,temp,hum,windspeed,cnt\n\
              2011-01-01,0,0,2,0.34,0.80,0.16,985\n\
              2011-01-03,0,1,1,0.19,0.43,0.24,1349\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_reload_from_cache_equals_first_load() -> Result<(), Box<dyn std::error::Error>> {
        let file = daily_file();
        let cache = FrameCache::new();

        let first = cache.get_or_load(file.path(), Dataset::Daily).await?;
        assert!(cache.contains(file.path()).await);

        // Removing the file proves the second read is served from memory.
        let path = file.path().to_path_buf();
        drop(file);
        let second = cache.get_or_load(&path, Dataset::Daily).await?;

        assert!(first.equals(&second));
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.disk_reads(), 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sessions_read_each_path_once() -> Result<(), Box<dyn std::error::Error>> {
        let file = daily_file();
        let cache = Arc::new(FrameCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let path = file.path().to_path_buf();
                tokio::spawn(async move { cache.get_or_load(&path, Dataset::Daily).await })
            })
            .collect();

        for handle in handles {
            let df = handle.await??;
            assert_eq!(df.height(), 2);
        }
        assert_eq!(cache.disk_reads(), 1);
        assert_eq!(cache.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let cache = FrameCache::new();
        let path = Path::new("/no/such/dir/hour.csv");

        assert!(cache.get_or_load(path, Dataset::Hourly).await.is_err());
        assert!(cache.is_empty().await);
        assert!(!cache.contains(path).await);

        // The failed slot is retried, not remembered.
        assert!(cache.get_or_load(path, Dataset::Hourly).await.is_err());
        assert_eq!(cache.disk_reads(), 2);
    }
}
