//! Best-effort local snapshot of the last successful parse.
//!
//! Two tiers, like the rest of the app expects: an in-memory LRU for repeat
//! lookups within one process, backed by a JSON file under the platform
//! cache directory. The file is a fallback, not a source of truth — reads go
//! through the defensive codec in [`codec`] and a corrupt file simply means
//! "no cached data".

use lru::LruCache;
use serde_json::Value;
use std::{
    fs,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};

pub mod codec;

pub use codec::{rehydrate_snapshot, CachedRoster};


/// Path: ~/.cache/espn-roster/roster_{sport}_{league}_{team}.json
pub fn snapshot_path(sport: &str, league: &str, team_id: &str) -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("espn-roster")
        .join(format!("roster_{}_{}_{}.json", sport, league, team_id))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Current time as epoch milliseconds, for the snapshot's `updatedAt` stamp.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Cache key for one team's snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    pub sport: String,
    pub league: String,
    pub team_id: String,
}

impl SnapshotKey {
    pub fn new(sport: &str, league: &str, team_id: &str) -> Self {
        Self {
            sport: sport.to_string(),
            league: league.to_string(),
            team_id: team_id.to_string(),
        }
    }

    fn to_file_path(&self) -> PathBuf {
        snapshot_path(&self.sport, &self.league, &self.team_id)
    }
}

/// Memory-over-disk snapshot cache.
///
/// Disk reads always pass through [`rehydrate_snapshot`], so a tampered or
/// stale-format file degrades to a miss instead of an error; hits are
/// promoted to the memory tier.
pub struct SnapshotCache {
    memory: Mutex<LruCache<SnapshotKey, CachedRoster>>,
}

impl SnapshotCache {
    /// Create a cache holding up to `capacity` snapshots in memory.
    pub fn new(capacity: usize) -> Self {
        Self {
            memory: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    /// Get a snapshot (memory first, then the revalidated disk file).
    pub fn get(&self, key: &SnapshotKey) -> Option<CachedRoster> {
        if let Some(cached) = self.memory.lock().unwrap().get(key) {
            return Some(cached.clone());
        }

        let cached = self.get_from_disk(key)?;
        self.memory
            .lock()
            .unwrap()
            .put(key.clone(), cached.clone());
        Some(cached)
    }

    /// Put a snapshot into both tiers. Disk write failures are logged and
    /// swallowed; the snapshot is best-effort by contract.
    pub fn put(&self, key: SnapshotKey, value: CachedRoster) {
        let path = key.to_file_path();
        self.memory.lock().unwrap().put(key, value.clone());

        match serde_json::to_string(&value) {
            Ok(contents) => {
                if let Err(err) = write_string(&path, &contents) {
                    log::warn!("failed to write snapshot {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize snapshot: {err}"),
        }
    }

    /// Clear the memory tier only (the file stays).
    pub fn clear_memory(&self) {
        self.memory.lock().unwrap().clear();
    }

    fn get_from_disk(&self, key: &SnapshotKey) -> Option<CachedRoster> {
        let contents = try_read_to_string(&key.to_file_path())?;
        let raw: Value = serde_json::from_str(&contents).ok()?;
        rehydrate_snapshot(&raw)
    }
}

/// Global snapshot cache instance for use across the application
pub static SNAPSHOT_CACHE: LazyLock<SnapshotCache> = LazyLock::new(|| SnapshotCache::new(8));
