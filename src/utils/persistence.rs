//! Flat key/value persistence for player progress, the active encounter and
//! the current game state.
//!
//! Every value is a plain integer, mirroring the storage API of the watch the
//! game was designed for. Two backends are provided: [`MemoryStore`] for tests
//! and the simulator, and [`JsonFileStore`] which keeps the whole map in a
//! single JSON object on disk.

use directories::ProjectDirs;
use log::warn;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("save file could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Every key the game ever writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersistKey {
    PlayerMaxHealth,
    PlayerCurrentHealth,
    PlayerSwordDamage,
    PlayerMagicDamage,
    PlayerBowDamage,
    MonsterIndex,
    MonsterCurrentHealth,
    GameState,
}

impl PersistKey {
    pub const ALL: [PersistKey; 8] = [
        PersistKey::PlayerMaxHealth,
        PersistKey::PlayerCurrentHealth,
        PersistKey::PlayerSwordDamage,
        PersistKey::PlayerMagicDamage,
        PersistKey::PlayerBowDamage,
        PersistKey::MonsterIndex,
        PersistKey::MonsterCurrentHealth,
        PersistKey::GameState,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersistKey::PlayerMaxHealth => "player_max_health",
            PersistKey::PlayerCurrentHealth => "player_current_health",
            PersistKey::PlayerSwordDamage => "player_sword_damage",
            PersistKey::PlayerMagicDamage => "player_magic_damage",
            PersistKey::PlayerBowDamage => "player_bow_damage",
            PersistKey::MonsterIndex => "monster_index",
            PersistKey::MonsterCurrentHealth => "monster_current_health",
            PersistKey::GameState => "game_state",
        }
    }
}

/// Durable integer storage. Writes are expected to be visible to the next
/// read immediately.
pub trait PersistenceStore {
    fn read_int(&self, key: PersistKey) -> Option<i32>;

    fn write_int(&mut self, key: PersistKey, value: i32) -> Result<(), StoreError>;

    fn delete(&mut self, key: PersistKey) -> Result<(), StoreError>;

    fn exists(&self, key: PersistKey) -> bool {
        self.read_int(key).is_some()
    }
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<PersistKey, i32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PersistenceStore for MemoryStore {
    fn read_int(&self, key: PersistKey) -> Option<i32> {
        self.values.get(&key).copied()
    }

    fn write_int(&mut self, key: PersistKey, value: i32) -> Result<(), StoreError> {
        self.values.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: PersistKey) -> Result<(), StoreError> {
        self.values.remove(&key);
        Ok(())
    }
}

/// JSON file store. The full map is rewritten on every mutation through a
/// sibling temp file and a rename, so a crash never leaves a torn file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, i32>,
}

impl JsonFileStore {
    /// Default save location in the platform config directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let project_dirs =
            ProjectDirs::from("", "", "legend-of-xor").ok_or(StoreError::NoConfigDir)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join("persist.json"))
    }

    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable one is logged and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let values = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("discarding unreadable save file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PersistenceStore for JsonFileStore {
    fn read_int(&self, key: PersistKey) -> Option<i32> {
        self.values.get(key.as_str()).copied()
    }

    fn write_int(&mut self, key: PersistKey, value: i32) -> Result<(), StoreError> {
        self.values.insert(key.as_str().to_string(), value);
        self.flush()
    }

    fn delete(&mut self, key: PersistKey) -> Result<(), StoreError> {
        if self.values.remove(key.as_str()).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
