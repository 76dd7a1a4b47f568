//! Palette persistence over an opaque key/value store.
//!
//! The palette is a JSON array of `#RRGGBB` strings stored under a single
//! key; array order is display order. The curation functions never touch a
//! store: the host loads a copy, transforms it, and writes the result back
//! through [`PaletteStore`].
//!
//! Two backends are provided:
//! - [`MemoryStore`]: an in-process map, handy for tests and previews.
//! - [`DiskStore`]: an embedded on-disk store backed by the [kv] crate.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;

use kv::{Config, Store};
use miette::{Context, IntoDiagnostic};

use crate::color::HexColor;
use crate::constants;
use crate::curator::PruneOutcome;
use crate::error::StoreErrorCouldNot;

/// String key/value storage the palette is persisted into.
pub trait KeyValueStore: Debug {
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> miette::Result<Option<String>>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: String) -> miette::Result<()>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> miette::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> miette::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> miette::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> miette::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// On-disk store. Values live in a single [kv] bucket.
pub struct DiskStore {
    path: String,
    bucket: kv::Bucket<'static, String, String>,
    _store: Store,
}

impl Debug for DiskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskStore").field("path", &self.path).finish()
    }
}

impl DiskStore {
    /// Open the store folder at `path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be created or is locked by
    /// another process.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> miette::Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let store = Store::new(Config::new(path.as_ref()))
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::OpenStore {
                path: path_str.clone(),
            })?;

        let bucket = store
            .bucket::<String, String>(Some(constants::STORE_BUCKET))
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::OpenBucket {
                bucket: constants::STORE_BUCKET.to_string(),
            })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "📑 Opened palette store", path = %path_str);

        Ok(Self {
            path: path_str,
            bucket,
            _store: store,
        })
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> miette::Result<Option<String>> {
        self.bucket
            .get(&key.to_string())
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::ReadKey {
                key: key.to_string(),
            })
    }

    fn set(&mut self, key: &str, value: String) -> miette::Result<()> {
        self.bucket
            .set(&key.to_string(), &value)
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::WriteKey {
                key: key.to_string(),
            })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> miette::Result<()> {
        self.bucket
            .remove(&key.to_string())
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::RemoveKey {
                key: key.to_string(),
            })?;
        Ok(())
    }
}

/// The persisted palette: a sequence of unique hex colors under one key.
#[derive(Debug)]
pub struct PaletteStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
}

impl PaletteStore {
    pub fn new(storage: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// A missing key is an empty palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is not a
    /// JSON array of valid `#RRGGBB` strings.
    #[tracing::instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> miette::Result<Vec<HexColor>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let colors: Vec<HexColor> = serde_json::from_str(&raw)
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::DecodePalette {
                key: self.key.clone(),
            })?;

        tracing::debug!(message = "🔼 Loaded palette", len = colors.len());
        Ok(colors)
    }

    /// Overwrite the palette with `colors` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    #[tracing::instrument(skip(self, colors), fields(key = %self.key, len = colors.len()))]
    pub fn save(&mut self, colors: &[HexColor]) -> miette::Result<()> {
        let raw = serde_json::to_string(colors)
            .into_diagnostic()
            .wrap_err(StoreErrorCouldNot::EncodePalette {
                key: self.key.clone(),
            })?;
        self.storage.set(&self.key, raw)?;

        tracing::debug!(message = "🔽 Saved palette");
        Ok(())
    }

    /// Append `color` unless it is already present. Returns whether it was added.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    #[tracing::instrument(skip(self))]
    pub fn add(&mut self, color: HexColor) -> miette::Result<bool> {
        let mut colors = self.load()?;
        if colors.contains(&color) {
            return Ok(false);
        }
        colors.push(color);
        self.save(&colors)?;
        Ok(true)
    }

    /// Remove `color`. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, color: &HexColor) -> miette::Result<bool> {
        let mut colors = self.load()?;
        let before = colors.len();
        colors.retain(|c| c != color);
        if colors.len() == before {
            return Ok(false);
        }
        self.save(&colors)?;
        Ok(true)
    }

    /// Reconcile storage with a prune pass and return what remains.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    #[tracing::instrument(skip(self, outcome), fields(removed = outcome.removed.len()))]
    pub fn apply_prune(&mut self, outcome: &PruneOutcome) -> miette::Result<Vec<HexColor>> {
        let mut colors = self.load()?;
        colors.retain(|c| !outcome.removed.contains(c));
        self.save(&colors)?;
        Ok(colors)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    #[tracing::instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> miette::Result<()> {
        self.storage.remove(&self.key)?;
        tracing::debug!(message = "❌ Cleared palette");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curator::prune_similar;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn memory_palette() -> PaletteStore {
        PaletteStore::new(MemoryStore::default(), constants::STORAGE_KEY)
    }

    #[test]
    fn missing_key_is_empty() -> miette::Result<()> {
        assert!(memory_palette().load()?.is_empty());
        Ok(())
    }

    #[test]
    fn add_rejects_duplicates_and_keeps_order() -> miette::Result<()> {
        let mut palette = memory_palette();
        assert!(palette.add(hex("#FF0000"))?);
        assert!(palette.add(hex("#00ff00"))?);
        assert!(!palette.add(hex("#ff0000"))?);
        assert_eq!(palette.load()?, vec![hex("#FF0000"), hex("#00FF00")]);
        Ok(())
    }

    #[test]
    fn stored_value_is_a_json_array_of_hash_strings() -> miette::Result<()> {
        let mut storage = MemoryStore::default();
        storage.set("colorPalette", r##"["#112233","#abcdef"]"##.to_string())?;
        let mut palette = PaletteStore::new(storage, "colorPalette");
        assert_eq!(palette.load()?, vec![hex("#112233"), hex("#ABCDEF")]);

        palette.save(&[hex("#ABCDEF"), hex("#112233")])?;
        assert_eq!(
            palette.storage.get("colorPalette")?,
            Some(r##"["#ABCDEF","#112233"]"##.to_string())
        );
        Ok(())
    }

    #[test]
    fn corrupt_value_is_reported() -> miette::Result<()> {
        let mut storage = MemoryStore::default();
        storage.set("colorPalette", r#"["not a color"]"#.to_string())?;
        let palette = PaletteStore::new(storage, "colorPalette");
        let err = palette.load().unwrap_err();
        assert_eq!(
            err.to_string(),
            "🎨 Could not decode palette stored under 'colorPalette'"
        );
        Ok(())
    }

    #[test]
    fn remove_and_clear() -> miette::Result<()> {
        let mut palette = memory_palette();
        palette.save(&[hex("#010101"), hex("#020202")])?;
        assert!(palette.remove(&hex("#010101"))?);
        assert!(!palette.remove(&hex("#010101"))?);
        assert_eq!(palette.load()?, vec![hex("#020202")]);

        palette.clear()?;
        assert!(palette.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn apply_prune_drops_removed_set() -> miette::Result<()> {
        let mut palette = memory_palette();
        let colors = vec![hex("#112233"), hex("#112234"), hex("#FFFFFF")];
        palette.save(&colors)?;
        let outcome = prune_similar(&colors, 5.0);
        assert_eq!(palette.apply_prune(&outcome)?, outcome.kept);
        assert_eq!(palette.load()?, outcome.kept);
        Ok(())
    }

    #[test]
    fn disk_store_persists_across_reopen() -> miette::Result<()> {
        let tmp = tempfile::tempdir().into_diagnostic()?;
        let dir = tmp.path().join("palette_db");
        {
            let mut palette = PaletteStore::new(DiskStore::open(&dir)?, "colorPalette");
            palette.save(&[hex("#3B82F6"), hex("#F97316")])?;
            assert!(palette.add(hex("#22C55E"))?);
        }
        {
            let palette = PaletteStore::new(DiskStore::open(&dir)?, "colorPalette");
            assert_eq!(
                palette.load()?,
                vec![hex("#3B82F6"), hex("#F97316"), hex("#22C55E")]
            );
        }
        Ok(())
    }
}
