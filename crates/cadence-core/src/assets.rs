//! Asset acquisition: one visual per day-slot.
//!
//! Providers sit behind the [`AssetProvider`] trait and are chosen at
//! pipeline construction time. The pipeline itself only requires a stable
//! id, a resolvable URL, and the originating prompt; when a provider fails,
//! the composition point substitutes the deterministic placeholder asset so
//! a run never stalls on acquisition.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{CampaignError, Result};
use crate::models::Asset;

/// How many prompt characters the placeholder URL label keeps.
const LABEL_CHARS: usize = 40;

/// Capability seam for producing one visual asset from a text prompt.
///
/// Implementations must be safe for concurrent use; independent pipeline
/// runs may share a provider.
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Produce an asset for the prompt, or fail.
    ///
    /// A failure here is recoverable: callers fall back to
    /// [`placeholder_asset`] rather than aborting the run.
    async fn create(&self, prompt: &str) -> Result<Asset>;
}

/// Construction-time provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Remote placeholder card URLs, no I/O
    #[default]
    Placeholder,
    /// SVG cards written under the artifacts directory
    LocalImage,
}

/// Provider returning deterministic placeholder card URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

#[async_trait]
impl AssetProvider for PlaceholderProvider {
    async fn create(&self, prompt: &str) -> Result<Asset> {
        Ok(placeholder_asset(prompt))
    }
}

/// Provider rendering an SVG card per asset under `<dir>/asset_<id>.svg`
/// and returning its `file://` URL.
#[derive(Debug, Clone)]
pub struct LocalImageProvider {
    images_dir: PathBuf,
}

impl LocalImageProvider {
    /// Creates a provider writing into the given directory.
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }
}

#[async_trait]
impl AssetProvider for LocalImageProvider {
    async fn create(&self, prompt: &str) -> Result<Asset> {
        let id = new_asset_id();
        tokio::fs::create_dir_all(&self.images_dir)
            .await
            .map_err(|e| CampaignError::file_system(&self.images_dir, e))?;

        let path = self.images_dir.join(format!("{id}.svg"));
        tokio::fs::write(&path, render_card(prompt))
            .await
            .map_err(|e| CampaignError::file_system(&path, e))?;

        Ok(Asset {
            id,
            url: format!("file://{}", path.display()),
            prompt: prompt.to_string(),
        })
    }
}

/// The deterministic fallback asset: a placeholder card URL derived purely
/// from the truncated, percent-encoded prompt.
pub fn placeholder_asset(prompt: &str) -> Asset {
    let label: String = prompt.chars().take(LABEL_CHARS).collect();
    Asset {
        id: new_asset_id(),
        url: format!(
            "https://placehold.co/1200x675?text={}",
            urlencoding::encode(&label)
        ),
        prompt: prompt.to_string(),
    }
}

fn new_asset_id() -> String {
    format!("asset_{}", Uuid::new_v4().simple())
}

/// 1200x675 SVG card with the prompt as caption text.
fn render_card(prompt: &str) -> String {
    let caption: String = prompt.chars().take(LABEL_CHARS).collect();
    let caption = caption
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="675">
  <rect width="1200" height="675" fill="#1f2430"/>
  <text x="600" y="345" font-family="sans-serif" font-size="36" fill="#e6e6e6" text-anchor="middle">{caption}</text>
</svg>
"##
    )
}

static REGISTRY: LazyLock<Mutex<HashMap<String, Asset>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Process-wide advisory registry of created assets.
///
/// Lookup by id only; nothing in scheduling depends on it, and entries are
/// never mutated after insertion.
pub struct AssetRegistry;

impl AssetRegistry {
    /// Record an asset. Lock poisoning is ignored: the registry is
    /// advisory and a lost record is harmless.
    pub fn record(asset: &Asset) {
        if let Ok(mut map) = REGISTRY.lock() {
            map.insert(asset.id.clone(), asset.clone());
        }
    }

    /// Look up a previously recorded asset by id.
    pub fn lookup(id: &str) -> Option<Asset> {
        REGISTRY.lock().ok().and_then(|map| map.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_provider_url_shape() {
        let asset = PlaceholderProvider
            .create("AI writing tool | awareness | creators")
            .await
            .unwrap();
        assert!(asset.id.starts_with("asset_"));
        assert!(asset
            .url
            .starts_with("https://placehold.co/1200x675?text=AI%20writing%20tool"));
        assert_eq!(asset.prompt, "AI writing tool | awareness | creators");
    }

    #[test]
    fn test_placeholder_asset_truncates_label() {
        let long_prompt = "x".repeat(200);
        let asset = placeholder_asset(&long_prompt);
        assert!(asset.url.ends_with(&"x".repeat(LABEL_CHARS)));
        assert_eq!(asset.prompt, long_prompt);
    }

    #[test]
    fn test_placeholder_asset_ids_unique() {
        let a = placeholder_asset("same prompt");
        let b = placeholder_asset("same prompt");
        assert_ne!(a.id, b.id);
        assert_eq!(a.url, b.url);
    }

    #[tokio::test]
    async fn test_local_image_provider_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalImageProvider::new(dir.path());
        let asset = provider.create("launch teaser & more").await.unwrap();

        assert!(asset.url.starts_with("file://"));
        let path = dir.path().join(format!("{}.svg", asset.id));
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("launch teaser &amp; more"));
    }

    #[test]
    fn test_registry_lookup() {
        let asset = placeholder_asset("registry probe");
        AssetRegistry::record(&asset);
        assert_eq!(AssetRegistry::lookup(&asset.id), Some(asset));
        assert_eq!(AssetRegistry::lookup("asset_missing"), None);
    }
}
