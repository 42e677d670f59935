//! Builder for creating and configuring Pipeline instances.

use std::path::{Path, PathBuf};

use super::Pipeline;
use crate::assets::{AssetProvider, LocalImageProvider, PlaceholderProvider, ProviderKind};
use crate::error::Result;
use crate::export::Exporter;
use crate::intake::BriefDefaults;

/// Resolved pipeline configuration.
///
/// An explicitly constructed value with named fields, assembled once by
/// the builder and passed where needed. Never cached process-wide.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Defaults applied to fields the prompt is silent on
    pub brief_defaults: BriefDefaults,

    /// Which asset provider the pipeline was built with
    pub provider_kind: ProviderKind,

    /// Directory exports and locally rendered images land in
    pub artifacts_dir: PathBuf,
}

/// Builder for creating and configuring Pipeline instances.
#[derive(Default)]
pub struct PipelineBuilder {
    timezone: Option<String>,
    days: Option<u8>,
    provider_kind: ProviderKind,
    provider: Option<Box<dyn AssetProvider>>,
    artifacts_dir: Option<PathBuf>,
}

impl PipelineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timezone assumed when a prompt names none.
    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the campaign length assumed when a prompt names none.
    pub fn with_default_days(mut self, days: u8) -> Self {
        self.days = Some(days);
        self
    }

    /// Selects one of the built-in asset providers.
    pub fn with_provider(mut self, kind: ProviderKind) -> Self {
        self.provider_kind = kind;
        self
    }

    /// Installs a custom asset provider, overriding the built-in selection.
    ///
    /// Mainly for embedders and tests that need to observe or inject
    /// provider behavior.
    pub fn with_asset_provider(mut self, provider: Box<dyn AssetProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets a custom artifacts directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cadence/artifacts` or
    /// `~/.local/share/cadence/artifacts`
    pub fn with_artifacts_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.artifacts_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured pipeline instance.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::XdgDirectory` if no artifacts directory was
    /// given and the XDG default cannot be created.
    pub fn build(self) -> Result<Pipeline> {
        let artifacts_dir = match self.artifacts_dir {
            Some(dir) => dir,
            None => Exporter::default_artifacts_dir()?,
        };

        let mut defaults = BriefDefaults::default();
        if let Some(timezone) = self.timezone {
            defaults.timezone = timezone;
        }
        if let Some(days) = self.days {
            defaults.days = days;
        }

        let provider: Box<dyn AssetProvider> = match self.provider {
            Some(provider) => provider,
            None => match self.provider_kind {
                ProviderKind::Placeholder => Box::new(PlaceholderProvider),
                ProviderKind::LocalImage => {
                    Box::new(LocalImageProvider::new(artifacts_dir.join("images")))
                }
            },
        };

        Ok(Pipeline {
            config: PipelineConfig {
                brief_defaults: defaults,
                provider_kind: self.provider_kind,
                artifacts_dir,
            },
            provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = PipelineBuilder::new()
            .with_artifacts_dir(Some(dir.path()))
            .build()
            .unwrap();

        let config = pipeline.config();
        assert_eq!(config.provider_kind, ProviderKind::Placeholder);
        assert_eq!(config.brief_defaults.days, 7);
        assert_eq!(config.brief_defaults.timezone, "Asia/Karachi");
        assert_eq!(config.artifacts_dir, dir.path());
    }

    #[test]
    fn test_builder_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = PipelineBuilder::new()
            .with_default_timezone("Europe/Berlin")
            .with_default_days(3)
            .with_provider(ProviderKind::LocalImage)
            .with_artifacts_dir(Some(dir.path()))
            .build()
            .unwrap();

        let config = pipeline.config();
        assert_eq!(config.provider_kind, ProviderKind::LocalImage);
        assert_eq!(config.brief_defaults.days, 3);
        assert_eq!(config.brief_defaults.timezone, "Europe/Berlin");
    }
}
