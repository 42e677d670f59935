//! Schedule export: JSON and CSV artifacts.
//!
//! The exporter is invoked once at the end of a run with the complete,
//! ordered schedule; nothing is streamed. The CSV shape flattens the
//! nested `meta` object into sibling columns so the file round-trips the
//! full compatibility shape losslessly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampaignError, Result};
use crate::models::ScheduledPost;

/// Default JSON artifact filename.
pub const DEFAULT_JSON_FILE: &str = "schedule.json";

/// Default CSV artifact filename.
pub const DEFAULT_CSV_FILE: &str = "schedule.csv";

/// Fixed CSV column order, `meta` flattened after the top-level fields.
pub const CSV_COLUMNS: [&str; 8] = [
    "campaign",
    "platform",
    "text",
    "mediaUrl",
    "timestamp",
    "theme",
    "dayIndex",
    "daypart",
];

/// Writes schedule artifacts under a directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    artifacts_dir: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing into the given directory.
    pub fn new(artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_dir: artifacts_dir.into(),
        }
    }

    /// The directory artifacts are written into.
    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    /// Returns the default artifacts directory following XDG Base
    /// Directory specification.
    pub fn default_artifacts_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence")
            .create_data_directory("artifacts")
            .map_err(|e| CampaignError::XdgDirectory(e.to_string()))
    }

    /// Write the schedule as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// * `CampaignError::FileSystem` - directory creation or write failure
    /// * `CampaignError::Serialization` - JSON encoding failure
    pub fn write_json(&self, schedule: &[ScheduledPost], filename: &str) -> Result<PathBuf> {
        let path = self.prepare(filename)?;
        let payload = serde_json::to_string_pretty(schedule)?;
        fs::write(&path, payload).map_err(|e| CampaignError::file_system(&path, e))?;
        Ok(path)
    }

    /// Write the schedule as CSV in the fixed [`CSV_COLUMNS`] order.
    ///
    /// # Errors
    ///
    /// * `CampaignError::FileSystem` - directory creation or flush failure
    /// * `CampaignError::Csv` - record encoding failure
    pub fn write_csv(&self, schedule: &[ScheduledPost], filename: &str) -> Result<PathBuf> {
        let path = self.prepare(filename)?;
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(CSV_COLUMNS)?;
        for post in schedule {
            let day_index = post.meta.day_index.to_string();
            writer.write_record([
                post.campaign.as_str(),
                post.platform.as_str(),
                post.text.as_str(),
                post.media_url.as_str(),
                post.timestamp.as_str(),
                post.meta.theme.as_str(),
                day_index.as_str(),
                post.meta.daypart.as_str(),
            ])?;
        }
        writer
            .flush()
            .map_err(|e| CampaignError::file_system(&path, e))?;
        Ok(path)
    }

    fn prepare(&self, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.artifacts_dir)
            .map_err(|e| CampaignError::file_system(&self.artifacts_dir, e))?;
        Ok(self.artifacts_dir.join(filename))
    }
}
