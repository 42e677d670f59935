//! Result wrapper types for displaying run outcomes.

use std::fmt;
use std::path::PathBuf;

use super::collections::Schedule;
use crate::pipeline::PipelineState;

/// Wrapper type for displaying the result of a completed campaign run.
///
/// Formats the run with:
/// - Header with the campaign name
/// - Slot/post counts
/// - The full schedule
/// - Paths of written export artifacts
pub struct RunResult<'a> {
    pub state: &'a PipelineState,
    pub json_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

impl<'a> RunResult<'a> {
    /// Create a run result with its export artifact paths.
    pub fn new(state: &'a PipelineState, json_path: PathBuf, csv_path: Option<PathBuf>) -> Self {
        Self {
            state,
            json_path,
            csv_path,
        }
    }
}

impl fmt::Display for RunResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Campaign: {}", self.state.brief.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "Planned {} days, scheduled {} posts.",
            self.state.plan.len(),
            self.state.schedule.len()
        )?;
        writeln!(f)?;
        writeln!(f, "## Schedule")?;
        writeln!(f)?;
        write!(f, "{}", Schedule(&self.state.schedule))?;
        writeln!(f, "## Artifacts")?;
        writeln!(f)?;
        writeln!(f, "- JSON: {}", self.json_path.display())?;
        if let Some(csv) = &self.csv_path {
            writeln!(f, "- CSV: {}", csv.display())?;
        }
        Ok(())
    }
}
