use tracing::info;

use super::Sheet;
use crate::config::Config;
use crate::error::Result;
use crate::storage::parse_definitions;

impl Sheet {
    /// Build a sheet from the configured source and bring it to a fixed point.
    ///
    /// Source failures are returned before any evaluation happens.
    pub fn load(config: &Config) -> Result<Self> {
        let content = config.source.read()?;
        let mut sheet = Self::from_definitions(&content)?.with_max_passes(config.max_passes);
        let passes = sheet.recalculate()?;
        info!(
            source = %config.source.describe(),
            cells = sheet.len(),
            passes,
            "loaded sheet"
        );
        Ok(sheet)
    }

    /// Parse definitions text without recalculating.
    pub fn from_definitions(content: &str) -> Result<Self> {
        Ok(Self::new(parse_definitions(content)?))
    }
}
