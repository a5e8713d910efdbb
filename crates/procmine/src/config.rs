//! Analysis configuration.
//!
//! Configuration can be built in code with the `with_*` methods or read
//! from TOML. Every field has a default, so a partial file is valid:
//!
//! ```toml
//! chunk_size = 500
//! bottleneck_top_k = 3
//!
//! [layout]
//! wrap_columns = 4
//! ```

use crate::error::{MiningError, Result};
use crate::import::ImportOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid layout parameters for graph presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal spacing between DFG nodes.
    pub x_spacing: f64,
    /// Vertical spacing between DFG rows.
    pub y_spacing: f64,
    /// DFG nodes per row.
    pub wrap_columns: usize,
    /// Upper bound on rendered DFG edge length.
    pub max_edge_length: f64,
    /// Constant added to the endpoint distance of a DFG edge.
    pub edge_length_padding: f64,
    /// Grid spacing for net nodes (both axes).
    pub net_spacing: f64,
    /// Net nodes per row.
    pub net_wrap_columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: 150.0,
            y_spacing: 100.0,
            wrap_columns: 3,
            max_edge_length: 200.0,
            edge_length_padding: 50.0,
            net_spacing: 150.0,
            net_wrap_columns: 10,
        }
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Traces per batch in aggregation passes.
    pub chunk_size: usize,
    /// Number of bottleneck edges to report.
    pub bottleneck_top_k: usize,
    /// Number of ranked variants before folding the rest into `Other`.
    pub variant_top_n: usize,
    /// Presentation layout.
    pub layout: LayoutConfig,
    /// Log import options.
    pub import: ImportOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            bottleneck_top_k: 5,
            variant_top_n: 10,
            layout: LayoutConfig::default(),
            import: ImportOptions::default(),
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the aggregation batch size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the number of bottlenecks to report.
    pub fn with_bottleneck_top_k(mut self, k: usize) -> Self {
        self.bottleneck_top_k = k;
        self
    }

    /// Set the number of ranked variants.
    pub fn with_variant_top_n(mut self, n: usize) -> Self {
        self.variant_top_n = n;
        self
    }

    /// Set the layout parameters.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the import options.
    pub fn with_import(mut self, import: ImportOptions) -> Self {
        self.import = import;
        self
    }

    /// Parse a TOML configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AnalysisConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(MiningError::Config("chunk_size must be at least 1".into()));
        }
        if self.layout.wrap_columns == 0 || self.layout.net_wrap_columns == 0 {
            return Err(MiningError::Config(
                "layout wrap columns must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
