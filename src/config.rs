//! JSON configuration.
//!
//! ```json
//! { "binder": { "reportAmbiguousClone": true, "maxExpressionDepth": 64 } }
//! ```
//!
//! Every field is optional; missing fields take `BinderOptions::default()`.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wex_checker::BinderOptions;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationOptions {
    #[serde(default)]
    pub binder: BinderConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinderConfig {
    #[serde(default)]
    pub report_ambiguous_clone: bool,
    #[serde(default = "default_max_expression_depth")]
    pub max_expression_depth: u32,
}

fn default_max_expression_depth() -> u32 {
    BinderOptions::default().max_expression_depth
}

impl Default for BinderConfig {
    fn default() -> Self {
        let options = BinderOptions::default();
        BinderConfig {
            report_ambiguous_clone: options.report_ambiguous_clone,
            max_expression_depth: options.max_expression_depth,
        }
    }
}

impl CompilationOptions {
    pub fn from_json_str(source: &str) -> Result<Self> {
        let options: CompilationOptions =
            serde_json::from_str(source).context("failed to parse compilation options JSON")?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read compilation options: {}", path.display()))?;
        Self::from_json_str(&source)
            .with_context(|| format!("invalid compilation options: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.binder.max_expression_depth == 0 {
            bail!("binder.maxExpressionDepth must be at least 1");
        }
        Ok(())
    }

    pub fn binder_options(&self) -> BinderOptions {
        BinderOptions {
            report_ambiguous_clone: self.binder.report_ambiguous_clone,
            max_expression_depth: self.binder.max_expression_depth,
        }
    }
}
