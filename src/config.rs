// Copyright 2025 Cowboy AI, LLC.

//! Configuration for category construction and graph export

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::CategoryResult;
use crate::export::GraphFileType;

/// Environment variable overriding the graph renderer program
pub const RENDERER_ENV_VAR: &str = "RELATION_CATEGORY_DOT";

/// Default graph renderer, resolved through `PATH`
pub const DEFAULT_RENDERER: &str = "dot";

/// Whether immutable categories re-check morphism endpoints on construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Every morphism endpoint must be a member of the element set
    #[default]
    Validated,
    /// Skip the check; the caller vouches for the input
    Trusted,
}

/// External renderer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Renderer executable
    pub program: PathBuf,
    /// Image format produced when none is given explicitly
    pub format: GraphFileType,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_RENDERER),
            format: GraphFileType::default(),
        }
    }
}

impl RenderConfig {
    /// Defaults, with the program taken from [`RENDERER_ENV_VAR`] when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(program) = std::env::var_os(RENDERER_ENV_VAR).filter(|p| !p.is_empty()) {
            config.program = PathBuf::from(program);
        }
        config
    }

    /// Replace the renderer program
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the default image format
    pub fn with_format(mut self, format: GraphFileType) -> Self {
        self.format = format;
        self
    }
}

/// DOT serialization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Identifier written after `digraph`
    pub graph_name: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
        }
    }
}

/// Combined export settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Graph description settings
    pub dot: DotOptions,
    /// Renderer settings
    pub render: RenderConfig,
}

impl ExportConfig {
    /// Parse from JSON; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> CategoryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
