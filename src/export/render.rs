// Copyright 2025 Cowboy AI, LLC.

//! External graph rendering
//!
//! Rendering shells out to a Graphviz-compatible program
//! (`<program> -T<format> <dot file> -o <output>`). The process call sits
//! behind [`CommandRunner`] so the rest of the crate never touches OS process
//! APIs and the renderer can be exercised without Graphviz installed.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::category::Category;
use crate::config::{DotOptions, RenderConfig};
use crate::errors::{CategoryError, CategoryResult};

use super::dot::write_category_dot;

/// Image formats the renderer is asked to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphFileType {
    /// Raster image
    Png,
    /// Page description document
    #[default]
    Pdf,
}

impl GraphFileType {
    /// Renderer flag selecting this format
    pub fn format_flag(&self) -> &'static str {
        match self {
            GraphFileType::Png => "-Tpng",
            GraphFileType::Pdf => "-Tpdf",
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            GraphFileType::Png => "png",
            GraphFileType::Pdf => "pdf",
        }
    }
}

/// Result of running an external command to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutcome {
    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program synchronously
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<CommandOutcome>;
}

/// [`CommandRunner`] backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<CommandOutcome> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutcome {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Renders DOT files into images with an external program
#[derive(Debug, Clone)]
pub struct GraphRenderer<R = SystemCommandRunner> {
    config: RenderConfig,
    runner: R,
}

impl GraphRenderer<SystemCommandRunner> {
    /// Renderer that launches real processes
    pub fn new(config: RenderConfig) -> Self {
        Self::with_runner(config, SystemCommandRunner)
    }
}

impl<R: CommandRunner> GraphRenderer<R> {
    /// Renderer using a custom command runner
    pub fn with_runner(config: RenderConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `dot_path` to `output_path` in the configured format
    pub fn render(&self, dot_path: &Path, output_path: &Path) -> CategoryResult<()> {
        self.render_as(dot_path, output_path, self.config.format)
    }

    /// Render `dot_path` to `output_path` as `format`.
    ///
    /// A launch failure, a non-zero exit or a signal termination is logged
    /// and returned as [`CategoryError::ExternalToolFailure`].
    pub fn render_as(
        &self,
        dot_path: &Path,
        output_path: &Path,
        format: GraphFileType,
    ) -> CategoryResult<()> {
        let program = &self.config.program;
        let tool = program.display().to_string();
        let args = [
            OsString::from(format.format_flag()),
            dot_path.as_os_str().to_owned(),
            OsString::from("-o"),
            output_path.as_os_str().to_owned(),
        ];

        let outcome = self.runner.run(program, &args).map_err(|e| {
            error!(tool = %tool, error = %e, "failed to launch graph renderer");
            CategoryError::ExternalToolFailure {
                tool: tool.clone(),
                message: format!("failed to launch: {e}"),
            }
        })?;

        if !outcome.success() {
            let status = match outcome.code {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            error!(tool = %tool, %status, stderr = %outcome.stderr.trim(), "graph renderer failed");
            return Err(CategoryError::ExternalToolFailure {
                tool,
                message: status,
            });
        }

        info!(output = %output_path.display(), format = format.extension(), "rendered graph");
        Ok(())
    }

    /// Write `category` as DOT to `dot_path`, then render it to `output_path`
    pub fn render_category<C: Category>(
        &self,
        category: &C,
        dot_path: &Path,
        output_path: &Path,
        options: &DotOptions,
    ) -> CategoryResult<()> {
        write_category_dot(category, dot_path, options)?;
        self.render(dot_path, output_path)
    }
}
