//! Forwarding of an RDSR file to an external skin-dose engine
//!
//! Dose computation lives outside this crate. An engine receives a settings
//! object and the RDSR path and answers with a result map holding at least
//! the peak skin dose (`psd`).

use crate::error::{RdsrError, Result};
use crate::extraction::{is_rdsr, open_header};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// What the engine should do with the procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseMode {
    #[default]
    CalculateDose,
    PlotSetup,
    PlotProcedure,
}

fn default_output_format() -> String {
    "dict".to_string()
}

/// Engine settings
///
/// Only `mode` and `output_format` are interpreted here; everything else
/// (phantom, plot, normalization sections) is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseSettings {
    #[serde(default)]
    pub mode: DoseMode,

    #[serde(default = "default_output_format")]
    pub output_format: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DoseSettings {
    fn default() -> Self {
        Self {
            mode: DoseMode::default(),
            output_format: default_output_format(),
            extra: Map::new(),
        }
    }
}

impl DoseSettings {
    /// Loads settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Engine result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseOutput {
    /// Peak skin dose in mGy
    pub psd: f64,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A skin-dose engine
pub trait DoseEngine {
    /// Runs the engine; `file_path` is `None` for modes that need no procedure
    fn calculate(&self, settings: &DoseSettings, file_path: Option<&Path>) -> Result<DoseOutput>;
}

/// Engine run as an external program
///
/// The settings are written as JSON to the program's stdin, the RDSR path is
/// appended to the arguments, and a JSON object is expected on stdout.
#[derive(Debug, Clone)]
pub struct CommandDoseEngine {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandDoseEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Builder: Add leading arguments (e.g. a script path)
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl DoseEngine for CommandDoseEngine {
    fn calculate(&self, settings: &DoseSettings, file_path: Option<&Path>) -> Result<DoseOutput> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(path) = file_path {
            command.arg(path);
        }
        debug!("Running dose engine: {:?}", command);

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                RdsrError::Dose(format!("Failed to start {}: {}", self.program.display(), e))
            })?;

        let payload = serde_json::to_vec(settings)?;
        if let Some(mut stdin) = child.stdin.take() {
            // an engine may exit without reading its settings; its status decides
            match stdin.write_all(&payload) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("Dose engine closed stdin early: {}", e);
                }
                other => other?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RdsrError::Dose(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

/// Computes the skin dose of one RDSR file
///
/// # Errors
///
/// Returns [`RdsrError::NotRdsr`] if the file is DICOM but not an RDSR, a
/// DICOM error if it cannot be read, or whatever the engine reports.
pub fn compute_skin_dose(
    engine: &dyn DoseEngine,
    settings: &DoseSettings,
    file_path: &Path,
) -> Result<DoseOutput> {
    let metadata = open_header(file_path)?;
    if !is_rdsr(&metadata, file_path) {
        return Err(RdsrError::NotRdsr(file_path.to_path_buf()));
    }

    let output = engine.calculate(settings, Some(file_path))?;
    info!("Estimated psd {:.1} mGy for {}", output.psd, file_path.display());
    Ok(output)
}
