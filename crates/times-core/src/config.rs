use crate::error::Result;
use crate::width::Width;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "times.yaml";

/// Counts above this take long enough to enumerate that a sample is likely a typo.
const SLOW_SAMPLE: i64 = 1 << 32;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

/// Counts checked for the widths too wide to enumerate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    #[serde(rename = "i32", default = "default_i32_samples")]
    pub int32: Vec<i64>,
    #[serde(rename = "i64", default = "default_i64_samples")]
    pub int64: Vec<i64>,
}

fn default_i32_samples() -> Vec<i64> {
    vec![i64::from(i32::MIN), 0, 1, i64::from(i32::MAX)]
}

fn default_i64_samples() -> Vec<i64> {
    vec![i64::MIN, 0, 1, 100_000]
}

impl Default for Samples {
    fn default() -> Self {
        Self {
            int32: default_i32_samples(),
            int64: default_i64_samples(),
        }
    }
}

impl Samples {
    /// Configured samples for `width`, or `None` for widths that are
    /// always enumerated exhaustively.
    pub fn for_width(&self, width: Width) -> Option<&[i64]> {
        match width {
            Width::I8 | Width::I16 => None,
            Width::I32 => Some(self.int32.as_slice()),
            Width::I64 => Some(self.int64.as_slice()),
        }
    }
}

// ---------------------------------------------------------------------------
// VerifyConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_widths")]
    pub widths: Vec<Width>,
    #[serde(default)]
    pub samples: Samples,
    /// Stop recording failures for a width after this many; 0 records all.
    #[serde(default = "default_max_failures")]
    pub max_failures: usize,
}

fn default_widths() -> Vec<Width> {
    Width::ALL.to_vec()
}

fn default_max_failures() -> usize {
    16
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            widths: default_widths(),
            samples: Samples::default(),
            max_failures: default_max_failures(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub verify: VerifyConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// Walk upward from `start` looking for a `times.yaml`.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Problems that would make `verify` fail are reported at `Error` level.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let verify = &self.verify;

        if verify.widths.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "verify.widths is empty: nothing will be checked".to_string(),
            });
        }

        let mut seen_widths = Vec::new();
        for width in &verify.widths {
            if seen_widths.contains(width) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("width '{width}' is listed more than once in verify.widths"),
                });
            }
            seen_widths.push(*width);
        }

        for width in [Width::I32, Width::I64] {
            let Some(samples) = verify.samples.for_width(width) else {
                continue;
            };
            if samples.is_empty() && verify.widths.contains(&width) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("verify.samples.{width} is empty but {width} is selected"),
                });
            }
            for &bad in samples.iter().filter(|&&s| !width.contains(s)) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("sample {bad} in verify.samples.{width} is outside the {width} range"),
                });
            }

            let mut sorted = samples.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            if sorted.len() != samples.len() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("duplicate samples in verify.samples.{width}"),
                });
            }

            for &sample in samples
                .iter()
                .filter(|&&s| s > SLOW_SAMPLE && width.contains(s))
            {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "sample {sample} for {width} invokes the action {sample} times; expect a very long run"
                    ),
                });
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_cover_every_width() {
        let cfg = Config::default();
        assert_eq!(cfg.verify.widths, Width::ALL.to_vec());
        assert_eq!(
            cfg.verify.samples.for_width(Width::I32).unwrap(),
            &[i64::from(i32::MIN), 0, 1, i64::from(i32::MAX)]
        );
        assert_eq!(
            cfg.verify.samples.for_width(Width::I64).unwrap(),
            &[i64::MIN, 0, 1, 100_000]
        );
        assert!(cfg.verify.samples.for_width(Width::I8).is_none());
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("verify:\n  widths: [i8, i32]\n").unwrap();
        assert_eq!(cfg.verify.widths, vec![Width::I8, Width::I32]);
        assert_eq!(cfg.verify.samples, Samples::default());
        assert_eq!(cfg.verify.max_failures, 16);

        let empty: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut cfg = Config::default();
        cfg.verify.samples.int64 = vec![-5, 0, 7];
        cfg.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn discover_walks_upward() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{}\n").unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            Config::discover(&nested),
            Some(dir.path().join(CONFIG_FILE))
        );
    }

    #[test]
    fn out_of_range_sample_is_an_error() {
        let mut cfg = Config::default();
        cfg.verify.samples.int32.push(i64::from(i32::MAX) + 1);
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);
        assert!(warnings[0].message.contains("2147483648"));
    }

    #[test]
    fn empty_samples_for_selected_width_is_an_error() {
        let mut cfg = Config::default();
        cfg.verify.samples.int64.clear();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);

        cfg.verify.widths = vec![Width::I8];
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn warns_on_duplicates_and_slow_samples() {
        let mut cfg = Config::default();
        cfg.verify.widths.push(Width::I8);
        cfg.verify.samples.int64 = vec![0, 0, i64::MAX];

        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Warning));
        assert!(warnings[0].message.contains("more than once"));
        assert!(warnings[1].message.contains("duplicate samples"));
        assert!(warnings[2].message.contains("very long run"));
    }

    #[test]
    fn empty_width_list_warns() {
        let mut cfg = Config::default();
        cfg.verify.widths.clear();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("nothing will be checked"));
    }
}
