//! Layered configuration for the fixture generators.
//!
//! Precedence: CLI > env (`FIXTUREGEN_*`) > config files > defaults. CLI
//! overrides are applied by the binary on top of [`AppConfig::load`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::GenError;

pub const DEFAULT_LEXICON_SEED: u64 = 69420;
pub const DEFAULT_MANIFEST_SUITE: &str = "tema_3_sd-k-d-trees";
pub const CONFIG_FILE_NAME: &str = "fixturegen.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Output root of the point workload (`data/` and `in/` live under it).
    pub points_root: Option<PathBuf>,
    /// Seed for the point workload; unseeded when absent.
    pub points_seed: Option<u64>,
    /// Output root of the lexicon workload.
    pub lexicon_root: Option<PathBuf>,
    pub lexicon_seed: Option<u64>,
    /// Dictionary word list; relative paths resolve against `lexicon_root`.
    pub dictionary: Option<PathBuf>,
    /// Directory of book texts; relative paths resolve against `lexicon_root`.
    pub books_dir: Option<PathBuf>,
    pub manifest_suite: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<u32>,
    /// A `log4rs.yaml`; when set it replaces the built-in logging setup.
    pub log_config: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the process environment and the standard config locations.
    ///
    /// # Errors
    /// Returns an error if an explicit config file is missing, or any config
    /// file found cannot be parsed.
    pub fn load(cli_cfg: Option<&Path>) -> Result<Self, GenError> {
        let env = |k: &str| std::env::var(k).ok();
        let paths = config_paths(cli_cfg, &env);
        Self::resolve(cli_cfg, &paths, env)
    }

    /// Resolve against an explicit list of candidate files and an env lookup.
    ///
    /// # Errors
    /// See [`AppConfig::load`].
    pub fn resolve<F>(cli_cfg: Option<&Path>, paths: &[PathBuf], env: F) -> Result<Self, GenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = cli_cfg {
            if !p.exists() {
                return Err(GenError::Config(format!("config file not found: {}", p.display())));
            }
        }
        let mut files = AppConfig::default();
        for p in paths {
            if p.exists() {
                log::debug!("config: reading {}", p.display());
                files.merge_missing(Self::from_file(p)?);
            }
        }
        let mut cfg = Self::from_env(env)?;
        cfg.merge_missing(files);
        Ok(cfg)
    }

    /// Parse one TOML config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, GenError> {
        let s = crate::fsutil::read_text(path)?;
        toml::from_str::<AppConfig>(&s)
            .map_err(|e| GenError::Config(format!("{}: {}", path.display(), e)))
    }

    fn from_env<F>(env: F) -> Result<Self, GenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(AppConfig {
            points_root: env("FIXTUREGEN_POINTS_ROOT").map(PathBuf::from),
            points_seed: parse_env(&env, "FIXTUREGEN_POINTS_SEED")?,
            lexicon_root: env("FIXTUREGEN_LEXICON_ROOT").map(PathBuf::from),
            lexicon_seed: parse_env(&env, "FIXTUREGEN_LEXICON_SEED")?,
            dictionary: env("FIXTUREGEN_DICTIONARY").map(PathBuf::from),
            books_dir: env("FIXTUREGEN_BOOKS_DIR").map(PathBuf::from),
            manifest_suite: env("FIXTUREGEN_MANIFEST_SUITE").map(PathBuf::from),
            log_dir: env("FIXTUREGEN_LOG_DIR").map(PathBuf::from),
            log_level: env("FIXTUREGEN_LOG_LEVEL"),
            log_retention: parse_env(&env, "FIXTUREGEN_LOG_RETENTION")?,
            log_config: env("FIXTUREGEN_LOG_CONFIG").map(PathBuf::from),
        })
    }

    /// Fill every unset field from `other`.
    pub fn merge_missing(&mut self, other: AppConfig) {
        if self.points_root.is_none() { self.points_root = other.points_root; }
        if self.points_seed.is_none() { self.points_seed = other.points_seed; }
        if self.lexicon_root.is_none() { self.lexicon_root = other.lexicon_root; }
        if self.lexicon_seed.is_none() { self.lexicon_seed = other.lexicon_seed; }
        if self.dictionary.is_none() { self.dictionary = other.dictionary; }
        if self.books_dir.is_none() { self.books_dir = other.books_dir; }
        if self.manifest_suite.is_none() { self.manifest_suite = other.manifest_suite; }
        if self.log_dir.is_none() { self.log_dir = other.log_dir; }
        if self.log_level.is_none() { self.log_level = other.log_level; }
        if self.log_retention.is_none() { self.log_retention = other.log_retention; }
        if self.log_config.is_none() { self.log_config = other.log_config; }
    }

    pub fn points_root(&self) -> PathBuf {
        self.points_root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn lexicon_root(&self) -> PathBuf {
        self.lexicon_root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn lexicon_seed(&self) -> u64 {
        self.lexicon_seed.unwrap_or(DEFAULT_LEXICON_SEED)
    }

    pub fn dictionary(&self) -> PathBuf {
        let p = self.dictionary.clone().unwrap_or_else(|| PathBuf::from("words_alpha.txt"));
        self.lexicon_root().join(p)
    }

    pub fn books_dir(&self) -> PathBuf {
        let p = self.books_dir.clone().unwrap_or_else(|| PathBuf::from("books"));
        self.lexicon_root().join(p)
    }

    pub fn manifest_suite(&self) -> PathBuf {
        self.manifest_suite.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_SUITE))
    }
}

// Numeric env values must parse into the field's type; out of range is an error.
fn parse_env<T, F>(env: &F, key: &str) -> Result<Option<T>, GenError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    env(key)
        .map(|s| s.trim().parse::<T>().map_err(|e| GenError::Config(format!("{key}: {e}"))))
        .transpose()
}

/// Candidate config files, highest precedence first: explicit path,
/// `FIXTUREGEN_CONFIG`, the user config dir, then the working directory.
pub fn config_paths<F>(cli_cfg: Option<&Path>, env: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = cli_cfg { paths.push(p.to_path_buf()); }
    if let Some(p) = env("FIXTUREGEN_CONFIG") { paths.push(PathBuf::from(p)); }
    if let Some(dir) = dirs_next::config_dir() { paths.push(dir.join(CONFIG_FILE_NAME)); }
    if let Ok(cur) = std::env::current_dir() { paths.push(cur.join(CONFIG_FILE_NAME)); }
    paths
}
