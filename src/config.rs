use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" 이면 시스템 로케일을 따른다.
    pub language: String,
    /// 화면에 찍는 mm 값의 소수 자릿수
    pub precision: usize,
    pub output: OutputFormat,
    /// 이웃 값 옆에 게이지 번호/분수 표기를 함께 보여줄지
    pub show_neighbor_designations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            precision: 3,
            output: OutputFormat::Text,
            show_neighbor_designations: true,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("precision = 2\noutput = \"json\"\n").unwrap();
        assert_eq!(cfg.precision, 2);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.language, "auto");
        assert!(cfg.show_neighbor_designations);
    }

    #[test]
    fn missing_file_is_created() {
        let path = std::env::temp_dir().join(format!(
            "thickness_finder_cfg_{}.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let again = load_or_default(&path).unwrap();
        assert_eq!(again, cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = toml::from_str::<Config>("precision = \"three\"").unwrap_err();
        assert!(ConfigError::from(err).to_string().starts_with("config parse error"));
    }
}
