use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::options::DEFAULT_PROJECT_NAME;
use crate::package_manager::PackageManager;

/// 既定の設定ファイル名。カレントディレクトリから探す。
pub const DEFAULT_CONFIG_FILE: &str = "vitekit.yaml";

/// Vite の既定テンプレート。
pub const DEFAULT_TEMPLATE: &str = "react-ts";

/// CLI 全体の設定を保持する構造体。
///
/// 設定ファイル (vitekit.yaml) から読み込む。記述のない項目は既定値を使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// パッケージマネージャー
    pub package_manager: PackageManager,
    /// `create vite` に渡すテンプレート識別子
    pub template: String,
    /// プロジェクト名が空の場合の既定値
    pub default_project_name: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::default(),
            template: DEFAULT_TEMPLATE.to_string(),
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

/// 設定ファイルを読み込む。
///
/// ファイルが存在しない場合はデフォルト値を返す。
///
/// # Errors
///
/// 読み込みまたは YAML のパースに失敗した場合にエラーを返す。
pub fn load_config(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(CliConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    // 空ファイルは null としてパースされるため既定値扱いにする
    if content.trim().is_empty() {
        return Ok(CliConfig::default());
    }
    let mut config: CliConfig =
        serde_yaml::from_str(&content).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if config.default_project_name.trim().is_empty() {
        config.default_project_name = DEFAULT_PROJECT_NAME.to_string();
    }
    if config.template.trim().is_empty() {
        config.template = DEFAULT_TEMPLATE.to_string();
    }
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
