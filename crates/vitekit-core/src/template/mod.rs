pub mod tailwind;
pub mod vite_config;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError, Stage};

/// 生成ファイル。パスはプロジェクトルートからの相対パス。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(relative_path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents: contents.into(),
        }
    }

    /// プロジェクトルート配下に書き込む。既存の内容は上書きする。
    ///
    /// 親ディレクトリは作成しない（雛形生成で作られている前提）。
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合、`stage` を付けたエラーを返す。
    pub fn write_to(&self, project_root: &Path, stage: Stage) -> Result<PathBuf> {
        let path = project_root.join(&self.relative_path);
        tracing::debug!(path = %path.display(), bytes = self.contents.len(), "writing file");
        fs::write(&path, &self.contents).map_err(|source| ScaffoldError::Write {
            stage,
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
