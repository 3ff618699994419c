use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// ワークフローのステージ。
///
/// 各ステージは前のステージが成功した場合にのみ実行される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// 設定ファイルの読み込み（プロンプト前）
    Setup,
    Prompt,
    Scaffold,
    Config,
    Install,
    Tailwind,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Setup => "setup",
            Stage::Prompt => "prompt",
            Stage::Scaffold => "scaffold",
            Stage::Config => "config",
            Stage::Install => "install",
            Stage::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 雛形生成のエラー。
///
/// どのバリアントも失敗したステージを保持する。
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("[{stage}] `{command}` failed ({})", exit_label(code))]
    CommandFailed {
        stage: Stage,
        command: String,
        code: Option<i32>,
    },

    #[error("[{stage}] failed to run `{command}`: {source}")]
    CommandSpawn {
        stage: Stage,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("[{stage}] failed to write {}: {source}", path.display())]
    Write {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[scaffold] project directory was not created: {}", .0.display())]
    MissingProjectDir(PathBuf),

    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl ScaffoldError {
    /// エラーが発生したステージ。
    pub fn stage(&self) -> Stage {
        match self {
            ScaffoldError::Config { .. } => Stage::Setup,
            ScaffoldError::Prompt(_) => Stage::Prompt,
            ScaffoldError::CommandFailed { stage, .. }
            | ScaffoldError::CommandSpawn { stage, .. }
            | ScaffoldError::Write { stage, .. } => *stage,
            ScaffoldError::MissingProjectDir(_) => Stage::Scaffold,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code: {code}"),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
