use std::cell::RefCell;

use crate::error::Result;
use crate::options::{Feature, ProjectOptions};

/// 対話式プロンプトのポート。
///
/// 端末描画やキー入力の処理は実装側（CLI の inquire アダプタ）に委ねる。
/// キャンセルや入力ストリームの終了は `ScaffoldError::Prompt` として返す。
pub trait ProjectPrompt {
    /// プロジェクト名を入力させる。空入力の場合は `default` を返すこと。
    fn input_project_name(&self, default: &str) -> Result<String>;

    /// 任意機能を 0 個以上選択させる。
    fn select_features(&self, choices: &[Feature]) -> Result<Vec<Feature>>;
}

/// CLI 引数などで既に与えられた回答。`None` の項目だけプロンプトで尋ねる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetAnswers {
    pub project_name: Option<String>,
    pub features: Option<Vec<Feature>>,
}

/// 回答を収集して `ProjectOptions` を組み立てる。
///
/// # Errors
///
/// プロンプトがキャンセルされた場合にエラーを返す。
pub fn collect_options<P: ProjectPrompt + ?Sized>(
    prompt: &P,
    preset: PresetAnswers,
    default_name: &str,
) -> Result<ProjectOptions> {
    let name = match preset.project_name {
        Some(name) => name,
        None => prompt.input_project_name(default_name)?,
    };
    let features = match preset.features {
        Some(features) => features,
        None => prompt.select_features(&Feature::ALL)?,
    };
    let options = ProjectOptions::from_answers(&name, &features, default_name);
    tracing::debug!(?options, "collected project options");
    Ok(options)
}

/// 事前に決めた回答を返すプロンプト。テスト用。
pub struct ScriptedPrompt {
    name_input: String,
    features: Vec<Feature>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(name_input: &str) -> Self {
        Self {
            name_input: name_input.to_string(),
            features: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_features(mut self, features: &[Feature]) -> Self {
        self.features = features.to_vec();
        self
    }

    /// 呼び出されたプロンプトの記録。
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ProjectPrompt for ScriptedPrompt {
    fn input_project_name(&self, default: &str) -> Result<String> {
        self.calls
            .borrow_mut()
            .push("input_project_name".to_string());
        if self.name_input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(self.name_input.clone())
        }
    }

    fn select_features(&self, choices: &[Feature]) -> Result<Vec<Feature>> {
        self.calls.borrow_mut().push("select_features".to_string());
        Ok(self
            .features
            .iter()
            .copied()
            .filter(|f| choices.contains(f))
            .collect())
    }
}
