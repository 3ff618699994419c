use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// プロジェクト名が空の場合に使用する既定値。
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// 任意機能。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Router,
    Query,
    Tailwind,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Router, Feature::Query, Feature::Tailwind];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Router => "router",
            Feature::Query => "query",
            Feature::Tailwind => "tailwind",
        }
    }

    /// 選択肢として表示するラベル。
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Router => "router (TanStack Router)",
            Feature::Query => "query (TanStack Query)",
            Feature::Tailwind => "tailwind (Tailwind CSS)",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "router" => Ok(Feature::Router),
            "query" => Ok(Feature::Query),
            "tailwind" => Ok(Feature::Tailwind),
            other => Err(format!(
                "unknown feature '{other}' (expected router, query or tailwind)"
            )),
        }
    }
}

/// 1 回の実行で収集されたユーザーの選択内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub project_name: String,
    pub router: bool,
    pub query: bool,
    pub tailwind: bool,
}

impl ProjectOptions {
    /// プロンプトの回答から選択内容を組み立てる。
    ///
    /// 空白のみの名前は `default_name` に置き換える。機能はメンバーシップで判定する。
    pub fn from_answers(name: &str, features: &[Feature], default_name: &str) -> Self {
        let trimmed = name.trim();
        let project_name = if trimmed.is_empty() {
            default_name.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            project_name,
            router: features.contains(&Feature::Router),
            query: features.contains(&Feature::Query),
            tailwind: features.contains(&Feature::Tailwind),
        }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Router => self.router,
            Feature::Query => self.query,
            Feature::Tailwind => self.tailwind,
        }
    }

    /// 有効な機能の一覧（`Feature::ALL` の順）。
    pub fn features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}
