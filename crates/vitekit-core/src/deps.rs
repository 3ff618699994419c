use serde::{Deserialize, Serialize};

use crate::options::{Feature, ProjectOptions};

/// 常にインストールするランタイム依存。
pub const BASE_DEPENDENCIES: &[&str] = &["react-router-dom", "@types/react-router-dom"];

/// 常にインストールする開発依存。
pub const BASE_DEV_DEPENDENCIES: &[&str] = &["prettier", "eslint"];

/// 機能ごとに追加するランタイム依存のペア。
pub fn feature_packages(feature: Feature) -> [&'static str; 2] {
    match feature {
        Feature::Router => ["@tanstack/react-router", "@tanstack/router-devtools"],
        Feature::Query => ["@tanstack/react-query", "@tanstack/react-query-devtools"],
        Feature::Tailwind => ["tailwindcss", "@tailwindcss/vite"],
    }
}

/// インストール対象の依存一覧。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPlan {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl DependencyPlan {
    /// 固定の基本一覧に、有効な機能のペアを router, query, tailwind の順で追加する。
    pub fn for_options(options: &ProjectOptions) -> Self {
        let mut dependencies: Vec<String> =
            BASE_DEPENDENCIES.iter().map(|p| (*p).to_string()).collect();
        for feature in options.features() {
            dependencies.extend(feature_packages(feature).iter().map(|p| (*p).to_string()));
        }
        let dev_dependencies = BASE_DEV_DEPENDENCIES
            .iter()
            .map(|p| (*p).to_string())
            .collect();
        Self {
            dependencies,
            dev_dependencies,
        }
    }
}
