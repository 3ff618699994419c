use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::CliConfig;
use crate::deps::DependencyPlan;
use crate::error::{Result, ScaffoldError, Stage};
use crate::options::ProjectOptions;
use crate::package_manager::PackageManager;
use crate::progress::ProgressEvent;
use crate::runner::{CommandRunner, CommandSpec};
use crate::template::{tailwind, vite_config};

/// プロジェクト作成の設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateConfig {
    /// プロンプトで収集した選択内容
    pub options: ProjectOptions,
    /// プロジェクトを作成する親ディレクトリ
    pub parent_dir: PathBuf,
    pub package_manager: PackageManager,
    /// `create vite` に渡すテンプレート識別子
    pub template: String,
}

impl CreateConfig {
    pub fn new(options: ProjectOptions, parent_dir: &Path, cli_config: &CliConfig) -> Self {
        Self {
            options,
            parent_dir: parent_dir.to_path_buf(),
            package_manager: cli_config.package_manager,
            template: cli_config.template.clone(),
        }
    }

    /// 生成先のプロジェクトルート。全ステージがこのパスを基準にする。
    pub fn project_root(&self) -> PathBuf {
        self.parent_dir.join(&self.options.project_name)
    }

    fn total_steps(&self) -> usize {
        if self.options.tailwind { 4 } else { 3 }
    }
}

/// 完了したプロジェクト作成の結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReport {
    pub project_name: String,
    pub project_root: PathBuf,
    /// 実行したコマンド（実行順）
    pub commands: Vec<String>,
    /// 書き込んだファイル（書き込み順）
    pub files: Vec<PathBuf>,
    /// 完了後に表示する次の手順
    pub next_steps: Vec<String>,
}

/// 雛形生成・設定ファイル生成・依存インストール・Tailwind 設定を順に実行する。
///
/// 各ステージは前のステージが成功した場合にのみ実行される。
/// 最初に失敗したステージのエラーをそのまま返し、生成済みファイルの後始末は行わない。
///
/// # Errors
///
/// 外部コマンドの失敗、またはファイル書き込みの失敗時にエラーを返す。
pub fn execute_create<R: CommandRunner + ?Sized>(
    config: &CreateConfig,
    runner: &R,
    on_progress: impl Fn(ProgressEvent),
) -> Result<CreateReport> {
    let name = &config.options.project_name;
    let mut report = CreateReport {
        project_name: name.clone(),
        project_root: config.project_root(),
        commands: Vec::new(),
        files: Vec::new(),
        next_steps: Vec::new(),
    };

    on_progress(ProgressEvent::Log {
        message: format!("Creating project {name}..."),
    });

    if let Err(e) = run_stages(config, runner, &on_progress, &mut report) {
        tracing::warn!(stage = %e.stage(), "project creation aborted: {e}");
        on_progress(ProgressEvent::Finished {
            success: false,
            message: e.to_string(),
        });
        return Err(e);
    }

    report.next_steps = vec![
        format!("cd {name}"),
        config.package_manager.run_dev_hint(),
    ];
    tracing::info!(project = %name, root = %report.project_root.display(), "project created");
    on_progress(ProgressEvent::Finished {
        success: true,
        message: format!("Project {name} is ready."),
    });
    Ok(report)
}

fn run_stages<R, F>(
    config: &CreateConfig,
    runner: &R,
    on_progress: &F,
    report: &mut CreateReport,
) -> Result<()>
where
    R: CommandRunner + ?Sized,
    F: Fn(ProgressEvent),
{
    let name = &config.options.project_name;
    let root = config.project_root();
    let total = config.total_steps();

    // [1] 雛形生成
    let step = 1;
    on_progress(ProgressEvent::StepStarted {
        step,
        total,
        message: format!("Scaffolding Vite project ({})", config.template),
    });
    let create = config
        .package_manager
        .create_command(name, &config.template, &config.parent_dir);
    run(runner, &create, report)?;
    if !root.is_dir() {
        on_progress(ProgressEvent::Warning {
            message: format!(
                "`{}` succeeded but {} does not exist (was overwriting declined?)",
                create.display(),
                root.display()
            ),
        });
        return Err(ScaffoldError::MissingProjectDir(root));
    }
    on_progress(ProgressEvent::StepCompleted {
        step,
        total,
        message: format!("Created {}", root.display()),
    });

    // [2] vite.config.ts
    let step = 2;
    on_progress(ProgressEvent::StepStarted {
        step,
        total,
        message: format!("Writing {}", vite_config::FILE_NAME),
    });
    let path = vite_config::file(config.options.tailwind).write_to(&root, Stage::Config)?;
    report.files.push(path);
    on_progress(ProgressEvent::StepCompleted {
        step,
        total,
        message: format!("Wrote {}", vite_config::FILE_NAME),
    });

    // [3] 依存インストール（ランタイム → 開発）
    let step = 3;
    let plan = DependencyPlan::for_options(&config.options);
    on_progress(ProgressEvent::StepStarted {
        step,
        total,
        message: "Installing dependencies".to_string(),
    });
    for (packages, dev) in [(&plan.dependencies, false), (&plan.dev_dependencies, true)] {
        let cmd = config.package_manager.add_command(packages, dev, &root);
        on_progress(ProgressEvent::Log {
            message: cmd.display(),
        });
        run(runner, &cmd, report)?;
    }
    on_progress(ProgressEvent::StepCompleted {
        step,
        total,
        message: format!(
            "Installed {} dependencies and {} dev dependencies",
            plan.dependencies.len(),
            plan.dev_dependencies.len()
        ),
    });

    // [4] Tailwind CSS
    if config.options.tailwind {
        let step = 4;
        on_progress(ProgressEvent::StepStarted {
            step,
            total,
            message: "Configuring Tailwind CSS".to_string(),
        });
        let init = config
            .package_manager
            .exec_command(Stage::Tailwind, "tailwindcss", &["init"], &root);
        run(runner, &init, report)?;
        for file in tailwind::files() {
            let path = file.write_to(&root, Stage::Tailwind)?;
            report.files.push(path);
        }
        on_progress(ProgressEvent::StepCompleted {
            step,
            total,
            message: format!(
                "Wrote {} and {}",
                tailwind::CONFIG_FILE_NAME,
                tailwind::STYLESHEET_PATH
            ),
        });
    }
    Ok(())
}

fn run<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &CommandSpec,
    report: &mut CreateReport,
) -> Result<()> {
    tracing::info!(stage = %command.stage, "{}", command.display());
    runner.run(command)?;
    report.commands.push(command.display());
    Ok(())
}
