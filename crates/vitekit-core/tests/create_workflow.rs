/// プロンプト入力から雛形生成完了までのワークフローテスト。
///
/// 外部コマンドは `RecordingRunner` で記録し、雛形生成コマンドの代わりに
/// プロジェクトディレクトリを作成する。
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use vitekit_core::prompt::ScriptedPrompt;
use vitekit_core::template::{tailwind, vite_config};
use vitekit_core::{
    collect_options, execute_create, CliConfig, CreateConfig, Feature, PresetAnswers,
    RecordingRunner, ScaffoldError, Stage, DEFAULT_PROJECT_NAME,
};

// =========================================================================
// ヘルパー関数
// =========================================================================

fn scaffolding_runner() -> RecordingRunner {
    RecordingRunner::new().with_hook(|cmd| {
        if cmd.stage == Stage::Scaffold {
            // `<pm> create vite <name> ...` の 3 番目の引数がプロジェクト名
            let name = &cmd.args[2];
            fs::create_dir_all(cmd.cwd.join(name).join("src"))?;
            fs::write(cmd.cwd.join(name).join("vite.config.ts"), "// scaffolded")?;
        }
        Ok(())
    })
}

fn run_scenario(
    parent: &Path,
    name_input: &str,
    features: &[Feature],
    runner: &RecordingRunner,
) -> Result<vitekit_core::CreateReport, ScaffoldError> {
    let prompt = ScriptedPrompt::new(name_input).with_features(features);
    let options = collect_options(&prompt, PresetAnswers::default(), DEFAULT_PROJECT_NAME)?;
    let config = CreateConfig::new(options, parent, &CliConfig::default());
    execute_create(&config, runner, |_| {})
}

// =========================================================================
// シナリオ
// =========================================================================

#[test]
fn scenario_a_no_features() {
    let dir = tempfile::tempdir().unwrap();
    let runner = scaffolding_runner();

    let report = run_scenario(dir.path(), "demo", &[], &runner).unwrap();

    assert_eq!(
        runner.command_lines(),
        vec![
            "npm create vite@latest demo -- --template react-ts",
            "npm install react-router-dom @types/react-router-dom",
            "npm install -D prettier eslint",
        ]
    );
    let root = dir.path().join("demo");
    let config = fs::read_to_string(root.join("vite.config.ts")).unwrap();
    assert_eq!(config, vite_config::render(false));
    assert!(!config.contains(vite_config::TAILWIND_IMPORT));
    assert!(!root.join("tailwind.config.js").exists());
    assert!(!root.join("src/index.css").exists());
    assert_eq!(report.files, vec![root.join("vite.config.ts")]);
    assert_eq!(report.next_steps, vec!["cd demo", "npm run dev"]);
}

#[test]
fn scenario_b_router_and_tailwind() {
    let dir = tempfile::tempdir().unwrap();
    let runner = scaffolding_runner();

    run_scenario(dir.path(), "shop", &[Feature::Router, Feature::Tailwind], &runner).unwrap();

    assert_eq!(
        runner.command_lines(),
        vec![
            "npm create vite@latest shop -- --template react-ts",
            "npm install react-router-dom @types/react-router-dom @tanstack/react-router @tanstack/router-devtools tailwindcss @tailwindcss/vite",
            "npm install -D prettier eslint",
            "npx tailwindcss init",
        ]
    );
    let install = &runner.commands()[1];
    assert_eq!(install.args.len(), 1 + 6);

    let root = dir.path().join("shop");
    let config = fs::read_to_string(root.join("vite.config.ts")).unwrap();
    assert!(config.contains("import tailwindcss from '@tailwindcss/vite'"));
    assert!(config.contains("tailwindcss(),"));
    assert_eq!(
        fs::read_to_string(root.join("tailwind.config.js")).unwrap(),
        tailwind::CONFIG_CONTENTS
    );
    assert_eq!(
        fs::read_to_string(root.join("src/index.css")).unwrap(),
        tailwind::STYLESHEET_CONTENTS
    );
}

#[test]
fn empty_name_uses_default_project_name() {
    let dir = tempfile::tempdir().unwrap();
    let runner = scaffolding_runner();

    let report = run_scenario(dir.path(), "", &[Feature::Query], &runner).unwrap();

    assert_eq!(report.project_name, DEFAULT_PROJECT_NAME);
    assert_eq!(
        runner.command_lines()[0],
        "npm create vite@latest my-app -- --template react-ts"
    );
    assert!(dir.path().join("my-app/vite.config.ts").exists());
}

#[test]
fn scaffold_failure_stops_everything() {
    let dir = tempfile::tempdir().unwrap();
    let runner = RecordingRunner::new().fail_on(Stage::Scaffold, 1);

    let err = run_scenario(dir.path(), "demo", &[Feature::Tailwind], &runner).unwrap_err();

    assert_eq!(err.stage(), Stage::Scaffold);
    assert_eq!(runner.commands().len(), 1);
    assert!(runner.commands().iter().all(|c| c.stage == Stage::Scaffold));
    assert!(!dir.path().join("demo").exists());
}

#[test]
fn install_failure_skips_dev_install_and_tailwind() {
    let dir = tempfile::tempdir().unwrap();
    let runner = scaffolding_runner().fail_on(Stage::Install, 1);

    let err = run_scenario(dir.path(), "shop", &[Feature::Tailwind], &runner).unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::CommandFailed {
            stage: Stage::Install,
            ..
        }
    ));
    // 雛形生成と最初のインストールのみ
    assert_eq!(runner.commands().len(), 2);
    let root = dir.path().join("shop");
    // 設定ファイルは書き込み済みのまま残る
    assert!(root.join("vite.config.ts").exists());
    assert!(!root.join("tailwind.config.js").exists());
}

#[test]
fn tailwind_init_failure_writes_no_tailwind_files() {
    let dir = tempfile::tempdir().unwrap();
    let runner = scaffolding_runner().fail_on(Stage::Tailwind, 127);

    let err = run_scenario(dir.path(), "shop", &[Feature::Tailwind], &runner).unwrap_err();

    assert_eq!(err.stage(), Stage::Tailwind);
    assert!(!dir.path().join("shop/tailwind.config.js").exists());
    assert!(!dir.path().join("shop/src/index.css").exists());
}

#[test]
fn config_overwrites_scaffolded_file_for_every_combination() {
    for bits in 0u8..8 {
        let features: Vec<Feature> = Feature::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .map(|(_, f)| f)
            .collect();
        let tailwind = features.contains(&Feature::Tailwind);

        let dir = tempfile::tempdir().unwrap();
        let runner = scaffolding_runner();
        run_scenario(dir.path(), "combo", &features, &runner).unwrap();

        let root = dir.path().join("combo");
        let config = fs::read_to_string(root.join("vite.config.ts")).unwrap();
        assert_eq!(config.contains("tailwindcss()"), tailwind, "bits={bits}");
        for (alias, _) in vite_config::PATH_ALIASES {
            assert!(config.contains(&format!("'{alias}':")), "bits={bits}");
        }
        assert_eq!(root.join("tailwind.config.js").exists(), tailwind);
        assert_eq!(
            runner.command_lines().last().unwrap() == "npx tailwindcss init",
            tailwind
        );
        assert_eq!(runner.command_lines()[2], "npm install -D prettier eslint");
    }
}
