//! The create flow driven end to end with scripted answers

use stackgen_core::collector::{collect_custom, select_preset};
use stackgen_core::config::{builtin_presets, PresetFile};
use stackgen_core::{
    scaffold, templates, Answer, Configuration, PresetChoice, Quadrant, ScaffoldError,
    ScaffoldOptions, ScriptedPrompter,
};
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn picks(ids: &[&str]) -> ScriptedPrompter {
    ScriptedPrompter::new(ids.iter().map(|id| Answer::pick(*id)))
}

fn options(parent: &Path) -> ScaffoldOptions {
    ScaffoldOptions {
        parent_dir: parent.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn quick_start_preset_equals_custom_selection() {
    let presets = builtin_presets();

    let mut prompter = picks(&["react-node"]);
    let preset = match select_preset(&mut prompter, &presets).unwrap() {
        PresetChoice::Preset(config) => config,
        PresetChoice::Custom => panic!("expected a preset"),
    };

    let mut prompter = picks(&["custom"]);
    assert_eq!(select_preset(&mut prompter, &presets).unwrap(), PresetChoice::Custom);
    let mut prompter = picks(&[
        "react", "node", "npm", "zod", "neverthrow", "vitest", "zustand", "none",
    ]);
    let custom = collect_custom(&mut prompter).unwrap();

    assert_eq!(preset, custom);
    assert_eq!(
        templates::resolve(&preset).unwrap(),
        templates::resolve(&custom).unwrap()
    );
}

#[tokio::test]
async fn declining_leaves_no_directory() {
    let temp = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new([
        Answer::pick("custom"),
        Answer::pick("vue3"),
        Answer::pick("deno"),
        Answer::pick("yarn"),
        Answer::pick("none"),
        Answer::pick("none"),
        Answer::pick("none"),
        Answer::pick("mobx"),
        Answer::pick("primevue"),
        Answer::Confirm(false),
    ]);

    let err = scaffold(&mut prompter, &builtin_presets(), &options(temp.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::Cancelled));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn cancelling_a_prompt_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new([Answer::pick("custom"), Answer::pick("react"), Answer::Cancel]);

    let err = scaffold(&mut prompter, &builtin_presets(), &options(temp.path()))
        .await
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::Cancelled));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn every_quadrant_materializes_its_file_set() {
    let temp = TempDir::new().unwrap();

    for quadrant in Quadrant::ALL {
        let runtime = match quadrant {
            Quadrant::ViteReact | Quadrant::ViteVue => "bun",
            Quadrant::Fresh | Quadrant::VueCdn => "deno",
        };
        let framework = match quadrant.framework() {
            stackgen_core::catalog::Framework::React => "react",
            stackgen_core::catalog::Framework::Vue3 => "vue3",
        };
        let mut prompter = ScriptedPrompter::new([
            Answer::pick("custom"),
            Answer::pick(framework),
            Answer::pick(runtime),
            Answer::pick("bun"),
            Answer::pick("yup"),
            Answer::pick("true-myth"),
            Answer::pick("cypress"),
            Answer::pick("nanostores"),
            Answer::pick("none"),
            Answer::Confirm(true),
        ]);

        let outcome = scaffold(&mut prompter, &builtin_presets(), &options(temp.path()))
            .await
            .unwrap();
        let expected = templates::resolve(&outcome.config).unwrap();

        let on_disk = WalkDir::new(&outcome.project_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        assert_eq!(on_disk, expected.len(), "{:?}", quadrant);
        assert_eq!(outcome.written.len(), expected.len());

        for file in expected.files() {
            let content = std::fs::read_to_string(outcome.project_dir.join(&file.path)).unwrap();
            assert_eq!(content, file.content);
        }
    }
}

#[tokio::test]
async fn presets_file_entries_follow_builtins() {
    let yaml = r#"
version: "0.1.0"
presets:
  - id: team
    name: Team default
    description: React + Bun with Redux
    framework: react
    runtime: bun
    package_manager: pnpm
    validation: zod
    state: redux
"#;
    let builtins = builtin_presets();
    let extra = PresetFile::parse(yaml, Path::new("team.yaml"))
        .unwrap()
        .into_presets(&builtins)
        .unwrap();
    let presets: Vec<_> = builtins.into_iter().chain(extra).collect();
    assert_eq!(presets.last().unwrap().id, "team");

    let temp = TempDir::new().unwrap();
    let mut prompter = picks(&["team"]);
    let options = ScaffoldOptions {
        yes: true,
        ..options(temp.path())
    };
    let outcome = scaffold(&mut prompter, &presets, &options).await.unwrap();

    let expected: Configuration = presets.last().unwrap().config;
    assert_eq!(outcome.config, expected);
    let main = std::fs::read_to_string(outcome.project_dir.join("src/main.tsx")).unwrap();
    assert!(main.contains("<Provider store={store}>"));
    assert!(outcome.project_dir.join("src/stores/counterSlice.ts").is_file());
}
