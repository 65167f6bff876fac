//! Integration tests for the page/component workflow against a real directory

use mpscaffold::{
    ArtifactKind, ArtifactManager, ArtifactName, FixedAnswer, ManifestSync, RemoveOutcome,
    ScaffoldConfig, ScaffoldError, Target, TemplateRenderer, Wemp, Wxapp,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INITIAL_MANIFEST: &str = r#"{
  "pages": [
    "views/index/index"
  ],
  "window": {
    "navigationBarTitleText": "Demo"
  }
}"#;

/// Project with `src/app.json` and one existing index page
fn project() -> (TempDir, ArtifactManager, ManifestSync) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let config = ScaffoldConfig::default();

    fs::create_dir_all(root.join("src/views/index")).unwrap();
    fs::write(root.join("src/views/index/index.js"), "Page({});").unwrap();
    fs::write(root.join("src/app.json"), INITIAL_MANIFEST).unwrap();

    let artifacts = ArtifactManager::new(root, &config, TemplateRenderer::new(Wemp).unwrap());
    let manifest = ManifestSync::for_project(root, &config);
    (temp_dir, artifacts, manifest)
}

/// Every file under `dir` with its contents
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, String> {
    let mut files = BTreeMap::new();
    if !dir.exists() {
        return files;
    }
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let content = fs::read_to_string(&path).unwrap();
                files.insert(path.strip_prefix(dir).unwrap().to_path_buf(), content);
            }
        }
    }
    files
}

fn name(s: &str) -> ArtifactName {
    ArtifactName::parse(s).unwrap()
}

#[test]
fn test_page_round_trip_restores_project() {
    let (temp_dir, artifacts, manifest) = project();
    let views = temp_dir.path().join("src/views");
    let pages_before = manifest.pages().unwrap();
    let views_before = snapshot(&views);

    let home = name("home");
    artifacts.create(ArtifactKind::Page, &home).unwrap();
    manifest.register_page(&home).unwrap();
    assert_eq!(manifest.pages().unwrap(), vec!["views/index/index", "views/home/home"]);

    assert!(manifest.unregister_page(&Target::One(home.clone())).unwrap());
    let outcome = artifacts
        .remove(ArtifactKind::Page, &Target::One(home), &FixedAnswer(false))
        .unwrap();
    assert!(matches!(outcome, RemoveOutcome::Removed { .. }));

    assert_eq!(manifest.pages().unwrap(), pages_before);
    assert_eq!(snapshot(&views), views_before);
}

#[test]
fn test_register_about_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.json");
    fs::write(&path, r#"{"pages": ["views/index/index"]}"#).unwrap();

    ManifestSync::new(&path).register_page(&name("about")).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"pages\": [\n    \"views/index/index\",\n    \"views/about/about\"\n  ]\n}"
    );
}

#[test]
fn test_button_component_in_stylus_family() {
    let (temp_dir, artifacts, _manifest) = project();
    artifacts.create(ArtifactKind::Component, &name("button")).unwrap();

    let dir = temp_dir.path().join("src/components/button");
    let mut files: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();

    assert_eq!(files, vec!["button.html", "button.js", "button.json", "button.styl"]);
}

#[test]
fn test_less_family_component() {
    let temp_dir = TempDir::new().unwrap();
    let artifacts = ArtifactManager::new(
        temp_dir.path(),
        &ScaffoldConfig::default(),
        TemplateRenderer::new(Wxapp).unwrap(),
    );
    let artifact = artifacts.create(ArtifactKind::Component, &name("button")).unwrap();

    let extensions: Vec<_> = artifact
        .files
        .iter()
        .map(|f| f.extension().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(extensions, vec!["less", "js", "html", "json"]);
}

#[test]
fn test_remove_all_pages_and_routes() {
    let (temp_dir, artifacts, manifest) = project();
    for page in ["home", "about"] {
        artifacts.create(ArtifactKind::Page, &name(page)).unwrap();
        manifest.register_page(&name(page)).unwrap();
    }

    let outcome = artifacts
        .remove(ArtifactKind::Page, &Target::All, &FixedAnswer(true))
        .unwrap();
    manifest.unregister_page(&Target::All).unwrap();

    match outcome {
        RemoveOutcome::Removed { artifacts, .. } => {
            assert_eq!(artifacts, vec!["about", "home", "index"]);
        }
        RemoveOutcome::Cancelled => panic!("remove all should not be cancelled"),
    }
    assert!(!temp_dir.path().join("src/views").exists());
    assert!(manifest.pages().unwrap().is_empty());
}

#[test]
fn test_remove_all_declined_keeps_everything() {
    let (temp_dir, artifacts, manifest) = project();
    let views_before = snapshot(&temp_dir.path().join("src/views"));

    let outcome = artifacts
        .remove(ArtifactKind::Page, &Target::All, &FixedAnswer(false))
        .unwrap();

    assert_eq!(outcome, RemoveOutcome::Cancelled);
    assert_eq!(snapshot(&temp_dir.path().join("src/views")), views_before);
    assert_eq!(manifest.pages().unwrap(), vec!["views/index/index"]);
}

#[test]
fn test_custom_source_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = ScaffoldConfig {
        source_dir: PathBuf::from("miniprogram"),
        ..ScaffoldConfig::default()
    };
    let artifacts =
        ArtifactManager::new(temp_dir.path(), &config, TemplateRenderer::new(Wemp).unwrap());

    artifacts.create(ArtifactKind::Page, &name("home")).unwrap();

    assert!(temp_dir.path().join("miniprogram/views/home/home.js").is_file());
    assert_eq!(
        ManifestSync::for_project(temp_dir.path(), &config).path(),
        temp_dir.path().join("miniprogram/app.json")
    );
}

fn kind_strategy() -> impl Strategy<Value = ArtifactKind> {
    prop_oneof![Just(ArtifactKind::Page), Just(ArtifactKind::Component)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_create_twice_already_exists(
        kind in kind_strategy(),
        raw in "[a-z][a-z0-9_-]{0,15}"
    ) {
        let (temp_dir, artifacts, _manifest) = project();
        let name = ArtifactName::parse(&raw).unwrap();
        prop_assume!(!(kind == ArtifactKind::Page && raw == "index"));

        artifacts.create(kind, &name).unwrap();
        let dir = artifacts.artifact_dir(kind, &name);
        let before = snapshot(&dir);

        let second = artifacts.create(kind, &name);
        prop_assert!(
            matches!(second, Err(ScaffoldError::AlreadyExists { .. })),
            "expected AlreadyExists for {}",
            raw
        );
        prop_assert_eq!(snapshot(&dir), before);
        drop(temp_dir);
    }

    #[test]
    fn prop_remove_unknown_not_found(kind in kind_strategy(), raw in "[a-z][a-z0-9_-]{0,15}") {
        let (temp_dir, artifacts, _manifest) = project();
        prop_assume!(raw != "index");
        let src = temp_dir.path().join("src");
        let before = snapshot(&src);

        let target = Target::One(ArtifactName::parse(&raw).unwrap());
        let result = artifacts.remove(kind, &target, &FixedAnswer(true));
        prop_assert!(
            matches!(result, Err(ScaffoldError::NotFound { .. })),
            "expected NotFound for {}",
            raw
        );
        prop_assert_eq!(snapshot(&src), before);
    }

    #[test]
    fn prop_register_appends_last(raw in "[a-z][a-z0-9_-]{0,15}") {
        let (_temp_dir, _artifacts, manifest) = project();
        let name = ArtifactName::parse(&raw).unwrap();

        manifest.register_page(&name).unwrap();
        manifest.register_page(&name).unwrap();

        let pages = manifest.pages().unwrap();
        let expected = format!("views/{raw}/{raw}");
        prop_assert_eq!(pages.len(), 3);
        prop_assert_eq!(&pages[1], &expected);
        prop_assert_eq!(&pages[2], &expected);
    }

    #[test]
    fn prop_unregister_all_empties(pages in proptest::collection::vec("[a-z]{1,8}", 0..8)) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        fs::write(&path, serde_json::json!({ "pages": pages }).to_string()).unwrap();

        ManifestSync::new(&path).unregister_page(&Target::All).unwrap();

        prop_assert!(ManifestSync::new(&path).pages().unwrap().is_empty());
    }
}
