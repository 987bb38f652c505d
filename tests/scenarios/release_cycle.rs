//! Scenario: A plugin goes through several releases.
//!
//! Journey:
//! 1. Release 1.0.0 is built and promoted for the first time
//! 2. 1.0.0 is rebuilt by mistake; the operator refuses to replace it
//! 3. Release 1.1.0 is built next to it; only the new release is copied
//! 4. A hotfix rebuild of 1.1.0 is approved and replaces the archived copy
//!
//! Success Criteria:
//! - Each archived release is asked about exactly once per run
//! - Old releases stay in the archive
//! - Config files always track the latest build

use std::fs;
use std::path::{Path, PathBuf};

use legacy_promote::domain::ports::NoopEventSink;
use legacy_promote::{
    ConfirmationPort, Decision, LocalFs, OverwriteMode, PromoteOptions, PromoteReport,
    PromoteUseCase, PromotionPolicy,
};
use tempfile::TempDir;

struct Operator {
    answers: Vec<Decision>,
    asked: Vec<String>,
}

impl Operator {
    fn answering(answers: &[Decision]) -> Self {
        Self {
            answers: answers.to_vec(),
            asked: Vec::new(),
        }
    }
}

impl ConfirmationPort for Operator {
    fn confirm(&mut self, component: &str, version: &str) -> Decision {
        self.asked.push(format!("{component}-{version}"));
        if self.answers.is_empty() {
            Decision::Skip
        } else {
            self.answers.remove(0)
        }
    }
}

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn dist(&self) -> PathBuf {
        self.dir.path().join("dist")
    }

    fn legacy(&self) -> PathBuf {
        self.dir.path().join("legacy")
    }

    /// Replace the staging tree with a fresh build
    fn build(&self, files: &[(&str, &str)]) {
        let _ = fs::remove_dir_all(self.dist());
        for (name, content) in files {
            let path = self.dist().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    fn archived(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.legacy().join(name)).ok()
    }

    fn promote(&self, operator: &mut Operator) -> PromoteReport {
        let fs_impl = LocalFs::new();
        let options = PromoteOptions::for_project(self.dir.path()).with_mode(OverwriteMode::Ask);
        PromoteUseCase::new(&fs_impl, PromotionPolicy::default(), &NoopEventSink)
            .execute(&options, operator)
            .unwrap()
    }
}

fn no_temp_files_left(dir: &Path) -> bool {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .all(|e| !e.file_name().to_string_lossy().starts_with(".legacy-promote-"))
}

/// SCENARIO: Full release cycle with rebuilds
#[test]
fn scenario_release_cycle() {
    let project = Project::new();

    // Step 1: first release
    project.build(&[
        ("plugin-1.0.0.js", "1.0.0"),
        ("plugin-1.0.0.js.map", "map 1.0.0"),
        ("plugin.js", "latest"),
        ("api.json", "api v1"),
    ]);
    let mut operator = Operator::answering(&[]);
    let report = project.promote(&mut operator);
    assert!(operator.asked.is_empty());
    assert_eq!(report.copied(), 3);

    // Step 2: accidental rebuild of 1.0.0, refused
    project.build(&[
        ("plugin-1.0.0.js", "1.0.0 REBUILT"),
        ("plugin-1.0.0.js.map", "map REBUILT"),
        ("api.json", "api v1"),
    ]);
    let mut operator = Operator::answering(&[Decision::Skip]);
    let report = project.promote(&mut operator);
    assert_eq!(operator.asked, vec!["plugin-1.0.0"]);
    assert_eq!(report.skipped(), 2);
    assert_eq!(project.archived("plugin-1.0.0.js").as_deref(), Some("1.0.0"));
    assert_eq!(
        project.archived("plugin-1.0.0.js.map").as_deref(),
        Some("map 1.0.0")
    );

    // Step 3: next release built alongside the old one
    project.build(&[
        ("plugin-1.0.0.js", "1.0.0"),
        ("plugin-1.1.0.js", "1.1.0"),
        ("plugin-1.1.0.js.map", "map 1.1.0"),
        ("api.json", "api v2"),
    ]);
    let mut operator = Operator::answering(&[Decision::Skip]);
    project.promote(&mut operator);
    assert_eq!(operator.asked, vec!["plugin-1.0.0"]);
    assert_eq!(project.archived("plugin-1.1.0.js").as_deref(), Some("1.1.0"));
    assert_eq!(project.archived("api.json").as_deref(), Some("api v2"));

    // Step 4: approved hotfix rebuild of 1.1.0
    project.build(&[
        ("plugin-1.1.0.js", "1.1.0 hotfix"),
        ("plugin-1.1.0.js.map", "map hotfix"),
        ("api.json", "api v2"),
    ]);
    let mut operator = Operator::answering(&[Decision::Overwrite]);
    let report = project.promote(&mut operator);
    assert_eq!(operator.asked, vec!["plugin-1.1.0"]);
    assert_eq!(report.overwritten(), 3);
    assert_eq!(
        project.archived("plugin-1.1.0.js").as_deref(),
        Some("1.1.0 hotfix")
    );
    assert_eq!(
        project.archived("plugin-1.1.0.js.map").as_deref(),
        Some("map hotfix")
    );

    // Old releases survive every run
    assert_eq!(project.archived("plugin-1.0.0.js").as_deref(), Some("1.0.0"));
    assert!(no_temp_files_left(&project.legacy()));
}

/// SCENARIO: Hyphenated component names share one question per version
#[test]
fn scenario_hyphenated_components_collapse() {
    let project = Project::new();
    project.build(&[("my-plugin-2.0.0.js", "a"), ("my-theme-2.0.0.css", "b")]);
    project.promote(&mut Operator::answering(&[]));

    project.build(&[("my-plugin-2.0.0.js", "a2"), ("my-theme-2.0.0.css", "b2")]);
    let mut operator = Operator::answering(&[Decision::Overwrite]);
    project.promote(&mut operator);

    assert_eq!(operator.asked, vec!["my-2.0.0"]);
    assert_eq!(project.archived("my-theme-2.0.0.css").as_deref(), Some("b2"));
}
