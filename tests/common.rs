#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use wap_render::diagnostics::Diagnostic;
use wap_render::model::{Schedule, WapDocument};

pub const SAMPLE_YAML: &str = r##"
meta:
  title: Detachement 6 - Woche 1
  unit: Det 6
  version: v1.2
  author: Hptm Muster
  startTime: "08:00"
  endTime: "18:00"
  firstDay: "2024-04-22"
categories:
  - identifier: sport
    color: "#FF0000"
  - identifier: theory
    color: "#00FF0080"
days:
  - offset: 0
    events:
      - title: Morning run
        start: "08:00"
        end: "09:00"
        columns: [Sport]
        category: sport
        repeats: daily
      - title: Map reading
        start: 540
        end: 630
        columns: [Theory]
        category: theory
        responsible: Lt Meier
        location: Room 3
  - offset: 1
    events:
      - title: Shooting
        start: "10:00"
        end: "12:00"
        columns: [Range, Beso]
        description: bring ear protection
  - offset: 8
    events:
      - title: Debrief
        start: "16:00"
        end: "17:00"
        columns: [Theory]
        footnote: true
"##;

pub fn wap() -> Command {
    cargo_bin_cmd!("wap-render")
}

/// Unique path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_waprender.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Config path that does not exist, so the CLI runs on defaults
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
        .to_string_lossy()
        .to_string()
}

/// Write `content` into a temp file and return its path
pub fn write_doc(name: &str, ext: &str, content: &str) -> PathBuf {
    let path = temp_path(name, ext);
    fs::write(&path, content).expect("write test document");
    path
}

pub fn parse_yaml(yaml: &str) -> WapDocument {
    serde_yaml::from_str(yaml).expect("valid test yaml")
}

pub fn schedule(yaml: &str) -> (Schedule, Vec<Diagnostic>) {
    Schedule::from_document(&parse_yaml(yaml), "default").expect("valid schedule")
}

/// Minimal document with the given days block
pub fn doc_with_days(days: &str) -> String {
    format!(
        r#"
meta:
  title: Test
  startTime: "08:00"
  endTime: "18:00"
categories: []
days:
{days}
"#
    )
}
