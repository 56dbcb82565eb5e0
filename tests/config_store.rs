//! YAML 구성 디렉터리 병합 회귀 테스트.

use std::fs;
use std::path::Path;

use lookatme::config_store::{ConfigError, ConfigStore};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn last_file_wins_whole_entry() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "a.yaml",
        "engine1:\n  mode:\n    id: 7\n    possible_values:\n      0: \"off\"\n",
    );
    write(
        dir.path(),
        "b.yaml",
        "engine1:\n  power:\n    id: 9\n    possible_values:\n      1: \"half\"\n",
    );

    let store = ConfigStore::load(dir.path()).unwrap();
    let group = store.get("engine1").unwrap();
    // 부분 병합이 아니라 항목 전체 교체: a.yaml의 mode는 사라져야 한다.
    assert!(group.get("mode").is_none());
    assert!(group.get("power").is_some());
    assert_eq!(store.len(), 1);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    match ConfigStore::load(&missing) {
        Err(ConfigError::MissingDir(p)) => assert_eq!(p, missing),
        other => panic!("expected MissingDir, got {other:?}"),
    }
}

#[test]
fn empty_directory_gives_empty_store() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::load(dir.path()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn non_mapping_documents_are_skipped() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.yaml", "- just\n- a\n- list\n");
    write(dir.path(), "b.yaml", "");
    write(
        dir.path(),
        "c.yaml",
        "valve1:\n  state:\n    id: 3\n    possible_values:\n      0: \"closed\"\n",
    );

    let store = ConfigStore::load(dir.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("valve1").is_some());
}

#[test]
fn malformed_yaml_is_fatal() {
    let dir = tempdir().unwrap();
    write(dir.path(), "bad.yaml", "engine1: [unclosed\n");
    assert!(matches!(
        ConfigStore::load(dir.path()),
        Err(ConfigError::Yaml { .. })
    ));
}

#[test]
fn store_preserves_insertion_order() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "a.yaml",
        concat!(
            "engine_b:\n  mode:\n    id: 1\n",
            "engine_a:\n  mode:\n    id: 2\n",
        ),
    );
    write(dir.path(), "b.yaml", "engine_c:\n  mode:\n    id: 3\n");

    let store = ConfigStore::load(dir.path()).unwrap();
    let order: Vec<&str> = store.addresses().collect();
    // 파일명 순 + 파일 내 키 순서가 그대로 저장 순서가 된다.
    assert_eq!(order, vec!["engine_b", "engine_a", "engine_c"]);
}

#[test]
fn string_and_integer_value_codes_both_load() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "a.yaml",
        concat!(
            "pump1:\n",
            "  mode:\n",
            "    id: manual\n",
            "    possible_values:\n",
            "      0: \"off\"\n",
            "      auto: \"automatic\"\n",
        ),
    );

    let store = ConfigStore::load(dir.path()).unwrap();
    let spec = store.get("pump1").unwrap().get("mode").unwrap();
    assert_eq!(spec.possible_values.len(), 2);
}
