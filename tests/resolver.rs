//! 줄 → (주소, 파라미터, 값) 해석 휴리스틱 회귀 테스트.

use std::fs;

use lookatme::config_store::ConfigStore;
use lookatme::resolver::{resolve, Resolution};
use tempfile::tempdir;

const ENGINES: &str = concat!(
    "engine1:\n",
    "  mode:\n",
    "    id: 7\n",
    "    possible_values:\n",
    "      0: \"off\"\n",
    "      1: \"on\"\n",
    "engine2:\n",
    "  mode:\n",
    "    id: 12\n",
    "    possible_values:\n",
    "      0: \"off\"\n",
    "      1: \"on\"\n",
);

fn store_from(yaml: &str) -> ConfigStore {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.yaml"), yaml).unwrap();
    ConfigStore::load(dir.path()).unwrap()
}

#[test]
fn full_triple_from_plain_line() {
    let store = store_from(ENGINES);
    let res = resolve("set engine1 mode 1", &store);
    assert_eq!(res.address.as_deref(), Some("engine1"));
    assert_eq!(res.parameter.as_deref(), Some("mode"));
    assert_eq!(res.value, Some(1));
}

#[test]
fn colon_and_comma_count_as_separators() {
    let store = store_from(ENGINES);
    let res = resolve("engine1:mode,1", &store);
    assert_eq!(res.address.as_deref(), Some("engine1"));
    assert_eq!(res.parameter.as_deref(), Some("mode"));
    assert_eq!(res.value, Some(1));
}

#[test]
fn unknown_line_resolves_to_nothing() {
    let store = store_from(ENGINES);
    let res = resolve("totally unrelated text 42", &store);
    assert_eq!(res, Resolution::default());
}

#[test]
fn bare_parameter_matches_without_address() {
    let store = store_from(ENGINES);
    let res = resolve("just a mode somewhere", &store);
    assert_eq!(res.address, None);
    assert_eq!(res.parameter.as_deref(), Some("mode"));
    assert_eq!(res.value, None);
}

#[test]
fn address_tie_breaks_by_store_order_not_line_position() {
    let store = store_from(ENGINES);
    // engine2가 줄에서 먼저 나와도 저장 순서상 첫 번째인 engine1이 이긴다.
    let res = resolve("engine2 engine1 mode 1", &store);
    assert_eq!(res.address.as_deref(), Some("engine1"));
}

#[test]
fn mistyped_parameter_falls_back_to_address_only() {
    let store = store_from(ENGINES);
    let res = resolve("engine1 modee 1", &store);
    assert_eq!(res.address.as_deref(), Some("engine1"));
    assert_eq!(res.parameter, None);
    assert_eq!(res.value, None);
}

#[test]
fn value_not_in_enumeration_stays_unset() {
    let store = store_from(ENGINES);
    let res = resolve("engine1 mode 9", &store);
    assert_eq!(res.address.as_deref(), Some("engine1"));
    assert_eq!(res.parameter.as_deref(), Some("mode"));
    assert_eq!(res.value, None);
}

#[test]
fn last_matching_numeric_token_wins() {
    let store = store_from(ENGINES);
    let res = resolve("engine1 mode 0 1", &store);
    assert_eq!(res.value, Some(1));
}

#[test]
fn negative_numbers_are_not_value_tokens() {
    let store = store_from(concat!(
        "engine1:\n",
        "  mode:\n",
        "    id: 7\n",
        "    possible_values:\n",
        "      0: \"off\"\n",
    ));
    // 원래 동작과 같이 ASCII 숫자만으로 된 토큰만 값 후보다.
    let res = resolve("engine1 mode -0", &store);
    assert_eq!(res.value, None);
}

#[test]
fn deterministic_for_identical_input() {
    let store = store_from(ENGINES);
    let a = resolve("engine2 mode 1", &store);
    let b = resolve("engine2 mode 1", &store);
    assert_eq!(a, b);
    assert_eq!(a.address.as_deref(), Some("engine2"));
}

#[test]
fn empty_store_resolves_to_nothing() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::load(dir.path()).unwrap();
    assert_eq!(resolve("engine1 mode 1", &store), Resolution::default());
}
