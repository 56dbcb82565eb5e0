use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// 설정 파일 처리 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum SettingsError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// YAML 직렬화/역직렬화 오류
    Yaml(serde_yaml::Error),
    /// 설정 파일 최상위가 매핑이 아님
    NotMapping(PathBuf),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            SettingsError::Yaml(e) => write!(f, "설정 파싱 오류: {e}"),
            SettingsError::NotMapping(p) => {
                write!(f, "설정 파일이 키-값 매핑이 아님: {}", p.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(value: std::io::Error) -> Self {
        SettingsError::Io(value)
    }
}

impl From<serde_yaml::Error> for SettingsError {
    fn from(value: serde_yaml::Error) -> Self {
        SettingsError::Yaml(value)
    }
}

/// language/theme 등을 담는 평면 YAML 키-값 저장소.
/// 쓰기는 읽기-병합-쓰기이므로 모르는 키도 그대로 보존된다.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 키의 문자열 값을 읽는다. 파일이 없으면 None.
    pub fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let map = self.read_map()?;
        Ok(map
            .get(&Value::from(key))
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// 키 하나를 갱신하고 나머지 키는 보존한 채 다시 쓴다.
    /// 임시 파일에 쓴 뒤 원자적 rename으로 교체한다.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut map = self.read_map()?;
        map.insert(Value::from(key), Value::from(value));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_yaml::to_string(&Value::Mapping(map))?;
        let tmp = self.path.with_extension("yaml.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read_map(&self) -> Result<Mapping, SettingsError> {
        if !self.path.exists() {
            return Ok(Mapping::new());
        }
        let text = fs::read_to_string(&self.path)?;
        match serde_yaml::from_str::<Value>(&text)? {
            Value::Mapping(map) => Ok(map),
            Value::Null => Ok(Mapping::new()),
            _ => Err(SettingsError::NotMapping(self.path.clone())),
        }
    }
}
