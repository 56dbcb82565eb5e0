use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// possible_values의 코드 키. YAML에서 정수 또는 문자열로 올 수 있다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ValueCode {
    Int(i64),
    Text(String),
}

impl fmt::Display for ValueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueCode::Int(n) => write!(f, "{n}"),
            ValueCode::Text(s) => f.write_str(s),
        }
    }
}

/// 주소 아래 한 파라미터의 정의. id는 생략 가능하다.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSpec {
    #[serde(default)]
    pub id: Option<ValueCode>,
    #[serde(default)]
    pub possible_values: IndexMap<ValueCode, String>,
}

/// 한 주소에 속한 파라미터 이름 → 정의 매핑.
pub type ParameterMap = IndexMap<String, ParameterSpec>;

/// 구성 로드 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 구성 디렉터리가 존재하지 않음
    MissingDir(PathBuf),
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// YAML 파싱/형태 오류
    Yaml { path: PathBuf, source: serde_yaml::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDir(p) => write!(f, "구성 디렉터리가 없음: {}", p.display()),
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Yaml { path, source } => {
                write!(f, "YAML 파싱 오류 ({}): {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

/// 디렉터리의 모든 YAML 파일을 최상위 키 단위로 병합한 스냅숏.
/// 같은 주소가 여러 파일에 있으면 나중 파일이 통째로 이긴다(부분 병합 없음).
#[derive(Debug, Default)]
pub struct ConfigStore {
    entries: IndexMap<String, ParameterMap>,
}

impl ConfigStore {
    /// 디렉터리(비재귀)의 *.yaml / *.yml 파일을 파일명 순으로 읽어 병합한다.
    /// 매핑이 아닌 최상위 문서(빈 파일 포함)는 건너뛴다.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        if !dir.is_dir() {
            return Err(ConfigError::MissingDir(dir.to_path_buf()));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.is_file()
                    && matches!(
                        p.extension().and_then(|e| e.to_str()),
                        Some("yaml") | Some("yml")
                    )
            })
            .collect();
        // 병합 순서가 OS 순회 순서에 흔들리지 않도록 파일명으로 고정한다.
        files.sort();

        let mut entries: IndexMap<String, ParameterMap> = IndexMap::new();
        for path in files {
            let text = fs::read_to_string(&path)?;
            let doc: serde_yaml::Value = serde_yaml::from_str(&text).map_err(|source| {
                ConfigError::Yaml {
                    path: path.clone(),
                    source,
                }
            })?;
            if !doc.is_mapping() {
                continue;
            }
            let parsed: IndexMap<String, ParameterMap> =
                serde_yaml::from_value(doc).map_err(|source| ConfigError::Yaml {
                    path: path.clone(),
                    source,
                })?;
            for (address, params) in parsed {
                entries.insert(address, params);
            }
        }

        Ok(Self { entries })
    }

    /// 저장 순서(삽입 순서)대로 주소 이름을 순회한다.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, address: &str) -> Option<&ParameterMap> {
        self.entries.get(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterMap)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
