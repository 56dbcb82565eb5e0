use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use sys_locale::get_locale;

use crate::settings::{SettingsError, SettingsStore, LANGUAGE_KEY};

pub const DEFAULT_LANGUAGE: &str = "en";

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const REPORT_NO_OBJECT: &str = "report.no_object";
    pub const REPORT_AVAILABLE_OBJECTS: &str = "report.available_objects";
    pub const REPORT_PARAMETER_LABEL: &str = "report.parameter_label";
    pub const REPORT_FOUND_IN: &str = "report.found_in";
    pub const REPORT_PARAMETER_NOT_FOUND: &str = "report.parameter_not_found";
    pub const REPORT_OBJECT_NOT_EXIST: &str = "report.object_not_exist";
    pub const REPORT_PARAM_NOT_EXIST: &str = "report.param_not_exist";
    pub const REPORT_OBJECT_LABEL: &str = "report.object_label";
    pub const REPORT_PARAMETER: &str = "report.parameter";
    pub const REPORT_ID_LABEL: &str = "report.id_label";
    pub const REPORT_VALUE_LABEL: &str = "report.value_label";
    pub const REPORT_UNKNOWN_VALUE: &str = "report.unknown_value";
    pub const REPORT_POSSIBLE_VALUES: &str = "report.possible_values";
    pub const REPORT_OBJECT_ONLY_LABEL: &str = "report.object_only_label";
}

/// 언어팩 처리 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum LocaleError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 언어팩 YAML 파싱 오류
    Yaml { path: PathBuf, source: serde_yaml::Error },
    /// 기본 언어팩(en.yaml)이 없음. 치명적 시작 조건.
    MissingDefault(PathBuf),
    /// 설정 파일 오류
    Settings(SettingsError),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            LocaleError::Yaml { path, source } => {
                write!(f, "언어팩 파싱 오류 ({}): {source}", path.display())
            }
            LocaleError::MissingDefault(p) => {
                write!(f, "기본 언어팩이 없음: {}", p.display())
            }
            LocaleError::Settings(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for LocaleError {}

impl From<std::io::Error> for LocaleError {
    fn from(value: std::io::Error) -> Self {
        LocaleError::Io(value)
    }
}

impl From<SettingsError> for LocaleError {
    fn from(value: SettingsError) -> Self {
        LocaleError::Settings(value)
    }
}

/// 런타임 언어 카탈로그를 제공한다.
#[derive(Debug)]
pub struct Translator {
    language: String,
    catalog: serde_yaml::Value,
    locales_dir: PathBuf,
    settings: SettingsStore,
}

impl Translator {
    /// 언어 코드에 해당하는 카탈로그를 로드한다. 해당 파일이 없으면
    /// en.yaml로 폴백하며, en.yaml마저 없으면 오류.
    pub fn load(
        locales_dir: impl Into<PathBuf>,
        settings: SettingsStore,
        lang_code: &str,
    ) -> Result<Self, LocaleError> {
        let locales_dir = locales_dir.into();
        let catalog = load_catalog(&locales_dir, lang_code)?;
        Ok(Self {
            language: lang_code.to_string(),
            catalog,
            locales_dir,
            settings,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// 점 구분 키로 번역을 가져온다. 중간 단계가 매핑이 아니거나
    /// 최종 값이 비어 있으면 `[키]` 자리표시자를 돌려준다. 절대 실패하지 않는다.
    pub fn t(&self, key_path: &str) -> String {
        let mut current = Some(&self.catalog);
        for segment in key_path.split('.') {
            current = current.and_then(|v| v.get(segment));
        }
        match current.and_then(serde_yaml::Value::as_str) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => format!("[{key_path}]"),
        }
    }

    /// 언어 코드를 설정 파일에 병합 저장하고 카탈로그를 즉시 갈아끼운다.
    /// 재시작 없이 이후의 t 호출에 반영된다.
    pub fn set_language(&mut self, lang_code: &str) -> Result<(), LocaleError> {
        self.settings.set(LANGUAGE_KEY, lang_code)?;
        self.catalog = load_catalog(&self.locales_dir, lang_code)?;
        self.language = lang_code.to_string();
        Ok(())
    }
}

fn load_catalog(locales_dir: &Path, lang_code: &str) -> Result<serde_yaml::Value, LocaleError> {
    let mut path = locales_dir.join(format!("{lang_code}.yaml"));
    if !path.exists() {
        path = locales_dir.join(format!("{DEFAULT_LANGUAGE}.yaml"));
        if !path.exists() {
            return Err(LocaleError::MissingDefault(path));
        }
    }
    let text = fs::read_to_string(&path)?;
    serde_yaml::from_str(&text).map_err(|source| LocaleError::Yaml { path, source })
}

/// 설정 파일에 저장된 언어 코드를 읽는다. 파일이나 키가 없으면 en.
pub fn get_language(settings: &SettingsStore) -> Result<String, SettingsError> {
    Ok(settings
        .get(LANGUAGE_KEY)?
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()))
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, persisted: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| persisted.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// "pl-PL" 같은 전체 로케일을 소문자 기본 코드 "pl"로 줄인다.
fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    if c.is_empty() || c == "auto" {
        return None;
    }
    c.split(['-', '_', '.'])
        .next()
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(code) = normalize_lang(&loc) {
            return Some(code);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(loc) = std::env::var(var) {
            if let Some(code) = normalize_lang(&loc) {
                return Some(code);
            }
        }
    }
    None
}
