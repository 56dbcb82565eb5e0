use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config_store::{ConfigError, ConfigStore};
use crate::i18n::{self, LocaleError, Translator};
use crate::report;
use crate::resolver;
use crate::settings::{SettingsError, SettingsStore, LANGUAGE_KEY};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 구성 로드 오류
    Config(ConfigError),
    /// 언어팩 오류
    Locale(LocaleError),
    /// 설정 파일 오류
    Settings(SettingsError),
    /// 대상 소스 파일이 없음
    FileNotFound(PathBuf),
    /// 줄 번호가 파일 범위를 벗어남
    LineOutOfRange { line: usize, total: usize },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "구성 오류: {e}"),
            AppError::Locale(e) => write!(f, "언어팩 오류: {e}"),
            AppError::Settings(e) => write!(f, "설정 오류: {e}"),
            AppError::FileNotFound(p) => write!(f, "파일을 찾을 수 없음: {}", p.display()),
            AppError::LineOutOfRange { line, total } => {
                write!(f, "잘못된 줄 번호: {line} (전체 {total}줄)")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<LocaleError> for AppError {
    fn from(value: LocaleError) -> Self {
        AppError::Locale(value)
    }
}

impl From<SettingsError> for AppError {
    fn from(value: SettingsError) -> Self {
        AppError::Settings(value)
    }
}

/// 한 번의 실행에 필요한 모든 입력.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub file: PathBuf,
    /// 1부터 세는 줄 번호.
    pub line: usize,
    pub config_dir: PathBuf,
    pub locales_dir: PathBuf,
    pub settings_file: PathBuf,
    /// 이번 실행에 한해 설정보다 우선하는 언어 코드.
    pub lang: Option<String>,
    /// true면 --lang 선택을 설정 파일에도 저장한다.
    pub save_language: bool,
}

/// 한 번의 호출을 끝까지 처리한다: 줄 읽기 → 해석 → 보고 텍스트.
pub fn run(opts: &LaunchOptions) -> Result<String, AppError> {
    let text = fs::read_to_string(&opts.file).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::FileNotFound(opts.file.clone())
        } else {
            AppError::Io(e)
        }
    })?;
    let lines: Vec<&str> = text.lines().collect();
    if opts.line == 0 || opts.line > lines.len() {
        return Err(AppError::LineOutOfRange {
            line: opts.line,
            total: lines.len(),
        });
    }
    let line = lines[opts.line - 1].trim();

    let settings = SettingsStore::new(&opts.settings_file);
    let persisted = settings.get(LANGUAGE_KEY)?;
    let lang = i18n::resolve_language(opts.lang.as_deref(), persisted.as_deref());

    let mut tr = Translator::load(&opts.locales_dir, settings, &lang)?;
    if opts.save_language {
        tr.set_language(&lang)?;
    }

    let store = ConfigStore::load(&opts.config_dir)?;
    let result = resolver::resolve(line, &store);
    Ok(report::build(&result, &store, &tr))
}
