use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use lookatme::app::{self, LaunchOptions};

/// 에디터 외부 도구용 파라미터 조회기: 소스 파일의 한 줄을
/// YAML 구성과 대조해 일치한 주소/파라미터/값 설명을 출력한다.
#[derive(Debug, Parser)]
#[command(name = "lookatme", version)]
struct Cli {
    /// 대상 소스 파일 경로
    file: PathBuf,
    /// 1부터 세는 줄 번호
    line: usize,
    /// 이번 실행의 언어 코드 (auto = 시스템 로케일)
    #[arg(short = 'L', long)]
    lang: Option<String>,
    /// --lang 선택을 설정 파일에 저장
    #[arg(long, requires = "lang")]
    save_language: bool,
    /// 주소/파라미터 정의 YAML 디렉터리
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,
    /// 언어팩 디렉터리
    #[arg(long, default_value = "locales/language")]
    locales_dir: PathBuf,
    /// language/theme를 담는 설정 파일
    #[arg(long, default_value = "locales/config.yaml")]
    settings_file: PathBuf,
}

/// 프로그램의 엔트리 포인트. 오류 메시지는 표준 출력으로 나간다.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let opts = LaunchOptions {
        file: cli.file,
        line: cli.line,
        config_dir: cli.config_dir,
        locales_dir: cli.locales_dir,
        settings_file: cli.settings_file,
        lang: cli.lang,
        save_language: cli.save_language,
    };

    match app::run(&opts) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}
