//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};

/// 출력 파일 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum WriteMode {
    /// 기존 파일이 있으면 덮어쓰기
    #[default]
    Overwrite,
    /// 기존 파일이 있으면 에러
    Error,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Overwrite => write!(f, "Overwrite"),
            WriteMode::Error => write!(f, "Error"),
        }
    }
}

/// mxjson CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "mxjson",
    author = "YourName <your@email.com>",
    version,
    about = "MUSIC XML TO JSON CONVERTER - 폴더 내 Music.xml 파일들을 하나의 JSON 배열로 병합하는 CLI 도구",
    long_about = r#"
MUSIC XML TO JSON CONVERTER
===========================

게임 에셋 폴더를 재귀적으로 탐색하여 모든 Music.xml 파일에서
곡 정보(ID, 제목, 아티스트, BPM, 추가 버전, 보면 레벨/제작자)를 추출하고
하나의 JSON 배열 파일로 저장합니다.

특징:
  • 활성화된 보면(isEnable = true)만 수집
  • 파싱에 실패한 파일은 건너뛰고 나머지는 그대로 저장
  • 비 ASCII 문자(일본어 곡명 등)를 그대로 보존
  • 에러 로그 파일 및 드라이런 지원

예제:
  mxjson -i ./A000/music -o public/music_info.json
  mxjson -i ./A000/music --dry-run
  mxjson -i ./A000/music --log errors.txt --mode error
"#
)]
pub struct Args {
    /// Music.xml 파일들이 있는 입력 폴더 경로
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// 생성될 JSON 파일 경로
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// 출력 파일 모드
    #[arg(short, long, value_enum, default_value_t = WriteMode::Overwrite)]
    pub mode: WriteMode,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// 진행 표시 끄기
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// 실행 설정으로 변환
    pub fn to_config(&self) -> Config {
        Config::new(self.input.clone(), self.output.clone())
            .with_mode(self.mode)
            .with_verbose(self.verbose)
            .with_dry_run(self.dry_run)
            .with_max_depth(self.max_depth)
            .with_error_log(self.log.clone())
            .with_progress(!self.no_progress)
    }
}
