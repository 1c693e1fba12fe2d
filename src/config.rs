//! 실행 설정 모듈
//!
//! 입력/출력 경로와 실행 옵션을 하나의 구조체로 묶어 드라이버에 전달합니다.

use std::path::PathBuf;

use crate::cli::WriteMode;

/// 기본 입력 폴더 (게임 에셋의 music 폴더)
pub const DEFAULT_INPUT_DIR: &str =
    r"D:\Applications\Games\SEGA\SDGB_1.50\Sinmai_Data\StreamingAssets\A000\music";

/// 기본 출력 파일
pub const DEFAULT_OUTPUT_PATH: &str = "public/music_info.json";

/// 탐색 대상 파일 이름 (실행 중 변경 불가)
pub const MUSIC_FILE_NAME: &str = "Music.xml";

/// 변환 실행 설정
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 탐색할 루트 폴더
    pub input_dir: PathBuf,
    /// JSON 출력 파일
    pub output_path: PathBuf,
    /// 출력 파일 모드
    pub mode: WriteMode,
    /// 최대 탐색 깊이
    pub max_depth: Option<usize>,
    /// 처리 대상만 출력하고 종료
    pub dry_run: bool,
    /// 성공 라인에 원본 경로 표시
    pub verbose: bool,
    /// 에러 로그 파일
    pub error_log: Option<PathBuf>,
    /// 스피너 표시 여부
    pub show_progress: bool,
}

impl Config {
    /// 기본 옵션으로 설정 생성
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            mode: WriteMode::Overwrite,
            max_depth: None,
            dry_run: false,
            verbose: false,
            error_log: None,
            show_progress: false,
        }
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_error_log(mut self, error_log: Option<PathBuf>) -> Self {
        self.error_log = error_log;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH)
    }
}
