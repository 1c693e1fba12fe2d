//! 변환 실행 모듈
//!
//! 폴더 탐색, 레코드 추출, JSON 직렬화와 저장을 순서대로 실행합니다.
//! 파일 하나의 실패는 기록만 하고 다음 파일로 넘어가며, 출력 파일은
//! 모든 파일을 처리한 뒤 한 번에 씁니다.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::WriteMode;
use crate::config::{Config, MUSIC_FILE_NAME};
use crate::error::{MxJsonError, Result};
use crate::extractor::extract_record;
use crate::pattern::FileNameMatcher;
use crate::record::MusicRecord;
use crate::stats::Statistics;
use crate::walker::music_files;

/// JSON 들여쓰기 (공백 4칸)
const JSON_INDENT: &[u8] = b"    ";

/// 변환 실행 결과
#[derive(Debug)]
pub struct RunReport {
    /// 발견 순서대로 추출된 레코드
    pub records: Vec<MusicRecord>,
    /// 실패한 파일과 사유
    pub failures: Vec<(PathBuf, String)>,
    /// 발견된 모든 대상 파일
    pub files: Vec<PathBuf>,
    /// 저장된 출력 파일 (드라이런이면 None)
    pub output: Option<PathBuf>,
    /// 처리 통계
    pub stats: Statistics,
}

/// 입력 경로 유효성 검사
///
/// 탐색이나 출력 전에 호출되어야 하며, 실패하면 출력 파일은 건드리지 않습니다.
pub fn validate_input(config: &Config) -> Result<()> {
    if !config.input_dir.exists() {
        return Err(MxJsonError::InputNotFound {
            path: config.input_dir.clone(),
        });
    }

    if !config.input_dir.is_dir() {
        return Err(MxJsonError::NotADirectory {
            path: config.input_dir.clone(),
        });
    }

    Ok(())
}

/// 출력 모드 확인
fn check_output_mode(config: &Config) -> Result<()> {
    if config.mode == WriteMode::Error && config.output_path.exists() {
        return Err(MxJsonError::OutputExists {
            path: config.output_path.clone(),
        });
    }
    Ok(())
}

/// 전체 변환 실행
///
/// # Arguments
/// * `config` - 실행 설정
///
/// # Returns
/// 처리 결과를 담은 `RunReport`. 입력 폴더가 없거나 출력 파일을 쓸 수 없는
/// 경우에만 에러를 반환합니다.
pub fn run(config: &Config) -> Result<RunReport> {
    validate_input(config)?;

    let matcher = FileNameMatcher::new(MUSIC_FILE_NAME)?;

    if config.dry_run {
        let files: Vec<PathBuf> =
            music_files(&config.input_dir, &matcher, config.max_depth).collect();
        print_dry_run(&files);

        return Ok(RunReport {
            records: Vec::new(),
            failures: Vec::new(),
            files,
            output: None,
            stats: Statistics::default(),
        });
    }

    check_output_mode(config)?;

    let pb = create_progress_bar(config.show_progress);
    let mut stats = Statistics::start();
    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut files = Vec::new();

    for path in music_files(&config.input_dir, &matcher, config.max_depth) {
        match extract_record(&path) {
            Ok(record) => {
                let file_size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                stats.record_success(file_size, record.info.chart_count());
                pb.suspend(|| print_processed(&record, &path, config.verbose));
                records.push(record);
            }
            Err(e) => {
                stats.record_error();
                let reason = e.to_string();
                pb.suspend(|| {
                    println!(
                        "  {} 파일 처리 실패 {}: {}",
                        "✗".red(),
                        path.display(),
                        reason.dimmed()
                    )
                });
                failures.push((path.clone(), reason));
            }
        }

        files.push(path);
        pb.inc(1);
    }

    pb.finish_and_clear();

    let json = to_json_pretty(&records)?;
    let bytes_written = write_output(&config.output_path, &json)?;
    stats.add_bytes_written(bytes_written);

    print_errors(&failures);

    // 로그 저장 실패는 이미 저장된 결과에 영향을 주지 않음
    if let Some(ref log_path) = config.error_log {
        if let Err(e) = write_error_log(log_path, &failures) {
            println!("\n{} {}", "⚠️ 에러 로그 저장 실패:".yellow(), e);
        }
    }

    stats.print_summary(&config.output_path);

    Ok(RunReport {
        records,
        failures,
        files,
        output: Some(config.output_path.clone()),
        stats,
    })
}

/// 레코드 목록을 들여쓰기된 JSON 배열 문자열로 직렬화
///
/// 비 ASCII 문자는 이스케이프하지 않고 그대로 유지됩니다.
pub fn to_json_pretty(records: &[MusicRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    records
        .serialize(&mut serializer)
        .map_err(|e| MxJsonError::SerializeError {
            reason: e.to_string(),
        })?;

    String::from_utf8(buf).map_err(|e| MxJsonError::SerializeError {
        reason: e.to_string(),
    })
}

/// 완성된 JSON 텍스트를 한 번에 저장
///
/// 상위 폴더가 없으면 생성합니다. 쓴 바이트 수를 반환합니다.
pub fn write_output(path: &Path, json: &str) -> Result<u64> {
    let write_error = |e: std::io::Error| MxJsonError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    fs::write(path, json).map_err(write_error)?;

    Ok(json.len() as u64)
}

/// 에러 로그 파일 작성
pub fn write_error_log(log_path: &Path, errors: &[(PathBuf, String)]) -> Result<()> {
    let write_error = |e: std::io::Error| MxJsonError::WriteError {
        path: log_path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut log_file = File::create(log_path).map_err(write_error)?;

    writeln!(log_file, "mxjson 에러 로그").map_err(write_error)?;
    writeln!(log_file, "생성 시간: {}", timestamp_now()).map_err(write_error)?;
    writeln!(log_file, "총 에러 수: {}", errors.len()).map_err(write_error)?;
    writeln!(log_file, "{}", "=".repeat(50)).map_err(write_error)?;

    for (path, error) in errors {
        writeln!(log_file, "\n파일: {}", path.display()).map_err(write_error)?;
        writeln!(log_file, "에러: {}", error).map_err(write_error)?;
    }

    println!(
        "\n{} 에러 로그 저장: {}",
        "📝".bright_cyan(),
        log_path.display()
    );

    Ok(())
}

/// 처리 완료 라인 출력
fn print_processed(record: &MusicRecord, path: &Path, verbose: bool) {
    println!(
        "  {} 처리됨: {} (ID: {})",
        "✓".green(),
        record.info.name,
        record.music_id
    );
    if verbose {
        println!("    {}", path.display().to_string().dimmed());
    }
}

/// 드라이런 출력
fn print_dry_run(files: &[PathBuf]) {
    println!("\n{}", "📋 처리 예정 파일 목록:".bright_cyan());
    for (i, path) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, path.display());
    }
    println!(
        "\n{} 총 {} 개의 파일이 처리될 예정입니다.",
        "ℹ️".bright_blue(),
        files.len().to_string().bright_green()
    );
}

/// 에러 목록 출력
fn print_errors(errors: &[(PathBuf, String)]) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for (path, _) in errors {
        println!("  {} {}", "•".red(), path.display());
    }
}

/// 진행 스피너 생성 (비활성화 시 숨김)
fn create_progress_bar(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {pos} 파일 처리됨 {msg}")
    {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 현재 시간 문자열 반환
fn timestamp_now() -> String {
    use std::time::SystemTime;
    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
