//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::path::Path;
use std::time::{Duration, Instant};

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 발견된 파일 수
    pub total_files: usize,
    /// 성공 처리 수
    pub success_count: usize,
    /// 에러 발생 수
    pub error_count: usize,
    /// 수집된 활성 보면 수
    pub chart_count: usize,
    /// 읽은 총 바이트
    pub total_bytes_read: u64,
    /// 쓴 총 바이트
    pub total_bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성 (시작 시간 기록)
    pub fn start() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 성공 기록
    pub fn record_success(&mut self, bytes: u64, charts: usize) {
        self.total_files += 1;
        self.success_count += 1;
        self.chart_count += charts;
        self.total_bytes_read += bytes;
    }

    /// 실패 기록
    pub fn record_error(&mut self) {
        self.total_files += 1;
        self.error_count += 1;
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&mut self, bytes: u64) {
        self.total_bytes_written += bytes;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 성공률 (발견된 파일이 없으면 None)
    pub fn success_rate(&self) -> Option<f64> {
        if self.total_files == 0 {
            return None;
        }
        Some((self.success_count as f64 / self.total_files as f64) * 100.0)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self, output: &Path) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 발견 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 성공:         {}",
            "✅".bright_green(),
            self.success_count.to_string().green()
        );

        if self.error_count > 0 {
            println!(
                "  {} 실패:         {}",
                "❌".bright_red(),
                self.error_count.to_string().red()
            );
        } else {
            println!("  {} 실패:         {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 활성 보면:    {}",
            "🎵".bright_magenta(),
            self.chart_count
        );
        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.total_bytes_read)
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.total_bytes_written)
        );

        if let Some(rate) = self.success_rate() {
            println!("  {} 성공률:       {:.1}%", "📈".bright_white(), rate);
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "\n{} 처리 완료! 총 {} 건, 저장 위치: {}\n",
            "✅".bright_green(),
            self.success_count.to_string().bright_green(),
            output.display()
        );
    }
}

/// 1024 단위로 올라가는 크기 단위
const SIZE_UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// 바이트 수를 사람이 읽는 크기로 변환 (1 KB 미만은 정수, 이상은 소수 둘째 자리)
///
/// ```
/// use mxjson::stats::format_bytes;
///
/// assert_eq!(format_bytes(999), "999 B");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", SIZE_UNITS[unit])
}

/// 경과 시간을 가장 큰 두 단위로 표시
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    match (secs / 3600, secs % 3600 / 60, secs % 60) {
        (0, 0, 0) => format!("{millis}ms"),
        (0, 0, s) => format!("{s}.{millis:03}초"),
        (0, m, s) => format!("{m}분 {s}초"),
        (h, m, _) => format!("{h}시간 {m}분"),
    }
}
