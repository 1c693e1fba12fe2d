//! mxjson - MUSIC XML TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mxjson::{
    cli::Args,
    config::{Config, MUSIC_FILE_NAME},
    driver,
    error::MxJsonError,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config();

    // 헤더 출력
    print_header(&config);

    match driver::run(&config) {
        Ok(_) => Ok(()),
        Err(e @ MxJsonError::InputNotFound { .. }) => {
            println!(
                "{} {}",
                "❌ 오류:".bright_red(),
                "입력 폴더를 찾을 수 없습니다. --input 경로를 확인하세요.".red()
            );
            Err(anyhow::anyhow!("{}", e))
        }
        Err(e) => Err(anyhow::anyhow!("{}", e)),
    }
}

/// 헤더 출력
fn print_header(config: &Config) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 MUSIC XML TO JSON CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 입력 폴더: {}",
        "📂".bright_cyan(),
        config.input_dir.display()
    );

    if !config.dry_run {
        println!(
            "  {} 출력 파일: {}",
            "📄".bright_green(),
            config.output_path.display()
        );
        println!("  {} 모드: {}", "⚙️".bright_yellow(), config.mode);
    }

    println!("  {} 대상 파일: {}", "🔍".bright_magenta(), MUSIC_FILE_NAME);

    if let Some(depth) = config.max_depth {
        println!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    if config.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 Music.xml 검색 및 처리 중...".bright_cyan());
}
