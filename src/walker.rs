//! 폴더 탐색 모듈
//!
//! 루트 폴더 아래를 재귀적으로 탐색하여 대상 파일 이름과 일치하는
//! 파일 경로를 지연 시퀀스로 돌려줍니다.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::pattern::FileNameMatcher;

/// 대상 파일 탐색
///
/// # Arguments
/// * `root` - 탐색할 루트 폴더
/// * `matcher` - 파일 이름 매처 (기본값: `Music.xml`)
/// * `max_depth` - 최대 탐색 깊이 (루트 = 0)
///
/// # Returns
/// 발견 순서대로 파일 경로를 내놓는 반복자. 존재하지 않는 루트나 읽을 수 없는
/// 항목은 건너뛰며, 존재 여부 확인은 호출 측 책임입니다. 폴더가 아닌 항목은
/// 깨진 심볼릭 링크라도 그대로 내보내 추출 단계에서 실패로 기록되게 합니다.
pub fn music_files<'a>(
    root: &Path,
    matcher: &'a FileNameMatcher,
    max_depth: Option<usize>,
) -> impl Iterator<Item = PathBuf> + 'a {
    let walker = match max_depth {
        Some(depth) => WalkDir::new(root).max_depth(depth),
        None => WalkDir::new(root),
    };

    walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .filter(move |e| {
            e.file_name()
                .to_str()
                .map(|name| matcher.matches(name))
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
}
