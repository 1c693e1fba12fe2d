//! mxjson - MUSIC XML TO JSON CONVERTER
//!
//! 게임 에셋 폴더에 흩어진 `Music.xml` 파일들을 하나의 JSON 배열로 병합하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **재귀 탐색**: 하위 폴더 깊이에 관계없이 `Music.xml` 수집
//! - 🎵 **보면 필터링**: `isEnable`이 true인 보면만 레벨/소수부/제작자 목록에 포함
//! - 🛡️ **파일 단위 복구**: 잘못된 파일은 건너뛰고 나머지 결과는 그대로 저장
//! - 🌏 **유니코드 보존**: 일본어 곡명 등을 이스케이프 없이 출력
//! - 📈 **상세 통계**: 성공/실패 파일 수, 입출력 용량, 처리 시간 표시
//! - 🧪 **드라이런 모드**: 실제 변환 없이 처리될 파일 목록 미리 확인
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! mxjson -i ./A000/music -o public/music_info.json
//!
//! # 처리될 파일만 확인
//! mxjson -i ./A000/music --dry-run
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod extractor;
pub mod pattern;
pub mod record;
pub mod stats;
pub mod walker;

// Re-exports for convenient access
pub use cli::{Args, WriteMode};
pub use config::Config;
pub use driver::{run, validate_input, RunReport};
pub use error::{MxJsonError, Result};
pub use extractor::extract_record;
pub use pattern::FileNameMatcher;
pub use record::{MusicInfo, MusicRecord, NoteChart};
pub use stats::{format_bytes, Statistics};
