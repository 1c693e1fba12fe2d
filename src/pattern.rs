//! 패턴 매칭 모듈
//!
//! 탐색 대상 파일 이름 매칭을 담당합니다. 기본값 `Music.xml`은
//! 와일드카드가 없으므로 대소문자를 구분하는 정확한 일치로 동작합니다.

use glob::Pattern;

use crate::error::{MxJsonError, Result};

/// 컴파일된 파일 이름 매처
#[derive(Debug, Clone)]
pub struct FileNameMatcher {
    pattern: Pattern,
}

impl FileNameMatcher {
    /// 새 파일 이름 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 파일 이름 또는 글로브 패턴 문자열
    ///
    /// # Returns
    /// 컴파일된 `FileNameMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use mxjson::pattern::FileNameMatcher;
    ///
    /// let matcher = FileNameMatcher::new("Music.xml").unwrap();
    /// assert!(matcher.matches("Music.xml"));
    /// assert!(!matcher.matches("music.xml"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|_| MxJsonError::InvalidPattern {
            pattern: pattern.to_string(),
        })?;

        Ok(Self { pattern: compiled })
    }

    /// 파일 이름이 패턴과 일치하는지 확인
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }

    /// 원본 패턴 문자열
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}
