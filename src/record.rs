//! 곡 레코드 모델
//!
//! `Music.xml` 하나에서 추출한 곡 정보를 JSON 출력 형태 그대로 표현합니다.
//! 키 이름(`musicid`, `AddVersion` 등)은 프론트엔드가 그대로 참조하므로
//! 대소문자를 바꾸지 않습니다.

use serde::{Deserialize, Serialize};

/// 활성화된 보면(차트) 하나의 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteChart {
    /// 난이도 레벨 (예: "13")
    pub level: String,
    /// 레벨 소수부 (예: "7")
    pub level_decimal: String,
    /// 보면 제작자 이름
    pub designer: String,
}

impl NoteChart {
    pub fn new(
        level: impl Into<String>,
        level_decimal: impl Into<String>,
        designer: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            level_decimal: level_decimal.into(),
            designer: designer.into(),
        }
    }
}

/// 곡 상세 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicInfo {
    pub name: String,

    #[serde(rename = "artistName")]
    pub artist_name: String,

    /// 숫자로 변환하지 않고 원문 그대로 보존
    pub bpm: String,

    #[serde(rename = "AddVersion")]
    pub add_version: String,

    #[serde(rename = "levelList")]
    pub level_list: Vec<String>,

    #[serde(rename = "noteDesignerList")]
    pub note_designer_list: Vec<String>,

    /// 별칭 목록 자리 (항상 빈 문자열)
    #[serde(rename = "aliasNameList")]
    pub alias_name_list: String,

    #[serde(rename = "levelDecimalList")]
    pub level_decimal_list: Vec<String>,
}

impl MusicInfo {
    /// 기본 정보와 활성 보면 목록으로 생성
    ///
    /// 세 개의 병렬 목록(`levelList`, `noteDesignerList`, `levelDecimalList`)은
    /// 같은 `charts`에서 만들어지므로 길이와 인덱스가 항상 일치합니다.
    pub fn new(
        name: impl Into<String>,
        artist_name: impl Into<String>,
        bpm: impl Into<String>,
        add_version: impl Into<String>,
        charts: Vec<NoteChart>,
    ) -> Self {
        let mut level_list = Vec::with_capacity(charts.len());
        let mut note_designer_list = Vec::with_capacity(charts.len());
        let mut level_decimal_list = Vec::with_capacity(charts.len());

        for chart in charts {
            level_list.push(chart.level);
            level_decimal_list.push(chart.level_decimal);
            note_designer_list.push(chart.designer);
        }

        Self {
            name: name.into(),
            artist_name: artist_name.into(),
            bpm: bpm.into(),
            add_version: add_version.into(),
            level_list,
            note_designer_list,
            alias_name_list: String::new(),
            level_decimal_list,
        }
    }

    /// 활성 보면 수
    pub fn chart_count(&self) -> usize {
        self.level_list.len()
    }

    /// 인덱스별 보면 정보를 다시 묶어서 순회
    pub fn charts(&self) -> impl Iterator<Item = NoteChart> + '_ {
        self.level_list
            .iter()
            .zip(&self.level_decimal_list)
            .zip(&self.note_designer_list)
            .map(|((level, decimal), designer)| NoteChart::new(level, decimal, designer))
    }
}

/// 곡 레코드 (원본 파일 하나당 하나)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicRecord {
    #[serde(rename = "musicid")]
    pub music_id: String,
    pub info: MusicInfo,
}

impl MusicRecord {
    pub fn new(music_id: impl Into<String>, info: MusicInfo) -> Self {
        Self {
            music_id: music_id.into(),
            info,
        }
    }
}
