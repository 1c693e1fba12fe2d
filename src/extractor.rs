//! Music.xml 처리 모듈
//!
//! 개별 XML 파일의 읽기, 파싱, 곡 레코드 추출을 담당합니다.
//! 추출은 파일 단위로 전부 성공하거나 전부 실패합니다.

use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;

use crate::error::{MxJsonError, Result};
use crate::record::{MusicInfo, MusicRecord, NoteChart};

/// 곡 ID 경로
pub const ID_PATH: &str = "name/id";
/// 곡 제목 경로
pub const NAME_PATH: &str = "name/str";
/// 아티스트 경로
pub const ARTIST_PATH: &str = "artistName/str";
/// BPM 경로
pub const BPM_PATH: &str = "bpm";
/// 추가 버전 경로
pub const ADD_VERSION_PATH: &str = "AddVersion/str";

const NOTES_CONTAINER: &str = "notesData";
const NOTES_ELEMENT: &str = "Notes";
const IS_ENABLE_PATH: &str = "isEnable";
const LEVEL_PATH: &str = "level";
const LEVEL_DECIMAL_PATH: &str = "levelDecimal";
const DESIGNER_PATH: &str = "notesDesigner/str";

/// 단일 Music.xml 파일에서 곡 레코드 추출
///
/// # Arguments
/// * `path` - 처리할 XML 파일 경로
///
/// # Returns
/// 추출된 `MusicRecord` 또는 `FileOpenError` / `ParseError` / `MissingField`
pub fn extract_record(path: &Path) -> Result<MusicRecord> {
    let text = fs::read_to_string(path).map_err(|e| MxJsonError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    extract_from_str(&text, path)
}

/// 메모리에 있는 XML 문자열에서 곡 레코드 추출
///
/// `path`는 에러 메시지에만 사용됩니다.
pub fn extract_from_str(xml: &str, path: &Path) -> Result<MusicRecord> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(xml, options).map_err(|e| MxJsonError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let fields = FieldReader {
        file: path,
        root: doc.root_element(),
    };

    let music_id = fields.required(ID_PATH)?;
    let name = fields.required(NAME_PATH)?;
    let artist = fields.required(ARTIST_PATH)?;
    let bpm = fields.required(BPM_PATH)?;
    let add_version = fields.required(ADD_VERSION_PATH)?;

    let mut charts = Vec::new();
    for notes in note_entries(doc.root_element()) {
        let entry = FieldReader {
            file: path,
            root: notes,
        };

        if !is_enabled(&entry.required_text(IS_ENABLE_PATH)?) {
            continue;
        }

        charts.push(NoteChart::new(
            entry.required(LEVEL_PATH)?,
            entry.required(LEVEL_DECIMAL_PATH)?,
            entry.required(DESIGNER_PATH)?,
        ));
    }

    Ok(MusicRecord::new(
        music_id,
        MusicInfo::new(name, artist, bpm, add_version, charts),
    ))
}

/// 활성화 플래그 판정 (소문자로 변환 후 "true"와 비교)
pub fn is_enabled(flag: &str) -> bool {
    flag.to_lowercase() == "true"
}

/// 기준 요소에서 고정 경로로 필드를 읽는 헬퍼
struct FieldReader<'a, 'input: 'a> {
    file: &'a Path,
    root: Node<'a, 'input>,
}

impl<'a, 'input: 'a> FieldReader<'a, 'input> {
    /// 경로의 텍스트를 읽고, 없으면 `MissingField`로 변환
    fn required(&self, path: &str) -> Result<String> {
        find_text(self.root, path).ok_or_else(|| MxJsonError::MissingField {
            file: self.file.to_path_buf(),
            path: path.to_string(),
        })
    }

    /// 요소와 텍스트가 모두 있어야 하는 필드 (`<isEnable/>`도 누락으로 처리)
    fn required_text(&self, path: &str) -> Result<String> {
        find_element(self.root, path)
            .and_then(element_text)
            .ok_or_else(|| MxJsonError::MissingField {
                file: self.file.to_path_buf(),
                path: path.to_string(),
            })
    }
}

/// `a/b/c` 형식의 상대 경로로 첫 번째 일치 요소 검색
///
/// 각 구간은 직계 자식 요소를 의미하며, 같은 이름의 형제가 여럿이면
/// 문서 순서상 먼저 일치하는 경로가 선택됩니다.
pub fn find_element<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    path: &str,
) -> Option<Node<'a, 'input>> {
    let (head, rest) = match path.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };

    for child in node
        .children()
        .filter(|c| c.is_element() && c.has_tag_name(head))
    {
        match rest {
            Some(rest) => {
                if let Some(found) = find_element(child, rest) {
                    return Some(found);
                }
            }
            None => return Some(child),
        }
    }

    None
}

/// 경로 요소의 텍스트 (요소는 있지만 텍스트가 없으면 빈 문자열)
pub fn find_text(node: Node<'_, '_>, path: &str) -> Option<String> {
    find_element(node, path).map(|e| element_text(e).unwrap_or_default())
}

/// 첫 자식 요소 앞까지의 텍스트 노드를 이어 붙인 값
///
/// 주석과 처리 명령은 건너뛰므로 `<str>Ti<!--c-->tle</str>`은 "Title"이 됩니다.
/// 텍스트 노드가 하나도 없으면 None.
pub fn element_text(element: Node<'_, '_>) -> Option<String> {
    let mut chunks = element
        .children()
        .take_while(|c| !c.is_element())
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .peekable();

    chunks.peek()?;
    Some(chunks.collect())
}

/// 루트 아래 어디에 있든 `notesData/Notes` 요소를 문서 순서대로 수집
///
/// `notesData`가 서로 중첩된 경우에도 부모별로 묶지 않고 문서 순서를 따릅니다.
fn note_entries<'a, 'input: 'a>(
    root: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    root.descendants().filter(move |node| {
        node.is_element()
            && node.has_tag_name(NOTES_ELEMENT)
            && node
                .parent_element()
                .map(|parent| parent != root && parent.has_tag_name(NOTES_CONTAINER))
                .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn notes(enable: &str, level: &str, decimal: &str, designer: &str) -> String {
        format!(
            "<Notes><isEnable>{enable}</isEnable><level>{level}</level>\
             <levelDecimal>{decimal}</levelDecimal>\
             <notesDesigner><id>0</id><str>{designer}</str></notesDesigner></Notes>"
        )
    }

    fn music_xml(notes: &[String]) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<MusicData xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dataName>music011451</dataName>
  <name><id>11451</id><str>テスト曲</str></name>
  <artistName><id>1</id><str>Test Artist</str></artistName>
  <bpm>180</bpm>
  <AddVersion><id>22</id><str>PRiSM</str></AddVersion>
  <notesData>{}</notesData>
</MusicData>"#,
            notes.concat()
        )
    }

    fn extract(xml: &str) -> Result<MusicRecord> {
        extract_from_str(xml, &PathBuf::from("Music.xml"))
    }

    #[test]
    fn test_extract_basic_fields() {
        let record = extract(&music_xml(&[notes("true", "5", "0", "-")])).unwrap();

        assert_eq!(record.music_id, "11451");
        assert_eq!(record.info.name, "テスト曲");
        assert_eq!(record.info.artist_name, "Test Artist");
        assert_eq!(record.info.bpm, "180");
        assert_eq!(record.info.add_version, "PRiSM");
        assert_eq!(record.info.alias_name_list, "");
    }

    #[test]
    fn test_disabled_charts_are_dropped() {
        let record = extract(&music_xml(&[
            notes("true", "3", "0", "A"),
            notes("false", "7", "5", "B"),
            notes("true", "13", "7", "C"),
            notes("FALSE", "14", "9", "D"),
            notes("0", "15", "0", "E"),
        ]))
        .unwrap();

        assert_eq!(record.info.level_list, vec!["3", "13"]);
        assert_eq!(record.info.level_decimal_list, vec!["0", "7"]);
        assert_eq!(record.info.note_designer_list, vec!["A", "C"]);
    }

    #[test]
    fn test_enable_flag_is_case_insensitive() {
        let record = extract(&music_xml(&[
            notes("TrUe", "1", "0", "a"),
            notes("TRUE", "2", "0", "b"),
            notes("True", "3", "0", "c"),
            notes("yes", "4", "0", "d"),
        ]))
        .unwrap();

        assert_eq!(record.info.level_list, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_is_enabled() {
        assert!(is_enabled("true"));
        assert!(is_enabled("tRuE"));
        assert!(!is_enabled("false"));
        assert!(!is_enabled(" true"));
        assert!(!is_enabled("1"));
    }

    #[test]
    fn test_missing_required_field() {
        let xml = r#"<MusicData><name><id>1</id><str>x</str></name>
            <artistName><str>y</str></artistName><bpm>100</bpm></MusicData>"#;

        match extract(xml) {
            Err(MxJsonError::MissingField { path, .. }) => assert_eq!(path, ADD_VERSION_PATH),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_enable_flag_fails_whole_record() {
        let broken = "<Notes><level>3</level></Notes>".to_string();
        let result = extract(&music_xml(&[notes("true", "1", "0", "a"), broken]));

        match result {
            Err(MxJsonError::MissingField { path, .. }) => assert_eq!(path, "isEnable"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_enabled_chart_missing_designer_fails() {
        let broken = "<Notes><isEnable>true</isEnable><level>3</level>\
                      <levelDecimal>0</levelDecimal></Notes>"
            .to_string();

        match extract(&music_xml(&[broken])) {
            Err(MxJsonError::MissingField { path, .. }) => assert_eq!(path, DESIGNER_PATH),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_enable_flag_fails_whole_record() {
        let empty = "<Notes><isEnable/><level>3</level><levelDecimal>0</levelDecimal>\
                     <notesDesigner><str>x</str></notesDesigner></Notes>"
            .to_string();

        match extract(&music_xml(&[notes("true", "1", "0", "a"), empty])) {
            Err(MxJsonError::MissingField { path, .. }) => assert_eq!(path, IS_ENABLE_PATH),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_comments_inside_text_are_skipped() {
        let xml = r#"<MusicData>
  <name><id>5<!-- legacy --></id><str>Ti<!--c-->tle</str></name>
  <artistName><str><!--c-->Artist</str></artistName>
  <bpm>1<?pi x?>50</bpm>
  <AddVersion><str>v</str></AddVersion>
  <notesData><Notes><isEnable>tr<!--c-->ue</isEnable><level>8</level>
    <levelDecimal>0</levelDecimal><notesDesigner><str>d</str></notesDesigner></Notes></notesData>
</MusicData>"#;

        let record = extract(xml).unwrap();
        assert_eq!(record.music_id, "5");
        assert_eq!(record.info.name, "Title");
        assert_eq!(record.info.artist_name, "Artist");
        assert_eq!(record.info.bpm, "150");
        assert_eq!(record.info.level_list, vec!["8"]);
    }

    #[test]
    fn test_element_text_stops_at_first_child_element() {
        let doc = Document::parse("<r>head<b>inner</b>tail</r>").unwrap();
        assert_eq!(element_text(doc.root_element()), Some("head".to_string()));

        let doc = Document::parse("<r><!--only comment--></r>").unwrap();
        assert_eq!(element_text(doc.root_element()), None);
    }

    #[test]
    fn test_disabled_chart_fields_are_not_required() {
        let sparse = "<Notes><isEnable>false</isEnable></Notes>".to_string();
        let record = extract(&music_xml(&[sparse])).unwrap();
        assert_eq!(record.info.chart_count(), 0);
    }

    #[test]
    fn test_malformed_xml() {
        let result = extract("<MusicData><name><id>1</id></MusicData");
        assert!(matches!(result, Err(MxJsonError::ParseError { .. })));
    }

    #[test]
    fn test_notes_found_at_any_depth() {
        let xml = r#"<MusicData>
  <name><id>7</id><str>deep</str></name>
  <artistName><str>a</str></artistName>
  <bpm>120</bpm>
  <AddVersion><str>v</str></AddVersion>
  <wrapper><inner><notesData>
    <Notes><isEnable>true</isEnable><level>9</level><levelDecimal>6</levelDecimal>
      <notesDesigner><str>d</str></notesDesigner></Notes>
  </notesData></inner></wrapper>
  <Notes><isEnable>true</isEnable><level>99</level><levelDecimal>0</levelDecimal>
    <notesDesigner><str>stray</str></notesDesigner></Notes>
</MusicData>"#;

        let record = extract(xml).unwrap();
        assert_eq!(record.info.level_list, vec!["9"]);
        assert_eq!(record.info.note_designer_list, vec!["d"]);
    }

    #[test]
    fn test_nested_notes_data_keeps_document_order() {
        let outer = "<Notes><isEnable>true</isEnable><level>1</level><levelDecimal>0</levelDecimal>\
             <notesDesigner><str>outer</str></notesDesigner>\
             <notesData>NESTED</notesData></Notes>"
            .replace("NESTED", &notes("true", "2", "0", "inner"));
        let record = extract(&music_xml(&[outer, notes("true", "3", "0", "last")])).unwrap();

        assert_eq!(record.info.level_list, vec!["1", "2", "3"]);
        assert_eq!(record.info.note_designer_list, vec!["outer", "inner", "last"]);
    }

    #[test]
    fn test_text_is_preserved_verbatim() {
        let xml = r#"<MusicData>
  <name><id>0042</id><str> spaced  title </str></name>
  <artistName><str>アーティスト</str></artistName>
  <bpm>099</bpm>
  <AddVersion><str>maimai</str></AddVersion>
  <notesData><Notes><isEnable>true</isEnable><level>13+</level>
    <levelDecimal>07</levelDecimal><notesDesigner><str>x</str></notesDesigner></Notes></notesData>
</MusicData>"#;

        let record = extract(xml).unwrap();
        assert_eq!(record.music_id, "0042");
        assert_eq!(record.info.name, " spaced  title ");
        assert_eq!(record.info.bpm, "099");
        assert_eq!(record.info.level_list, vec!["13+"]);
        assert_eq!(record.info.level_decimal_list, vec!["07"]);
    }

    #[test]
    fn test_empty_element_yields_empty_string() {
        let xml = r#"<MusicData><name><id>1</id><str/></name>
            <artistName><str>a</str></artistName><bpm>1</bpm>
            <AddVersion><str>v</str></AddVersion></MusicData>"#;

        let record = extract(xml).unwrap();
        assert_eq!(record.info.name, "");
    }

    #[test]
    fn test_bom_is_tolerated() {
        let xml = format!("\u{feff}{}", music_xml(&[]));
        assert!(extract(&xml).is_ok());
    }

    #[test]
    fn test_find_element_searches_all_matching_parents() {
        let doc = Document::parse("<r><name><x/></name><name><id>2</id></name></r>").unwrap();
        assert_eq!(find_text(doc.root_element(), "name/id"), Some("2".to_string()));
        assert_eq!(find_text(doc.root_element(), "name/str"), None);
    }

    #[test]
    fn test_extract_record_missing_file() {
        let result = extract_record(Path::new("/nonexistent/dir/Music.xml"));
        assert!(matches!(result, Err(MxJsonError::FileOpenError { .. })));
    }
}
