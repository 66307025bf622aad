//! 저장 파일명 생성 유틸리티
//!
//! 업로드된 이미지를 디스크에 기록할 때 사용할 저장 파일명을 생성합니다.
//! 클라이언트가 보낸 원본 파일명은 그대로 믿을 수 없으므로
//! UUID 기반의 새 이름을 만들고, 확장자만 정리해서 이어 붙입니다.

use uuid::Uuid;

/// 확장자로 허용하는 최대 길이
const MAX_EXTENSION_LEN: usize = 8;

/// 업로드 파일의 저장 파일명을 생성합니다.
///
/// UUID v4를 몸통으로 사용하므로 실용적으로 충돌이 없으며,
/// 경로 구분자가 포함될 수 없습니다. 원본 파일명에 쓸 만한
/// 확장자가 있으면 소문자로 정리해서 유지합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let name = generate(Some("사과 사진.JPG"));
/// assert!(name.ends_with(".jpg"));
/// ```
pub fn generate(original_name: Option<&str>) -> String {
    let stem = Uuid::new_v4().simple().to_string();

    match original_name.and_then(sanitized_extension) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

/// 원본 파일명에서 안전한 확장자를 추출합니다.
///
/// 마지막 '.' 뒤의 조각이 영숫자로만 이루어져 있고 길이가
/// 적당할 때만 소문자로 돌려줍니다.
fn sanitized_extension(name: &str) -> Option<String> {
    let ext = name.rsplit('.').next()?;
    if ext.len() == name.len() {
        // '.' 자체가 없는 파일명
        return None;
    }
    if ext.is_empty() || ext.len() > MAX_EXTENSION_LEN {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_names_are_unique() {
        let a = generate(Some("photo.jpg"));
        let b = generate(Some("photo.jpg"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_extension_is_kept_and_lowercased() {
        let name = generate(Some("사과 사진.JPG"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_no_extension_when_original_has_none() {
        let name = generate(Some("photo"));
        assert!(!name.contains('.'));

        let name = generate(None);
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_suspicious_extensions_are_dropped() {
        // 경로 구분자나 비정상적으로 긴 확장자는 버린다
        assert!(!generate(Some("a.b/c")).contains('/'));
        assert!(!generate(Some("x.veryverylongext")).contains('.'));
        assert!(!generate(Some("x.")).contains('.'));
    }

    #[test]
    fn test_name_never_contains_path_separators() {
        let name = generate(Some("../../etc/passwd"));
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
    }
}
