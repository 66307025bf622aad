//! # 파일 스토리지 모듈
//!
//! 업로드 이미지의 디스크 저장, 삭제, 공개 URL 변환을 담당합니다.
//!
//! ## 설계
//!
//! - [`FileStore`]: 파일 시스템 접근의 능력 집합 인터페이스.
//!   서비스는 이 trait만 알고 있으며, 테스트에서는 인메모리 구현으로
//!   대체됩니다.
//! - [`DiskFileStore`]: 설정된 디렉터리에 기록하는 운영용 구현.
//!   요청 수명 내의 순차적 블로킹 쓰기이므로 `std::fs`를 사용합니다.
//! - [`FileCleanupList`]: 한 번의 등록 트랜잭션 동안 기록된 파일들을
//!   추적하고, 실패 시 역순으로 되돌리는 보상 동작 목록입니다.
//!   삭제 실패는 로그만 남기고 전파하지 않습니다.
//!
//! ## 이미지 종류
//!
//! 대표 사진, 상품 상세 사진, 프로필 사진이 서로 다른 디렉터리와
//! 공개 URL 경로를 사용합니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FileConfig;
use crate::core::errors::{AppError, AppResult};

/// 업로드 이미지의 저장 위치 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// 상품 대표 사진
    Product,
    /// 상품 상세(코멘트) 사진
    Comment,
    /// 회원 프로필 사진
    Profile,
}

impl ImageKind {
    /// 공개 URL에서 이 분류가 차지하는 경로 조각
    pub fn url_path(&self) -> &'static str {
        match self {
            ImageKind::Product => "products/images",
            ImageKind::Comment => "productcomment/images",
            ImageKind::Profile => "users/images",
        }
    }
}

/// 핸들러가 멀티파트 요청에서 분리해 서비스로 전달하는 업로드 이미지
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// 클라이언트가 보낸 원본 파일명
    pub original_name: Option<String>,
    /// 이미지 바이너리
    pub data: Vec<u8>,
}

impl UploadedImage {
    /// 내용이 비어 있는 업로드인지 확인합니다.
    ///
    /// 멀티파트 목록에는 빈 항목이 섞여 들어올 수 있으며,
    /// 빈 항목은 저장 대상에서 제외됩니다.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 파일 시스템 접근 인터페이스
///
/// 요청 하나의 수명 안에서 순차적으로 호출되는 블로킹 연산입니다.
pub trait FileStore: Send + Sync {
    /// 이미지 바이너리를 분류별 디렉터리에 기록합니다.
    fn save(&self, kind: ImageKind, filename: &str, bytes: &[u8]) -> AppResult<()>;

    /// 저장된 파일을 삭제합니다. 최선 노력 연산이며
    /// 성공 여부만 반환합니다.
    fn delete(&self, kind: ImageKind, filename: &str) -> bool;

    /// 저장 파일명을 정적 파일 서버의 전체 공개 URL로 변환합니다.
    fn public_url(&self, kind: ImageKind, filename: &str) -> String;
}

/// 로컬 디스크 기반 파일 스토어
pub struct DiskFileStore {
    product_dir: PathBuf,
    comment_dir: PathBuf,
    profile_dir: PathBuf,
    base_url: String,
}

impl DiskFileStore {
    /// 디렉터리와 베이스 URL을 직접 지정하여 생성합니다.
    pub fn new(
        product_dir: impl Into<PathBuf>,
        comment_dir: impl Into<PathBuf>,
        profile_dir: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            product_dir: product_dir.into(),
            comment_dir: comment_dir.into(),
            profile_dir: profile_dir.into(),
            base_url: base_url.into(),
        }
    }

    /// 환경 변수 설정([`FileConfig`])으로부터 생성합니다.
    pub fn from_env() -> Self {
        Self::new(
            FileConfig::products_images_directory(),
            FileConfig::comment_images_directory(),
            FileConfig::profile_images_directory(),
            FileConfig::public_base_url(),
        )
    }

    /// 세 이미지 디렉터리를 모두 생성합니다. 기동 시 한 번 호출됩니다.
    pub fn ensure_directories(&self) -> AppResult<()> {
        for dir in [&self.product_dir, &self.comment_dir, &self.profile_dir] {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::FileError(format!("디렉터리 생성 실패 ({}): {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    fn dir(&self, kind: ImageKind) -> &Path {
        match kind {
            ImageKind::Product => &self.product_dir,
            ImageKind::Comment => &self.comment_dir,
            ImageKind::Profile => &self.profile_dir,
        }
    }
}

/// 파일명이 디렉터리를 벗어날 수 없도록 확인합니다.
///
/// 저장 파일명은 내부 생성기가 만들지만, 저장 직전에 한 번 더 검사합니다.
fn validate_filename(filename: &str) -> AppResult<()> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(AppError::ValidationError(format!(
            "유효하지 않은 파일명입니다: {}",
            filename
        )));
    }
    Ok(())
}

impl FileStore for DiskFileStore {
    fn save(&self, kind: ImageKind, filename: &str, bytes: &[u8]) -> AppResult<()> {
        validate_filename(filename)?;

        let path = self.dir(kind).join(filename);
        fs::write(&path, bytes).map_err(|e| {
            AppError::FileError(format!("이미지 저장 실패 ({}): {}", path.display(), e))
        })
    }

    fn delete(&self, kind: ImageKind, filename: &str) -> bool {
        if validate_filename(filename).is_err() {
            return false;
        }

        fs::remove_file(self.dir(kind).join(filename)).is_ok()
    }

    fn public_url(&self, kind: ImageKind, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            kind.url_path(),
            filename
        )
    }
}

/// 한 트랜잭션 동안 기록된 파일들의 보상 동작 목록
///
/// 상품 등록처럼 파일 쓰기와 DB 쓰기가 섞인 워크플로우에서,
/// 기록에 성공한 파일을 순서대로 수집해 두었다가 이후 단계가
/// 실패하면 역순으로 삭제합니다. 성공 경로에서는 그대로 버려집니다.
pub struct FileCleanupList<'a> {
    store: &'a dyn FileStore,
    written: Vec<(ImageKind, String)>,
}

impl<'a> FileCleanupList<'a> {
    /// 빈 목록 생성
    pub fn new(store: &'a dyn FileStore) -> Self {
        Self {
            store,
            written: Vec::new(),
        }
    }

    /// 기록에 성공한 파일을 목록에 추가합니다.
    pub fn record(&mut self, kind: ImageKind, filename: String) {
        self.written.push((kind, filename));
    }

    /// 추적 중인 파일 수
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// 추적 중인 파일이 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// 기록된 파일들을 역순으로 삭제합니다.
    ///
    /// 삭제 실패는 경고 로그만 남기고 계속 진행합니다.
    pub fn unwind(mut self) {
        for (kind, filename) in self.written.drain(..).rev() {
            if !self.store.delete(kind, &filename) {
                log::warn!("정리 대상 파일 삭제 실패: {:?}/{}", kind, filename);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// 테스트 전용 임시 디렉터리 기반 스토어
    fn temp_store() -> (DiskFileStore, PathBuf) {
        let root = std::env::temp_dir().join(format!("bagain-storage-{}", Uuid::new_v4()));
        let store = DiskFileStore::new(
            root.join("products"),
            root.join("productcomment"),
            root.join("users"),
            "https://file.test",
        );
        store.ensure_directories().unwrap();
        (store, root)
    }

    #[test]
    fn test_save_then_delete() {
        let (store, root) = temp_store();

        store
            .save(ImageKind::Product, "apple.jpg", b"jpeg-bytes")
            .unwrap();
        assert!(root.join("products/apple.jpg").exists());

        assert!(store.delete(ImageKind::Product, "apple.jpg"));
        assert!(!root.join("products/apple.jpg").exists());

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_delete_missing_file_is_best_effort() {
        let (store, root) = temp_store();

        assert!(!store.delete(ImageKind::Comment, "no-such-file.jpg"));

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_path_traversal_is_rejected() {
        let (store, root) = temp_store();

        assert!(store
            .save(ImageKind::Product, "../escape.jpg", b"x")
            .is_err());
        assert!(store.save(ImageKind::Product, "a/b.jpg", b"x").is_err());
        assert!(store.save(ImageKind::Product, "", b"x").is_err());

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_public_url_uses_kind_path() {
        let (store, root) = temp_store();

        assert_eq!(
            store.public_url(ImageKind::Product, "a.jpg"),
            "https://file.test/products/images/a.jpg"
        );
        assert_eq!(
            store.public_url(ImageKind::Comment, "b.jpg"),
            "https://file.test/productcomment/images/b.jpg"
        );
        assert_eq!(
            store.public_url(ImageKind::Profile, "c.jpg"),
            "https://file.test/users/images/c.jpg"
        );

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_cleanup_list_unwinds_all_written_files() {
        let (store, root) = temp_store();

        let mut written = FileCleanupList::new(&store);

        store.save(ImageKind::Product, "cover.jpg", b"1").unwrap();
        written.record(ImageKind::Product, "cover.jpg".to_string());

        store.save(ImageKind::Comment, "detail1.jpg", b"2").unwrap();
        written.record(ImageKind::Comment, "detail1.jpg".to_string());

        store.save(ImageKind::Comment, "detail2.jpg", b"3").unwrap();
        written.record(ImageKind::Comment, "detail2.jpg".to_string());

        assert_eq!(written.len(), 3);
        written.unwind();

        assert!(!root.join("products/cover.jpg").exists());
        assert!(!root.join("productcomment/detail1.jpg").exists());
        assert!(!root.join("productcomment/detail2.jpg").exists());

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_cleanup_list_untouched_on_success_path() {
        let (store, root) = temp_store();

        let written = FileCleanupList::new(&store);
        store.save(ImageKind::Product, "keep.jpg", b"1").unwrap();
        assert!(written.is_empty());

        // unwind를 호출하지 않고 버리면 파일은 그대로 남는다
        drop(written);
        assert!(root.join("products/keep.jpg").exists());

        fs::remove_dir_all(root).ok();
    }
}
