//! 파일 스토리지 설정 관리 모듈
//!
//! 업로드 이미지가 저장되는 디렉터리와 정적 파일 서버의
//! 공개 베이스 URL을 관리합니다. 상품 대표 사진, 상품 상세(코멘트) 사진,
//! 회원 프로필 사진이 각각 별도 디렉터리를 사용합니다.

use std::env;

/// 업로드 이미지 파일 관련 설정
pub struct FileConfig;

impl FileConfig {
    /// 상품 대표 사진이 저장되는 디렉터리를 반환합니다.
    ///
    /// 환경 변수: `PRODUCTS_IMAGES_DIRECTORY` (기본값: "./data/products/images")
    pub fn products_images_directory() -> String {
        env::var("PRODUCTS_IMAGES_DIRECTORY")
            .unwrap_or_else(|_| "./data/products/images".to_string())
    }

    /// 상품 상세 사진이 저장되는 디렉터리를 반환합니다.
    ///
    /// 환경 변수: `PRODUCTCOMMENT_IMAGES_DIRECTORY`
    /// (기본값: "./data/productcomment/images")
    pub fn comment_images_directory() -> String {
        env::var("PRODUCTCOMMENT_IMAGES_DIRECTORY")
            .unwrap_or_else(|_| "./data/productcomment/images".to_string())
    }

    /// 회원 프로필 사진이 저장되는 디렉터리를 반환합니다.
    ///
    /// 환경 변수: `USERS_IMAGES_DIRECTORY` (기본값: "./data/users/images")
    pub fn profile_images_directory() -> String {
        env::var("USERS_IMAGES_DIRECTORY")
            .unwrap_or_else(|_| "./data/users/images".to_string())
    }

    /// 정적 파일 서버의 공개 베이스 URL을 반환합니다.
    ///
    /// 저장된 파일명은 응답 DTO에서 이 베이스 아래의 전체 URL로 변환됩니다.
    ///
    /// 환경 변수: `FILE_BASE_URL` (기본값: "https://file.bargainus.kr")
    pub fn public_base_url() -> String {
        env::var("FILE_BASE_URL").unwrap_or_else(|_| "https://file.bargainus.kr".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_defaults() {
        if env::var("FILE_BASE_URL").is_err() {
            assert_eq!(FileConfig::public_base_url(), "https://file.bargainus.kr");
        }

        if env::var("PRODUCTS_IMAGES_DIRECTORY").is_err() {
            assert_eq!(
                FileConfig::products_images_directory(),
                "./data/products/images"
            );
        }
    }
}
