//! # 상품 조회 응답 DTO
//!
//! 저장 엔티티를 화면용 뷰로 투영합니다. 엔티티의 사진 필드에는
//! 파일명만 저장되어 있으므로, 이 투영 단계에서만 공개 URL로
//! 변환됩니다. 읽기 전용 변환이며 엔티티는 수정되지 않습니다.

use serde::Serialize;

use crate::domain::entities::products::{Product, ProductPhoto};
use crate::storage::{FileStore, ImageKind};

/// 상품 상세 사진 뷰
#[derive(Debug, Clone, Serialize)]
pub struct ProductPhotoView {
    /// 사진 ID
    pub id: String,
    /// 상세 사진의 전체 공개 URL
    pub photo_url: String,
}

/// 상품 조회 뷰
///
/// 대표 사진이 없는 상품의 `photo`는 빈 문자열입니다.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    /// 상품 ID
    pub id: String,
    /// 상품명
    pub name: String,
    /// 판매 가격 (원)
    pub price: i64,
    /// 재고 수량
    pub inventory: i64,
    /// 상품 설명
    pub comment: String,
    /// 대표 사진의 전체 공개 URL (없으면 빈 문자열)
    pub photo: String,
    /// 상세 사진 목록
    pub product_photos: Vec<ProductPhotoView>,
}

impl ProductView {
    /// 엔티티와 상세 사진 목록을 화면용 뷰로 투영합니다.
    ///
    /// 대표 사진은 상품 이미지 경로 아래의 URL로, 상세 사진은
    /// 상품 상세 이미지 경로 아래의 URL로 각각 변환됩니다.
    pub fn project(product: &Product, photos: &[ProductPhoto], files: &dyn FileStore) -> Self {
        let photo = product
            .photo
            .as_deref()
            .map(|filename| files.public_url(ImageKind::Product, filename))
            .unwrap_or_default();

        let product_photos = photos
            .iter()
            .map(|p| ProductPhotoView {
                id: p.id_string().unwrap_or_default(),
                photo_url: files.public_url(ImageKind::Comment, &p.photo),
            })
            .collect();

        Self {
            id: product.id_string().unwrap_or_default(),
            name: product.name.clone(),
            price: product.price,
            inventory: product.inventory,
            comment: product.comment.clone(),
            photo,
            product_photos,
        }
    }
}
