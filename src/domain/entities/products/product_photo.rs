//! ProductPhoto Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 상품 상세 사진 엔티티
///
/// 상품 등록 시 상세 이미지가 첨부된 경우에만 생성되며,
/// 소유 상품 없이 단독으로 생성되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPhoto {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 상품 참조
    pub product_id: ObjectId,
    /// 저장 파일명
    pub photo: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl ProductPhoto {
    /// 새 상세 사진 생성
    pub fn new(product_id: ObjectId, photo: String) -> Self {
        Self {
            id: None,
            product_id,
            photo,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
