//! Category Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 상품 카테고리 엔티티
///
/// `name`은 표준(비지역화) 이름이며 시스템 전체에서 유일합니다.
/// 조회는 항상 이름 완전 일치로 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표준 카테고리 이름 (unique, 예: "fruits")
    pub name: String,
}

impl Category {
    /// 새 카테고리 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
