//! Product Entity Implementation
//!
//! 판매 상품을 표현하는 핵심 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 상품 엔티티
///
/// 상품은 생성 시점에 반드시 존재하는 카테고리 하나에 속합니다.
/// 상세 사진(`ProductPhoto`)은 별도 컬렉션에 저장되며 필요 시점에
/// 상품 ID로 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품명
    pub name: String,
    /// 판매 가격 (원)
    pub price: i64,
    /// 재고 수량
    pub inventory: i64,
    /// 상품 설명
    pub comment: String,
    /// 대표 사진의 저장 파일명 (대표 사진이 없으면 None)
    ///
    /// 공개 URL이 아니라 파일명만 저장한다. URL 변환은 응답 DTO에서 수행.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// 소속 카테고리 참조
    pub category_id: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Product {
    /// 새 상품 생성
    pub fn new(
        name: String,
        price: i64,
        inventory: i64,
        comment: String,
        photo: Option<String>,
        category_id: ObjectId,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            price,
            inventory,
            comment,
            photo,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
