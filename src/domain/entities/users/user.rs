//! User Entity Implementation
//!
//! 회원 계정을 표현하는 도메인 엔티티입니다.
//! 이메일과 닉네임은 시스템 전체에서 유일하며,
//! 유니크 인덱스로 저장소 레벨에서 보장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 회원 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 회원 이메일 (unique)
    pub email: String,
    /// 회원 닉네임 (unique)
    pub nickname: String,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 프로필 사진의 저장 파일명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 회원 생성
    pub fn new(
        email: String,
        nickname: String,
        password_hash: String,
        photo: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nickname,
            password_hash,
            photo,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
