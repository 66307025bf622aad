//! # 상품 등록 요청 DTO
//!
//! 상품 등록 멀티파트 요청의 텍스트 필드를 표현합니다.
//! 첨부 이미지는 별도의 `UploadedImage`로 핸들러에서 분리됩니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 1-100자
//! - `price`: 0 이상
//! - `inventory`: 0 이상
//! - `comment`: 최대 2000자
//! - `category_name`: 한국어 카테고리 표기 (변환 검증은 서비스 계층에서 수행)

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 상품 등록 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductAddRequest {
    /// 상품명
    #[validate(length(min = 1, max = 100, message = "상품명은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 판매 가격 (원)
    #[validate(range(min = 0, message = "가격은 0 이상이어야 합니다"))]
    pub price: i64,

    /// 재고 수량
    #[validate(range(min = 0, message = "재고는 0 이상이어야 합니다"))]
    pub inventory: i64,

    /// 상품 설명
    #[validate(length(max = 2000, message = "상품 설명은 2000자를 넘을 수 없습니다"))]
    pub comment: String,

    /// 한국어 카테고리 표기 (예: "과일")
    ///
    /// 표준 이름으로의 변환과 존재 여부 확인은 등록 워크플로우에서 수행됩니다.
    #[validate(length(min = 1, message = "카테고리 이름은 필수입니다"))]
    pub category_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ProductAddRequest {
        ProductAddRequest {
            name: "청송 사과 5kg".to_string(),
            price: 25000,
            inventory: 30,
            comment: "아삭하고 달콤한 부사".to_string(),
            category_name: "과일".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_negative_price_fails() {
        let mut req = valid_request();
        req.price = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut req = valid_request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_category_name_fails() {
        let mut req = valid_request();
        req.category_name = String::new();
        assert!(req.validate().is_err());
    }
}
