//! # Product HTTP Handlers
//!
//! 상품 조회와 등록 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/category/{name}` | 카테고리별 상품 목록 조회 |
//! | `POST` | `/products` | 상품 등록 (멀티파트) |

use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::products::request::ProductAddRequest;
use crate::services::products::ProductService;
use crate::storage::UploadedImage;
use crate::utils::string_utils;

/// 상품 등록 멀티파트 폼
///
/// `photo`는 대표 사진 한 장, `commentphoto`는 상세 사진 여러 장입니다.
#[derive(Debug, MultipartForm)]
pub struct ProductAddForm {
    pub name: Text<String>,
    pub price: Text<i64>,
    pub inventory: Text<i64>,
    pub comment: Text<String>,
    #[multipart(rename = "categoryName")]
    pub category_name: Text<String>,
    #[multipart(limit = "10MiB")]
    pub photo: Option<Bytes>,
    #[multipart(rename = "commentphoto", limit = "10MiB")]
    pub commentphoto: Vec<Bytes>,
}

/// 멀티파트 바이너리 필드를 서비스용 업로드 이미지로 변환합니다.
///
/// 클라이언트가 보낸 빈 파일명은 None으로 정리합니다.
fn into_uploaded_image(bytes: Bytes) -> UploadedImage {
    UploadedImage {
        original_name: string_utils::clean_optional_string(bytes.file_name.clone()),
        data: bytes.data.to_vec(),
    }
}

/// 카테고리별 상품 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /category/{name}`
///
/// 경로의 `name`은 표준 카테고리 이름입니다 (예: "fruits").
/// 존재하지 않는 카테고리는 에러가 아니라 빈 배열로 응답합니다.
///
/// # 응답 (200 OK)
///
/// ```json
/// [
///   {
///     "id": "665f1c2e8b3e4a0d9c1a2b3c",
///     "name": "청송 사과 5kg",
///     "price": 25000,
///     "inventory": 30,
///     "comment": "아삭하고 달콤한 부사",
///     "photo": "https://file.bargainus.kr/products/images/abc123.jpg",
///     "product_photos": [
///       {
///         "id": "665f1c2e8b3e4a0d9c1a2b3d",
///         "photo_url": "https://file.bargainus.kr/productcomment/images/def456.jpg"
///       }
///     ]
///   }
/// ]
/// ```
#[get("/category/{name}")]
pub async fn products_by_category(
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ProductService::instance();
    let products = service.products_by_category(&name).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// 상품 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /products` (multipart/form-data)
///
/// # 폼 필드
///
/// - `name`, `price`, `inventory`, `comment`, `categoryName` - 상품 정보
/// - `photo` - 대표 사진 (선택)
/// - `commentphoto` - 상세 사진 (0장 이상)
///
/// # 응답 (200 OK)
///
/// ```json
/// { "status": true, "message": "상품 등록 성공" }
/// ```
///
/// 등록 실패 시에도 200으로 응답하며 `status`가 `false`가 됩니다.
/// 텍스트 필드 검증 실패만 400으로 거부됩니다.
#[post("")]
pub async fn add_product(
    MultipartForm(form): MultipartForm<ProductAddForm>,
) -> Result<HttpResponse, AppError> {
    let req = ProductAddRequest {
        name: form.name.into_inner(),
        price: form.price.into_inner(),
        inventory: form.inventory.into_inner(),
        comment: form.comment.into_inner(),
        category_name: form.category_name.into_inner(),
    };

    // 유효성 검사
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let cover = form.photo.map(into_uploaded_image);
    let details = form
        .commentphoto
        .into_iter()
        .map(into_uploaded_image)
        .collect();

    let service = ProductService::instance();
    let result = service.register_product(req, cover, details).await;

    Ok(HttpResponse::Ok().json(result))
}
