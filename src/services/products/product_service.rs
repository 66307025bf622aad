//! # 상품 관리 서비스 구현
//!
//! 카테고리별 상품 조회와 상품 등록 워크플로우의 비즈니스 로직을 구현합니다.
//!
//! ## 상품 등록 워크플로우
//!
//! 파일 쓰기와 DB 쓰기가 섞인 다단계 작업이며, 단계 순서는 다음과 같습니다.
//!
//! ```text
//! Start
//!   → 대표 사진 저장 (있는 경우)
//!   → 카테고리 표기 변환 + 저장소 확인
//!   → 상품 저장
//!   → 상세 사진 저장* (파일 기록 + ProductPhoto 행)
//!   → 상세 사진 재조회
//! Done(성공)
//! ```
//!
//! 어느 단계에서든 실패하면 이번 호출에서 기록한 파일 전부를
//! 역순으로 삭제하고(보상 동작 목록), 에러 종류는 로그로만 남긴 뒤
//! 호출자에게는 일반 실패 응답을 반환합니다.
//!
//! 카테고리를 찾지 못한 경우는 어떤 DB 쓰기도 일어나기 전에
//! 명시적으로 실패합니다. 대표 사진 파일만 기록된 상태이므로
//! 그 파일 하나만 정리됩니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    core::registry::ServiceLocator,
    domain::category_label,
    domain::dto::common::StatusResponse,
    domain::dto::products::request::ProductAddRequest,
    domain::dto::products::response::ProductView,
    domain::entities::products::{Product, ProductPhoto},
    repositories::{CategoryStore, ProductPhotoStore, ProductStore},
    storage::{FileCleanupList, FileStore, ImageKind, UploadedImage},
    utils::{file_name, string_utils},
};

/// 등록 워크플로우 내부 결과
///
/// 호출자에게는 상태/메시지만 내려가지만, 로그와 후속 처리를 위해
/// 저장된 상품과 사진, 생성된 상세 사진 파일명을 함께 유지합니다.
pub struct RegisteredProduct {
    /// 저장된 상품 (ID 포함)
    pub product: Product,
    /// 재조회한 상세 사진 전체 목록
    pub photos: Vec<ProductPhoto>,
    /// 이번 호출에서 생성된 상세 사진 파일명들
    pub comment_photo_filenames: Vec<String>,
}

/// 상품 관리 비즈니스 로직 서비스
///
/// 스토어와 파일 스토어 인터페이스를 생성자로 주입받아 동작합니다.
/// 운영 환경에서는 MongoDB 리포지토리와 디스크 파일 스토어가,
/// 테스트에서는 인메모리 구현이 주입됩니다.
pub struct ProductService {
    /// 카테고리 조회 스토어
    categories: Arc<dyn CategoryStore>,
    /// 상품 저장/조회 스토어
    products: Arc<dyn ProductStore>,
    /// 상세 사진 저장/조회 스토어
    photos: Arc<dyn ProductPhotoStore>,
    /// 업로드 이미지 파일 스토어
    files: Arc<dyn FileStore>,
}

impl ProductService {
    /// 협력 객체를 주입하여 서비스를 생성합니다.
    pub fn new(
        categories: Arc<dyn CategoryStore>,
        products: Arc<dyn ProductStore>,
        photos: Arc<dyn ProductPhotoStore>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            categories,
            products,
            photos,
            files,
        }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 기동 시점에 `ServiceLocator::set()`으로 등록된 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 카테고리 이름(표준 이름)으로 상품 목록을 조회합니다.
    ///
    /// 카테고리가 존재하지 않으면 에러가 아니라 빈 목록을 반환합니다.
    /// 각 상품의 상세 사진을 함께 조회하고, 저장 파일명을
    /// 공개 URL로 변환한 화면용 뷰를 만들어 반환합니다. 읽기 전용이며
    /// 어떤 부수 효과도 없습니다.
    pub async fn products_by_category(&self, category_name: &str) -> AppResult<Vec<ProductView>> {
        let Some(category) = self.categories.find_by_name(category_name).await? else {
            return Ok(Vec::new());
        };

        let products = self.products.find_by_category(&category).await?;

        let mut views = Vec::with_capacity(products.len());
        for product in &products {
            let photos = self.photos.find_by_product(product).await?;
            views.push(ProductView::project(product, &photos, self.files.as_ref()));
        }

        Ok(views)
    }

    /// 상품을 등록합니다.
    ///
    /// # Arguments
    ///
    /// * `req` - 상품 필드 (이름, 가격, 재고, 설명, 한국어 카테고리 표기)
    /// * `cover` - 대표 사진 (선택)
    /// * `details` - 상세 사진 목록 (빈 항목은 건너뜀)
    ///
    /// # Returns
    ///
    /// 성공 시 `{status: true, message: "상품 등록 성공"}`,
    /// 실패 시 `{status: false, message: "상품 등록 실패"}`.
    /// 구체적인 실패 원인은 호출자에게 노출하지 않고 로그로만 남깁니다.
    ///
    /// 실패 시 이번 호출에서 디스크에 기록된 파일(대표/상세 모두)은
    /// 역순으로 삭제됩니다.
    pub async fn register_product(
        &self,
        req: ProductAddRequest,
        cover: Option<UploadedImage>,
        details: Vec<UploadedImage>,
    ) -> StatusResponse {
        let mut written = FileCleanupList::new(self.files.as_ref());

        match self.register_inner(req, cover, details, &mut written).await {
            Ok(registered) => {
                log::info!(
                    "상품 등록 완료: {} (상세 사진 {}장)",
                    registered.product.name,
                    registered.photos.len()
                );
                StatusResponse::ok("상품 등록 성공")
            }
            Err(err) => {
                log::warn!("상품 등록 실패: {}", err);
                written.unwind();
                StatusResponse::error("상품 등록 실패")
            }
        }
    }

    /// 등록 워크플로우 본체
    ///
    /// 기록에 성공한 파일은 즉시 `written`에 수집되므로,
    /// 어느 단계에서 실패하더라도 호출측에서 전부 되돌릴 수 있습니다.
    async fn register_inner(
        &self,
        req: ProductAddRequest,
        cover: Option<UploadedImage>,
        details: Vec<UploadedImage>,
        written: &mut FileCleanupList<'_>,
    ) -> AppResult<RegisteredProduct> {
        let name = string_utils::validate_required_string(&req.name, "상품명")?;

        // 1단계: 대표 사진 저장
        let mut cover_filename = None;
        if let Some(image) = cover.as_ref().filter(|i| !i.is_empty()) {
            let filename = file_name::generate(image.original_name.as_deref());
            self.files.save(ImageKind::Product, &filename, &image.data)?;
            written.record(ImageKind::Product, filename.clone());
            cover_filename = Some(filename);
        }

        // 2단계: 카테고리 표기 변환 및 존재 확인
        // 카테고리가 없으면 DB 쓰기 전에 명시적으로 실패한다
        let canonical = category_label::to_canonical(&req.category_name)?;
        let category = self
            .categories
            .find_by_name(canonical)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("카테고리를 찾을 수 없습니다: {}", canonical))
            })?;
        let category_id = category.id.ok_or_else(|| {
            AppError::InternalError("카테고리 ID가 없습니다".to_string())
        })?;

        // 3단계: 상품 저장
        let product = self
            .products
            .save(Product::new(
                name,
                req.price,
                req.inventory,
                req.comment,
                cover_filename,
                category_id,
            ))
            .await?;
        let product_id = product.id.ok_or_else(|| {
            AppError::InternalError("저장된 상품에 ID가 없습니다".to_string())
        })?;

        // 4단계: 상세 사진 저장 (빈 항목은 건너뜀)
        let mut comment_photo_filenames = Vec::new();
        for image in details.iter().filter(|i| !i.is_empty()) {
            let filename = file_name::generate(image.original_name.as_deref());
            self.files.save(ImageKind::Comment, &filename, &image.data)?;
            written.record(ImageKind::Comment, filename.clone());

            self.photos
                .save(ProductPhoto::new(product_id, filename.clone()))
                .await?;
            comment_photo_filenames.push(filename);
        }

        // 5단계: 상세 사진 재조회
        let photos = self.photos.find_by_product(&product).await?;

        Ok(RegisteredProduct {
            product,
            photos,
            comment_photo_filenames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        empty_image, image, FakeCategoryStore, FakeProductPhotoStore, FakeProductStore,
        MemoryFileStore,
    };

    fn request(category_name: &str) -> ProductAddRequest {
        ProductAddRequest {
            name: "청송 사과 5kg".to_string(),
            price: 25000,
            inventory: 30,
            comment: "아삭하고 달콤한 부사".to_string(),
            category_name: category_name.to_string(),
        }
    }

    struct Fixture {
        service: ProductService,
        products: Arc<FakeProductStore>,
        photos: Arc<FakeProductPhotoStore>,
        files: Arc<MemoryFileStore>,
    }

    fn fixture(
        categories: FakeCategoryStore,
        products: FakeProductStore,
        photos: FakeProductPhotoStore,
        files: MemoryFileStore,
    ) -> Fixture {
        let products = Arc::new(products);
        let photos = Arc::new(photos);
        let files = Arc::new(files);

        let service = ProductService::new(
            Arc::new(categories),
            products.clone(),
            photos.clone(),
            files.clone(),
        );

        Fixture {
            service,
            products,
            photos,
            files,
        }
    }

    fn default_fixture() -> Fixture {
        fixture(
            FakeCategoryStore::with_canonical(),
            FakeProductStore::new(),
            FakeProductPhotoStore::new(),
            MemoryFileStore::new(),
        )
    }

    #[actix_web::test]
    async fn test_listing_unknown_category_returns_empty() {
        let f = default_fixture();

        let views = f.service.products_by_category("meat").await.unwrap();

        assert!(views.is_empty());
    }

    #[actix_web::test]
    async fn test_listing_projects_photos_and_urls() {
        let f = default_fixture();

        // 상품 두 개 등록: 하나는 대표+상세 2장, 하나는 사진 없음
        let result = f
            .service
            .register_product(
                request("과일"),
                Some(image("cover.jpg", b"c")),
                vec![image("d1.jpg", b"1"), image("d2.jpg", b"2")],
            )
            .await;
        assert!(result.status);

        let result = f
            .service
            .register_product(request("과일"), None, Vec::new())
            .await;
        assert!(result.status);

        let views = f.service.products_by_category("fruits").await.unwrap();
        assert_eq!(views.len(), 2);

        let with_photos = views.iter().find(|v| !v.product_photos.is_empty()).unwrap();
        assert_eq!(with_photos.product_photos.len(), 2);
        assert!(with_photos
            .photo
            .starts_with("https://file.test/products/images/"));
        for photo in &with_photos.product_photos {
            assert!(photo
                .photo_url
                .starts_with("https://file.test/productcomment/images/"));
        }

        let without_photos = views.iter().find(|v| v.product_photos.is_empty()).unwrap();
        assert_eq!(without_photos.photo, "");
    }

    #[actix_web::test]
    async fn test_register_with_cover_only() {
        let f = default_fixture();

        let result = f
            .service
            .register_product(request("과일"), Some(image("apple.jpg", b"jpeg")), Vec::new())
            .await;

        assert!(result.status);
        assert_eq!(result.message, "상품 등록 성공");

        // 파일 1개, 상품 행 1개, 상세 사진 행 0개
        assert_eq!(f.files.file_count(), 1);
        assert_eq!(f.products.count(), 1);
        assert_eq!(f.photos.count(), 0);

        let saved = f.products.saved.lock().unwrap();
        assert!(saved[0].photo.is_some());
    }

    #[actix_web::test]
    async fn test_register_with_unknown_label_makes_no_store_calls() {
        let f = default_fixture();

        let result = f
            .service
            .register_product(request("육류"), None, Vec::new())
            .await;

        assert!(!result.status);
        assert_eq!(result.message, "상품 등록 실패");
        assert_eq!(f.products.count(), 0);
        assert_eq!(f.photos.count(), 0);
        assert_eq!(f.files.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_with_missing_category_cleans_cover_file() {
        // 표기는 유효하지만 저장소에 카테고리가 없는 경우
        let f = fixture(
            FakeCategoryStore::empty(),
            FakeProductStore::new(),
            FakeProductPhotoStore::new(),
            MemoryFileStore::new(),
        );

        let result = f
            .service
            .register_product(request("과일"), Some(image("apple.jpg", b"jpeg")), Vec::new())
            .await;

        assert!(!result.status);
        // 상품 행도, 남은 파일도 없어야 한다
        assert_eq!(f.products.count(), 0);
        assert_eq!(f.files.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_with_product_save_failure_cleans_cover_file() {
        let f = fixture(
            FakeCategoryStore::with_canonical(),
            FakeProductStore::failing(),
            FakeProductPhotoStore::new(),
            MemoryFileStore::new(),
        );

        let result = f
            .service
            .register_product(request("과일"), Some(image("apple.jpg", b"jpeg")), Vec::new())
            .await;

        assert!(!result.status);
        assert_eq!(f.products.count(), 0);
        assert_eq!(f.files.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_with_photo_row_failure_cleans_all_files() {
        let f = fixture(
            FakeCategoryStore::with_canonical(),
            FakeProductStore::new(),
            FakeProductPhotoStore::failing(),
            MemoryFileStore::new(),
        );

        let result = f
            .service
            .register_product(
                request("과일"),
                Some(image("cover.jpg", b"c")),
                vec![image("d1.jpg", b"1")],
            )
            .await;

        assert!(!result.status);
        // 대표 사진과 상세 사진 파일 모두 정리되어야 한다
        assert_eq!(f.files.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_with_cover_write_failure_creates_nothing() {
        let f = fixture(
            FakeCategoryStore::with_canonical(),
            FakeProductStore::new(),
            FakeProductPhotoStore::new(),
            MemoryFileStore::failing(),
        );

        let result = f
            .service
            .register_product(request("과일"), Some(image("apple.jpg", b"jpeg")), Vec::new())
            .await;

        assert!(!result.status);
        assert_eq!(f.products.count(), 0);
        assert_eq!(f.files.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_skips_empty_detail_entries() {
        let f = default_fixture();

        let result = f
            .service
            .register_product(
                request("과일"),
                None,
                vec![empty_image(), image("d1.jpg", b"1"), empty_image()],
            )
            .await;

        assert!(result.status);
        assert_eq!(f.photos.count(), 1);
        assert_eq!(f.files.file_count(), 1);
    }

    #[actix_web::test]
    async fn test_identical_registrations_produce_distinct_products() {
        let f = default_fixture();

        let first = f
            .service
            .register_product(request("과일"), None, Vec::new())
            .await;
        let second = f
            .service
            .register_product(request("과일"), None, Vec::new())
            .await;

        assert!(first.status);
        assert!(second.status);

        let saved = f.products.saved.lock().unwrap();
        assert_eq!(saved.len(), 2);
        assert_ne!(saved[0].id, saved[1].id);
    }

    #[actix_web::test]
    async fn test_register_with_blank_name_fails() {
        let f = default_fixture();

        let mut req = request("과일");
        req.name = "   ".to_string();

        let result = f.service.register_product(req, None, Vec::new()).await;

        assert!(!result.status);
        assert_eq!(f.products.count(), 0);
    }
}
