//! 테스트 전용 인메모리 구현 모듈
//!
//! 서비스 계층 테스트에서 MongoDB/Redis/디스크 대신 사용하는
//! 스토어/파일 스토어 대체 구현들입니다. 실패 주입 플래그로
//! 부분 실패 경로(파일 쓰기 실패, 저장 실패)를 재현할 수 있습니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::categories::Category;
use crate::domain::entities::products::{Product, ProductPhoto};
use crate::domain::entities::users::User;
use crate::repositories::{CategoryStore, ProductPhotoStore, ProductStore, UserStore};
use crate::storage::{FileStore, ImageKind, UploadedImage};

/// 내용이 있는 업로드 이미지 생성
pub fn image(name: &str, bytes: &[u8]) -> UploadedImage {
    UploadedImage {
        original_name: Some(name.to_string()),
        data: bytes.to_vec(),
    }
}

/// 빈 업로드 이미지 생성 (멀티파트의 빈 항목 재현)
pub fn empty_image() -> UploadedImage {
    UploadedImage {
        original_name: None,
        data: Vec::new(),
    }
}

/// 인메모리 파일 스토어
///
/// `{url_path}/{filename}` 형태의 키로 파일 내용을 보관합니다.
#[derive(Default)]
pub struct MemoryFileStore {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
    /// true면 모든 저장 요청이 실패합니다
    pub fail_save: bool,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            fail_save: true,
        }
    }

    fn key(kind: ImageKind, filename: &str) -> String {
        format!("{}/{}", kind.url_path(), filename)
    }

    /// 현재 보관 중인 파일 수
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl FileStore for MemoryFileStore {
    fn save(&self, kind: ImageKind, filename: &str, bytes: &[u8]) -> AppResult<()> {
        if self.fail_save {
            return Err(AppError::FileError("테스트용 저장 실패".to_string()));
        }

        self.files
            .lock()
            .unwrap()
            .insert(Self::key(kind, filename), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, kind: ImageKind, filename: &str) -> bool {
        self.files
            .lock()
            .unwrap()
            .remove(&Self::key(kind, filename))
            .is_some()
    }

    fn public_url(&self, kind: ImageKind, filename: &str) -> String {
        format!("https://file.test/{}/{}", kind.url_path(), filename)
    }
}

/// 인메모리 카테고리 스토어
pub struct FakeCategoryStore {
    pub categories: Vec<Category>,
}

impl FakeCategoryStore {
    /// 카테고리가 하나도 없는 스토어
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// 표준 카테고리 세 개가 시드된 스토어
    pub fn with_canonical() -> Self {
        let categories = ["fruits", "vegetables", "grains"]
            .iter()
            .map(|name| Category {
                id: Some(ObjectId::new()),
                name: name.to_string(),
            })
            .collect();

        Self { categories }
    }
}

#[async_trait]
impl CategoryStore for FakeCategoryStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.name == name).cloned())
    }
}

/// 인메모리 상품 스토어
#[derive(Default)]
pub struct FakeProductStore {
    pub saved: Mutex<Vec<Product>>,
    /// true면 저장 요청이 실패합니다
    pub fail_on_save: bool,
}

impl FakeProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_on_save: true,
        }
    }

    pub fn count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductStore for FakeProductStore {
    async fn find_by_category(&self, category: &Category) -> AppResult<Vec<Product>> {
        let category_id = category.id.expect("테스트 카테고리에는 ID가 있어야 한다");
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut product: Product) -> AppResult<Product> {
        if self.fail_on_save {
            return Err(AppError::DatabaseError("테스트용 저장 실패".to_string()));
        }

        product.id = Some(ObjectId::new());
        self.saved.lock().unwrap().push(product.clone());
        Ok(product)
    }
}

/// 인메모리 상품 상세 사진 스토어
#[derive(Default)]
pub struct FakeProductPhotoStore {
    pub saved: Mutex<Vec<ProductPhoto>>,
    /// true면 저장 요청이 실패합니다
    pub fail_on_save: bool,
}

impl FakeProductPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_on_save: true,
        }
    }

    pub fn count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    /// 기존 상품에 대한 사진을 미리 채워 넣습니다
    pub fn push_existing(&self, photo: ProductPhoto) {
        let mut photo = photo;
        if photo.id.is_none() {
            photo.id = Some(ObjectId::new());
        }
        self.saved.lock().unwrap().push(photo);
    }
}

#[async_trait]
impl ProductPhotoStore for FakeProductPhotoStore {
    async fn find_by_product(&self, product: &Product) -> AppResult<Vec<ProductPhoto>> {
        let product_id = product.id.expect("테스트 상품에는 ID가 있어야 한다");
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut photo: ProductPhoto) -> AppResult<ProductPhoto> {
        if self.fail_on_save {
            return Err(AppError::DatabaseError("테스트용 저장 실패".to_string()));
        }

        photo.id = Some(ObjectId::new());
        self.saved.lock().unwrap().push(photo.clone());
        Ok(photo)
    }
}

/// 인메모리 회원 스토어
#[derive(Default)]
pub struct FakeUserStore {
    pub users: Mutex<Vec<User>>,
    /// true면 저장 요청이 실패합니다
    pub fail_on_save: bool,
}

impl FakeUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail_on_save: true,
        }
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 기존 회원을 미리 채워 넣습니다
    pub fn push_existing(&self, user: User) {
        let mut user = user;
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.nickname == nickname)
            .cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        if self.fail_on_save {
            return Err(AppError::DatabaseError("테스트용 저장 실패".to_string()));
        }

        // 유니크 인덱스 동작 재현
        {
            let users = self.users.lock().unwrap();
            if users
                .iter()
                .any(|u| u.email == user.email || u.nickname == user.nickname)
            {
                return Err(AppError::ConflictError(
                    "이미 사용 중인 이메일 또는 닉네임입니다".to_string(),
                ));
            }
        }

        user.id = Some(ObjectId::new());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}
