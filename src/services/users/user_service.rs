//! # 회원 관리 서비스 구현
//!
//! 회원 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 이메일/닉네임 중복 확인, 프로필 사진을 포함한 회원가입,
//! 비밀번호 검증과 토큰 발급을 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost 설정 (개발 4, 운영 12)
//! - **균일한 로그인 실패 메시지**: 이메일 오류와 비밀번호 오류를
//!   구분하지 않아 계정 존재 여부가 노출되지 않습니다
//! - **중복 방지**: 애플리케이션 계층의 확인은 안내 메시지용이며,
//!   경쟁 상태의 최종 방어선은 저장소의 유니크 인덱스입니다

use std::sync::Arc;
use bcrypt::{hash, verify};

use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult},
    core::registry::ServiceLocator,
    domain::dto::users::request::UserJoinRequest,
    domain::dto::users::response::LoginResponse,
    domain::entities::users::User,
    repositories::UserStore,
    services::auth::TokenService,
    storage::{FileCleanupList, FileStore, ImageKind, UploadedImage},
    utils::file_name,
};

/// 이메일/닉네임 중복 확인 결과 메시지
const MSG_EMAIL_AVAILABLE: &str = "사용 가능한 이메일입니다.";
const MSG_EMAIL_TAKEN: &str = "이미 사용 중인 이메일입니다.";
const MSG_NICKNAME_AVAILABLE: &str = "사용 가능한 닉네임입니다.";
const MSG_NICKNAME_TAKEN: &str = "이미 사용 중인 닉네임입니다.";

/// 회원 관리 비즈니스 로직 서비스
///
/// 회원 스토어, 파일 스토어, 토큰 서비스를 생성자로 주입받아 동작합니다.
pub struct UserService {
    /// 회원 저장/조회 스토어
    users: Arc<dyn UserStore>,
    /// 업로드 이미지 파일 스토어
    files: Arc<dyn FileStore>,
    /// JWT 토큰 서비스
    tokens: Arc<TokenService>,
}

impl UserService {
    /// 협력 객체를 주입하여 서비스를 생성합니다.
    pub fn new(
        users: Arc<dyn UserStore>,
        files: Arc<dyn FileStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            files,
            tokens,
        }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 기동 시점에 `ServiceLocator::set()`으로 등록된 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 이메일 중복 여부를 확인하고 안내 메시지를 반환합니다.
    pub async fn check_email_duplicate(&self, email: &str) -> AppResult<String> {
        let taken = self.users.find_by_email(email).await?.is_some();

        Ok(if taken {
            MSG_EMAIL_TAKEN.to_string()
        } else {
            MSG_EMAIL_AVAILABLE.to_string()
        })
    }

    /// 닉네임 중복 여부를 확인하고 안내 메시지를 반환합니다.
    pub async fn check_nickname_duplicate(&self, nickname: &str) -> AppResult<String> {
        let taken = self.users.find_by_nickname(nickname).await?.is_some();

        Ok(if taken {
            MSG_NICKNAME_TAKEN.to_string()
        } else {
            MSG_NICKNAME_AVAILABLE.to_string()
        })
    }

    /// 회원가입을 처리하고 결과 메시지를 반환합니다.
    ///
    /// 이메일/닉네임 중복을 먼저 확인한 뒤, 프로필 사진이 있으면
    /// 저장하고, 비밀번호를 해시하여 회원을 영속합니다.
    ///
    /// 중복으로 인한 실패는 해당 안내 메시지를 그대로 반환하고,
    /// 그 외의 실패는 원인을 로그로만 남긴 뒤 일반 실패 메시지를
    /// 반환합니다. 실패 시 이번 호출에서 기록한 프로필 사진 파일은
    /// 삭제됩니다.
    pub async fn join(&self, req: UserJoinRequest, photo: Option<UploadedImage>) -> String {
        let mut written = FileCleanupList::new(self.files.as_ref());

        match self.join_inner(req, photo, &mut written).await {
            Ok(user) => {
                log::info!("회원가입 완료: {}", user.email);
                "회원가입 성공".to_string()
            }
            Err(AppError::ConflictError(message)) => {
                written.unwind();
                message
            }
            Err(err) => {
                log::warn!("회원가입 실패: {}", err);
                written.unwind();
                "회원가입 실패".to_string()
            }
        }
    }

    /// 회원가입 워크플로우 본체
    async fn join_inner(
        &self,
        req: UserJoinRequest,
        photo: Option<UploadedImage>,
        written: &mut FileCleanupList<'_>,
    ) -> AppResult<User> {
        // 중복 확인 (안내 메시지용, 최종 방어선은 유니크 인덱스)
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::ConflictError(MSG_EMAIL_TAKEN.to_string()));
        }
        if self.users.find_by_nickname(&req.nickname).await?.is_some() {
            return Err(AppError::ConflictError(MSG_NICKNAME_TAKEN.to_string()));
        }

        // 프로필 사진 저장
        let mut photo_filename = None;
        if let Some(image) = photo.as_ref().filter(|i| !i.is_empty()) {
            let filename = file_name::generate(image.original_name.as_deref());
            self.files.save(ImageKind::Profile, &filename, &image.data)?;
            written.record(ImageKind::Profile, filename.clone());
            photo_filename = Some(filename);
        }

        // 비밀번호 해싱
        let password_hash = hash(&req.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        // 회원 저장
        self.users
            .save(User::new(req.email, req.nickname, password_hash, photo_filename))
            .await
    }

    /// 로그인을 처리합니다.
    ///
    /// 비밀번호 검증에 성공하면 액세스 토큰을 발급합니다.
    /// 알 수 없는 이메일과 잘못된 비밀번호는 동일한 실패 응답으로
    /// 처리되며, 구체적인 원인은 로그로만 남습니다.
    pub async fn login(&self, email: &str, password: &str) -> LoginResponse {
        match self.try_login(email, password).await {
            Ok((user, token)) => {
                log::info!("로그인 성공: {}", user.email);
                LoginResponse::success("로그인 성공", token, user.nickname)
            }
            Err(err) => {
                log::warn!("로그인 실패 ({}): {}", email, err);
                LoginResponse::failure("이메일 또는 비밀번호가 일치하지 않습니다.")
            }
        }
    }

    /// 로그인 검증 본체
    async fn try_login(&self, email: &str, password: &str) -> AppResult<(User, String)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("등록되지 않은 이메일입니다".to_string())
            })?;

        let matches = verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !matches {
            return Err(AppError::AuthenticationError(
                "비밀번호가 일치하지 않습니다".to_string(),
            ));
        }

        let token = self.tokens.generate_access_token(&user)?;

        Ok((user, token))
    }

    /// 토큰 유효성을 검사합니다.
    ///
    /// Authorization 헤더 값("Bearer {token}")과 순수 토큰 문자열을
    /// 모두 받아들입니다. 서명/만료 검사만 수행하며 부수 효과가 없습니다.
    pub fn validate_token(&self, token: &str) -> bool {
        let token = token.strip_prefix("Bearer ").unwrap_or(token);
        self.tokens.verify_token(token).is_ok()
    }

    /// 이메일로 로그인 회원을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 회원이 없는 경우
    pub async fn login_user_by_email(&self, email: &str) -> AppResult<User> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("회원을 찾을 수 없습니다: {}", email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{image, FakeUserStore, MemoryFileStore};

    fn join_request(email: &str, nickname: &str) -> UserJoinRequest {
        UserJoinRequest {
            email: email.to_string(),
            nickname: nickname.to_string(),
            password: "password123".to_string(),
        }
    }

    struct Fixture {
        service: UserService,
        users: Arc<FakeUserStore>,
        files: Arc<MemoryFileStore>,
    }

    fn fixture(users: FakeUserStore, files: MemoryFileStore) -> Fixture {
        let users = Arc::new(users);
        let files = Arc::new(files);

        let service = UserService::new(users.clone(), files.clone(), TokenService::instance());

        Fixture {
            service,
            users,
            files,
        }
    }

    fn default_fixture() -> Fixture {
        fixture(FakeUserStore::new(), MemoryFileStore::new())
    }

    #[actix_web::test]
    async fn test_check_email_duplicate_messages() {
        let f = default_fixture();

        assert_eq!(
            f.service.check_email_duplicate("new@example.com").await.unwrap(),
            "사용 가능한 이메일입니다."
        );

        f.service
            .join(join_request("new@example.com", "홍길동"), None)
            .await;

        assert_eq!(
            f.service.check_email_duplicate("new@example.com").await.unwrap(),
            "이미 사용 중인 이메일입니다."
        );
    }

    #[actix_web::test]
    async fn test_check_nickname_duplicate_messages() {
        let f = default_fixture();

        assert_eq!(
            f.service.check_nickname_duplicate("홍길동").await.unwrap(),
            "사용 가능한 닉네임입니다."
        );

        f.service
            .join(join_request("hong@example.com", "홍길동"), None)
            .await;

        assert_eq!(
            f.service.check_nickname_duplicate("홍길동").await.unwrap(),
            "이미 사용 중인 닉네임입니다."
        );
    }

    #[actix_web::test]
    async fn test_join_with_profile_photo() {
        let f = default_fixture();

        let message = f
            .service
            .join(
                join_request("hong@example.com", "홍길동"),
                Some(image("me.png", b"png-bytes")),
            )
            .await;

        assert_eq!(message, "회원가입 성공");
        assert_eq!(f.users.count(), 1);
        assert_eq!(f.files.file_count(), 1);

        let users = f.users.users.lock().unwrap();
        assert!(users[0].photo.is_some());
        // 비밀번호는 평문으로 저장되지 않는다
        assert_ne!(users[0].password_hash, "password123");
    }

    #[actix_web::test]
    async fn test_join_duplicate_email_returns_taken_message() {
        let f = default_fixture();

        f.service
            .join(join_request("hong@example.com", "홍길동"), None)
            .await;

        let message = f
            .service
            .join(join_request("hong@example.com", "전우치"), None)
            .await;

        assert_eq!(message, "이미 사용 중인 이메일입니다.");
        assert_eq!(f.users.count(), 1);
    }

    #[actix_web::test]
    async fn test_join_duplicate_nickname_returns_taken_message() {
        let f = default_fixture();

        f.service
            .join(join_request("hong@example.com", "홍길동"), None)
            .await;

        let message = f
            .service
            .join(join_request("jeon@example.com", "홍길동"), None)
            .await;

        assert_eq!(message, "이미 사용 중인 닉네임입니다.");
        assert_eq!(f.users.count(), 1);
    }

    #[actix_web::test]
    async fn test_join_store_failure_cleans_profile_photo() {
        let f = fixture(FakeUserStore::failing(), MemoryFileStore::new());

        let message = f
            .service
            .join(
                join_request("hong@example.com", "홍길동"),
                Some(image("me.png", b"png-bytes")),
            )
            .await;

        assert_eq!(message, "회원가입 실패");
        assert_eq!(f.users.count(), 0);
        // 기록했던 프로필 사진이 정리되어야 한다
        assert_eq!(f.files.file_count(), 0);
    }

    #[actix_web::test]
    async fn test_login_round_trip() {
        let f = default_fixture();

        f.service
            .join(join_request("hong@example.com", "홍길동"), None)
            .await;

        let response = f.service.login("hong@example.com", "password123").await;

        assert!(response.status);
        assert_eq!(response.nickname.as_deref(), Some("홍길동"));

        let token = response.token.expect("로그인 성공 시 토큰이 있어야 한다");
        assert!(f.service.validate_token(&token));
        assert!(f.service.validate_token(&format!("Bearer {}", token)));
    }

    #[actix_web::test]
    async fn test_login_wrong_password_fails_uniformly() {
        let f = default_fixture();

        f.service
            .join(join_request("hong@example.com", "홍길동"), None)
            .await;

        let wrong_password = f.service.login("hong@example.com", "wrong-pass1").await;
        let unknown_email = f.service.login("none@example.com", "password123").await;

        assert!(!wrong_password.status);
        assert!(!unknown_email.status);
        assert!(wrong_password.token.is_none());
        // 계정 존재 여부가 메시지로 노출되지 않는다
        assert_eq!(wrong_password.message, unknown_email.message);
    }

    #[actix_web::test]
    async fn test_validate_token_rejects_garbage() {
        let f = default_fixture();

        assert!(!f.service.validate_token("garbage"));
        assert!(!f.service.validate_token("Bearer garbage"));
        assert!(!f.service.validate_token(""));
    }

    #[actix_web::test]
    async fn test_login_user_by_email() {
        let f = default_fixture();

        f.service
            .join(join_request("hong@example.com", "홍길동"), None)
            .await;

        let user = f
            .service
            .login_user_by_email("hong@example.com")
            .await
            .unwrap();
        assert_eq!(user.nickname, "홍길동");

        let missing = f.service.login_user_by_email("none@example.com").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
