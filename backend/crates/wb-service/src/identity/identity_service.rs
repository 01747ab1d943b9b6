use crate::{
    LoginSession, Mailer, OutboundMail, ServiceError, ServiceResult, SignupRequest, templates,
};

use wb_auth::{Claims, JwtValidator, TokenIssuer, TokenPurpose, hash_password, verify_password};
use wb_core::{Document, Notification, User, UserDetails, UserView, Workspace, WorkspaceRole};
use wb_db::{DocumentRepository, UserRepository};

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

pub const USER_EXISTS: &str = "User already found!";
pub const EMAIL_TAKEN: &str = "User already exists with this email";
pub const USER_NOT_FOUND: &str = "User not found!";

/// Accounts, credentials and tokens.
///
/// Tokens are stateless HS256 JWTs; each carries a purpose and is only
/// accepted for that purpose.
#[derive(Clone)]
pub struct IdentityService {
    pool: SqlitePool,
    tokens: Arc<TokenIssuer>,
    validator: Arc<JwtValidator>,
    mailer: Arc<dyn Mailer>,
    reset_link_base: String,
}

impl IdentityService {
    pub fn new(
        pool: SqlitePool,
        tokens: Arc<TokenIssuer>,
        validator: Arc<JwtValidator>,
        mailer: Arc<dyn Mailer>,
        reset_link_base: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            tokens,
            validator,
            mailer,
            reset_link_base: reset_link_base.into(),
        }
    }

    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<User> {
        let email = request.email.trim().to_string();
        validate_email(&email)?;
        validate_password(&request.password)?;
        if request.fullname.trim().is_empty() {
            return Err(ServiceError::validation(
                "Full name is required",
                Some("fullname"),
            ));
        }

        if UserRepository::find_by_email(&self.pool, &email)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict(USER_EXISTS));
        }

        let hash = hash_blocking(request.password).await?;
        let user = User::new(email, hash, request.fullname.trim().to_string());

        // The unique index still catches a concurrent signup for the same email.
        match DocumentRepository::insert(&self.pool, &user).await {
            Ok(()) => {}
            Err(e) if e.is_unique_violation() => return Err(ServiceError::conflict(USER_EXISTS)),
            Err(e) => return Err(e.into()),
        }

        info!("Registered user {}", user.id);
        Ok(user)
    }

    pub async fn is_email_available(&self, email: &str) -> ServiceResult<bool> {
        let existing = UserRepository::find_by_email(&self.pool, email.trim()).await?;
        Ok(existing.is_none())
    }

    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<LoginSession> {
        let user = self.find_by_email(email).await?;

        let stored = user.password.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored))
            .await
            .map_err(|e| ServiceError::internal(format!("Password check task failed: {}", e)))??;

        if !matches {
            warn!("Failed login for user {}", user.id);
            return Err(ServiceError::invalid_credentials());
        }

        self.session_for(&user)
    }

    /// Signs in an externally authenticated user, provisioning an account on
    /// first sight. Provisioned accounts get a random credential so they can
    /// only sign in through OAuth until a password reset.
    pub async fn oauth_login(&self, email: &str, name: &str) -> ServiceResult<LoginSession> {
        let email = email.trim();
        validate_email(email)?;

        if let Some(user) = UserRepository::find_by_email(&self.pool, email).await? {
            return self.session_for(&user);
        }

        let hash = hash_blocking(Uuid::new_v4().to_string()).await?;
        let fullname = if name.trim().is_empty() { email } else { name.trim() };
        let user = User::new(email.to_string(), hash, fullname.to_string());
        DocumentRepository::insert(&self.pool, &user).await?;

        info!("Provisioned OAuth user {}", user.id);
        self.session_for(&user)
    }

    pub fn verify_token(&self, token: &str) -> ServiceResult<Claims> {
        Ok(self.validator.validate_for(token, TokenPurpose::Session)?)
    }

    /// Session token to user id.
    pub fn authenticate(&self, token: &str) -> ServiceResult<Uuid> {
        Ok(self.verify_token(token)?.user_id()?)
    }

    pub async fn request_password_reset(&self, email: &str) -> ServiceResult<()> {
        let user = self.find_by_email(email).await?;

        let token = self.tokens.password_reset(user.id, &user.email)?;
        let link = templates::link_with_token(&self.reset_link_base, &token);

        self.mailer
            .send(OutboundMail {
                to: user.email.clone(),
                subject: templates::PASSWORD_RESET_SUBJECT.to_string(),
                html: templates::password_reset_body(&link),
            })
            .await?;

        info!("Sent password reset for user {}", user.id);
        Ok(())
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> ServiceResult<()> {
        let claims = self
            .validator
            .validate_for(token, TokenPurpose::PasswordReset)?;
        validate_password(new_password)?;

        let mut user = self.load_user(claims.user_id()?).await?;
        user.password = hash_blocking(new_password.to_string()).await?;
        user.touch();
        DocumentRepository::save(&self.pool, &user).await?;

        info!("Password reset for user {}", user.id);
        Ok(())
    }

    pub async fn list_users(&self) -> ServiceResult<Vec<UserView>> {
        let users: Vec<User> = DocumentRepository::find_all(&self.pool).await?;
        Ok(users.iter().map(UserView::from).collect())
    }

    pub async fn user_details(&self, user_id: Uuid) -> ServiceResult<UserDetails> {
        let user = self.load_user(user_id).await?;
        Ok(UserDetails::from(&user))
    }

    pub async fn check_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<WorkspaceRole> {
        let workspace = DocumentRepository::find_by_id::<Workspace, _>(&self.pool, workspace_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace not found"))?;

        workspace
            .role_of(user_id)
            .ok_or_else(|| ServiceError::not_found("User is not a member of this workspace"))
    }

    pub async fn notifications(&self, user_id: Uuid) -> ServiceResult<Vec<Notification>> {
        Ok(self.load_user(user_id).await?.notifications)
    }

    /// Returns how many notifications changed from unread to read.
    pub async fn mark_notifications_read(&self, user_id: Uuid) -> ServiceResult<usize> {
        let mut user = self.load_user(user_id).await?;

        let unread = user.unread_count();
        if unread > 0 {
            user.mark_notifications_read();
            user.touch();
            DocumentRepository::save(&self.pool, &user).await?;
        }

        Ok(unread)
    }

    fn session_for(&self, user: &User) -> ServiceResult<LoginSession> {
        let token = self.tokens.session(user.id)?;
        Ok(LoginSession {
            token,
            user_name: user.fullname.clone(),
            user_id: user.id,
        })
    }

    async fn find_by_email(&self, email: &str) -> ServiceResult<User> {
        UserRepository::find_by_email(&self.pool, email.trim())
            .await?
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))
    }

    async fn load_user(&self, user_id: Uuid) -> ServiceResult<User> {
        DocumentRepository::find_by_id::<User, _>(&self.pool, user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(USER_NOT_FOUND))
    }
}

/// Runs on the blocking pool.
async fn hash_blocking(password: String) -> ServiceResult<String> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ServiceError::internal(format!("Password hashing task failed: {}", e)))??;
    Ok(hash)
}

#[track_caller]
fn validate_email(email: &str) -> ServiceResult<()> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if valid {
        Ok(())
    } else {
        Err(ServiceError::validation(
            "A valid email is required",
            Some("email"),
        ))
    }
}

#[track_caller]
fn validate_password(password: &str) -> ServiceResult<()> {
    if password.is_empty() {
        return Err(ServiceError::validation(
            "Password is required",
            Some("password"),
        ));
    }
    Ok(())
}
