use crate::{Mailer, OutboundMail, ServiceError, ServiceResult, templates};

use wb_auth::{JwtValidator, TokenIssuer, TokenPurpose};
use wb_core::{
    Board, BoardSummary, Document, MemberView, Module, NewWorkspace, Outcome, User, Workspace,
    WorkspaceDetails, WorkspaceMember, WorkspaceRole, WorkspaceSummary, WorkspaceView,
    apply_patch,
};
use wb_db::{DocumentRepository, UserRepository};

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

const PROTECTED_WORKSPACE_FIELDS: [&str; 3] = ["createdBy", "members", "boards"];

pub const MEMBER_ADDED: &str = "User added to Workspace successfully";
pub const MEMBER_REMOVED: &str = "User removed from workspace successfully";
pub const ALREADY_MEMBER: &str = "User is already a member of this workspace";
pub const NOT_A_MEMBER: &str = "User is not a member of this workspace";
pub const ADD_FORBIDDEN: &str = "You do not have permission to add a user to this workspace";
pub const REMOVE_FORBIDDEN: &str =
    "You do not have permission to remove a user from this workspace";
pub const INVITE_FORBIDDEN: &str = "You do not have permission to invite a user to this workspace";
pub const INVITE_SENT: &str = "Invitation sent successfully";
pub const UPDATE_FORBIDDEN: &str = "You do not have permission to update this workspace";
pub const DELETE_FORBIDDEN: &str = "You do not have permission to delete this workspace";

/// Workspaces, their membership and their attachment to modules.
///
/// Only the creator may change membership; any admin may rename or delete
/// the workspace. Refusals and redundant requests
/// come back as [`Outcome`] values, not errors.
#[derive(Clone)]
pub struct WorkspaceManager {
    pool: SqlitePool,
    tokens: Arc<TokenIssuer>,
    validator: Arc<JwtValidator>,
    mailer: Arc<dyn Mailer>,
    invite_link_base: String,
}

impl WorkspaceManager {
    pub fn new(
        pool: SqlitePool,
        tokens: Arc<TokenIssuer>,
        validator: Arc<JwtValidator>,
        mailer: Arc<dyn Mailer>,
        invite_link_base: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            tokens,
            validator,
            mailer,
            invite_link_base: invite_link_base.into(),
        }
    }

    /// Workspaces of a module the user created or belongs to.
    pub async fn query(
        &self,
        module_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Vec<WorkspaceSummary>> {
        let module = self.load_module(&self.pool, module_id).await?;

        let workspaces: Vec<Workspace> =
            DocumentRepository::find_many(&self.pool, &module.workspaces).await?;

        Ok(workspaces
            .iter()
            .filter(|ws| ws.is_visible_to(user_id))
            .map(WorkspaceSummary::from)
            .collect())
    }

    /// The seeded product modules, in seeding order.
    pub async fn list_modules(&self) -> ServiceResult<Vec<Module>> {
        Ok(DocumentRepository::find_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, workspace_id: Uuid) -> ServiceResult<WorkspaceView> {
        let workspace = self.load_workspace(workspace_id).await?;

        let boards: Vec<Board> =
            DocumentRepository::find_many(&self.pool, &workspace.boards).await?;

        let member_ids: Vec<Uuid> = workspace.members.iter().map(|m| m.user_id).collect();
        let users: HashMap<Uuid, User> =
            DocumentRepository::find_many::<User, _>(&self.pool, &member_ids)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect();

        let members = workspace
            .members
            .iter()
            .map(|member| {
                let user = users.get(&member.user_id);
                MemberView {
                    user_id: member.user_id,
                    email: user.map(|u| u.email.clone()),
                    fullname: user.map(|u| u.fullname.clone()),
                    role: member.role,
                }
            })
            .collect();

        Ok(WorkspaceView {
            workspace_id: workspace.id,
            workspace_name: workspace.workspace_name,
            boards: boards.iter().map(BoardSummary::from).collect(),
            members,
        })
    }

    pub async fn get_details(&self, workspace_id: Uuid) -> ServiceResult<WorkspaceDetails> {
        let workspace = self.load_workspace(workspace_id).await?;
        let boards = DocumentRepository::find_many(&self.pool, &workspace.boards).await?;

        Ok(WorkspaceDetails {
            workspace_id: workspace.id,
            workspace_name: workspace.workspace_name,
            description: workspace.description,
            created_by: workspace.created_by,
            members: workspace.members,
            boards,
        })
    }

    /// Creates a workspace with `created_by` as its only (admin) member and,
    /// when a module is given, attaches it in the same transaction.
    pub async fn add(
        &self,
        module_id: Option<Uuid>,
        data: NewWorkspace,
        created_by: Uuid,
    ) -> ServiceResult<Workspace> {
        if data.workspace_name.trim().is_empty() {
            return Err(ServiceError::validation(
                "Workspace name is required",
                Some("workspaceName"),
            ));
        }

        let workspace = Workspace::new(data, created_by);

        let mut tx = self.pool.begin().await?;

        DocumentRepository::insert(&mut *tx, &workspace).await?;

        if let Some(module_id) = module_id {
            let mut module = self.load_module(&mut *tx, module_id).await?;
            module.workspaces.push(workspace.id);
            module.touch();
            DocumentRepository::save(&mut *tx, &module).await?;
        }

        tx.commit().await?;
        info!(
            "Created workspace {} for user {} (module {:?})",
            workspace.id, created_by, module_id
        );

        Ok(workspace)
    }

    /// Admins only.
    pub async fn update(
        &self,
        workspace_id: Uuid,
        patch: Value,
        admin_id: Uuid,
    ) -> ServiceResult<Outcome<Workspace>> {
        let current = self.load_workspace(workspace_id).await?;

        if !current.is_admin(admin_id) {
            return Ok(Outcome::Forbidden(UPDATE_FORBIDDEN.to_string()));
        }

        let mut updated: Workspace = apply_patch(&current, patch, &PROTECTED_WORKSPACE_FIELDS)?;
        updated.touch();
        DocumentRepository::save(&self.pool, &updated).await?;

        info!("Updated workspace {}", workspace_id);
        Ok(Outcome::Done(updated))
    }

    /// Detaches the workspace from its module and deletes it. Admins only.
    /// Boards stay in place.
    pub async fn remove(
        &self,
        workspace_id: Uuid,
        module_id: Uuid,
        admin_id: Uuid,
    ) -> ServiceResult<Outcome<Uuid>> {
        let mut tx = self.pool.begin().await?;

        let mut module = self.load_module(&mut *tx, module_id).await?;
        let workspace = DocumentRepository::find_by_id::<Workspace, _>(&mut *tx, workspace_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace not found"))?;

        if !workspace.is_admin(admin_id) {
            return Ok(Outcome::Forbidden(DELETE_FORBIDDEN.to_string()));
        }

        if !module.detach_workspace(workspace_id) {
            warn!(
                "Workspace {} was not attached to module {}",
                workspace_id, module_id
            );
        }
        module.touch();
        DocumentRepository::save(&mut *tx, &module).await?;
        DocumentRepository::delete::<Workspace, _>(&mut *tx, workspace_id).await?;

        tx.commit().await?;

        if !workspace.boards.is_empty() {
            warn!(
                "Workspace {} deleted with {} boards left in place",
                workspace_id,
                workspace.boards.len()
            );
        }
        info!("Removed workspace {} from module {}", workspace_id, module_id);

        Ok(Outcome::Done(workspace_id))
    }

    pub async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        admin_id: Uuid,
        role: Option<WorkspaceRole>,
    ) -> ServiceResult<Outcome<String>> {
        let mut workspace = self.load_workspace(workspace_id).await?;

        if !workspace.is_creator(admin_id) {
            return Ok(Outcome::Forbidden(ADD_FORBIDDEN.to_string()));
        }
        if workspace.is_member(user_id) {
            return Ok(Outcome::NoOp(ALREADY_MEMBER.to_string()));
        }

        DocumentRepository::find_by_id::<User, _>(&self.pool, user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))?;

        let role = role.unwrap_or_default();
        workspace.members.push(WorkspaceMember { user_id, role });
        workspace.touch();
        DocumentRepository::save(&self.pool, &workspace).await?;

        info!(
            "Added user {} to workspace {} as {}",
            user_id, workspace_id, role
        );
        Ok(Outcome::Done(MEMBER_ADDED.to_string()))
    }

    pub async fn remove_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        admin_id: Uuid,
    ) -> ServiceResult<Outcome<String>> {
        let mut workspace = self.load_workspace(workspace_id).await?;

        if !workspace.is_creator(admin_id) {
            return Ok(Outcome::Forbidden(REMOVE_FORBIDDEN.to_string()));
        }
        if !workspace.is_member(user_id) {
            return Ok(Outcome::NoOp(NOT_A_MEMBER.to_string()));
        }

        workspace.members.retain(|m| m.user_id != user_id);
        workspace.touch();
        DocumentRepository::save(&self.pool, &workspace).await?;

        info!("Removed user {} from workspace {}", user_id, workspace_id);
        Ok(Outcome::Done(MEMBER_REMOVED.to_string()))
    }

    /// Mails an invite link carrying a signed invite token. The invitee must
    /// already have an account.
    pub async fn invite_member(
        &self,
        workspace_id: Uuid,
        email: &str,
        role: WorkspaceRole,
        admin_id: Uuid,
    ) -> ServiceResult<Outcome<String>> {
        let workspace = self.load_workspace(workspace_id).await?;

        if !workspace.is_creator(admin_id) {
            return Ok(Outcome::Forbidden(INVITE_FORBIDDEN.to_string()));
        }

        let invitee = UserRepository::find_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found!"))?;

        if workspace.is_member(invitee.id) {
            return Ok(Outcome::NoOp(ALREADY_MEMBER.to_string()));
        }

        let inviter_name = DocumentRepository::find_by_id::<User, _>(&self.pool, admin_id)
            .await?
            .map(|u| u.fullname)
            .unwrap_or_else(|| "A workspace admin".to_string());

        let token = self.tokens.invite(
            invitee.id,
            &invitee.email,
            workspace.id,
            role.as_str(),
            admin_id,
        )?;
        let link = templates::link_with_token(&self.invite_link_base, &token);

        self.mailer
            .send(OutboundMail {
                to: invitee.email.clone(),
                subject: templates::workspace_invite_subject(&workspace.workspace_name),
                html: templates::workspace_invite_body(
                    &inviter_name,
                    &workspace.workspace_name,
                    &link,
                ),
            })
            .await?;

        info!(
            "Invited {} to workspace {} as {}",
            invitee.email, workspace_id, role
        );
        Ok(Outcome::Done(INVITE_SENT.to_string()))
    }

    /// Adds the invited user on behalf of the admin who issued the token.
    pub async fn accept_invite(&self, token: &str) -> ServiceResult<Outcome<String>> {
        let claims = self.validator.validate_for(token, TokenPurpose::Invite)?;

        let user_id = claims.user_id()?;
        let workspace_id = claims.workspace_uuid()?;
        let inviter_id = claims.inviter_uuid()?;
        let role = claims
            .role
            .as_deref()
            .map(str::parse::<WorkspaceRole>)
            .transpose()?;

        self.add_member(workspace_id, user_id, inviter_id, role)
            .await
    }

    async fn load_workspace(&self, workspace_id: Uuid) -> ServiceResult<Workspace> {
        DocumentRepository::find_by_id::<Workspace, _>(&self.pool, workspace_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Workspace not found"))
    }

    async fn load_module<'e, E>(&self, executor: E, module_id: Uuid) -> ServiceResult<Module>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        DocumentRepository::find_by_id::<Module, _>(executor, module_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Module not found"))
    }
}
