//! Administrative operations
//!
//! Everything here mutates the Users collection; the synchronization loop
//! picks the changes up and re-resolves the affected session on its next
//! pass, so an admin action takes effect without the target logging out.

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{PlanType, User};
use crate::services::access;
use crate::store::{BlobStore, UserRepository};

/// Aggregate counters over the non-admin user base
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub total_users: usize,
    pub active_users: usize,
    pub blocked_users: usize,
    pub trial_users: usize,
    pub mensal_users: usize,
    pub trimestral_users: usize,
    pub anual_users: usize,
}

/// Admin service
pub struct AdminService;

impl AdminService {
    /// List managed (non-admin) accounts, optionally filtered by a
    /// case-insensitive substring of name or email
    pub async fn list_users(store: &dyn BlobStore, search: Option<&str>) -> AppResult<Vec<User>> {
        let users = UserRepository::load_all(store).await?;
        let needle = search.map(str::to_lowercase);

        Ok(users
            .into_iter()
            .filter(|u| !u.is_admin)
            .filter(|u| match &needle {
                Some(n) => {
                    u.name.to_lowercase().contains(n) || u.email.to_lowercase().contains(n)
                }
                None => true,
            })
            .collect())
    }

    /// Assign a subscription plan
    pub async fn set_plan(store: &dyn BlobStore, user_id: Uuid, plan: PlanType) -> AppResult<User> {
        let mut user = Self::managed_user(store, user_id).await?;
        user.plan = plan;
        UserRepository::upsert(store, &user).await?;

        info!(user_id = %user.id, plan = ?plan, "plan updated");
        Ok(user)
    }

    /// Block or unblock an account
    pub async fn set_blocked(
        store: &dyn BlobStore,
        user_id: Uuid,
        blocked: bool,
    ) -> AppResult<User> {
        let mut user = Self::managed_user(store, user_id).await?;
        user.is_blocked = blocked;
        UserRepository::upsert(store, &user).await?;

        info!(user_id = %user.id, blocked, "block flag updated");
        Ok(user)
    }

    /// Grant a fresh trial: plan back to Trial, the window restarting now
    pub async fn reset_trial(store: &dyn BlobStore, user_id: Uuid) -> AppResult<User> {
        let mut user = Self::managed_user(store, user_id).await?;
        user.plan = PlanType::Trial;
        user.trial_start_date = Utc::now();
        UserRepository::upsert(store, &user).await?;

        info!(user_id = %user.id, "trial reset");
        Ok(user)
    }

    /// Aggregate counters over the managed user base
    pub async fn stats(store: &dyn BlobStore) -> AppResult<SystemStats> {
        let now = Utc::now();
        let users = Self::list_users(store, None).await?;

        let mut stats = SystemStats {
            total_users: users.len(),
            active_users: 0,
            blocked_users: 0,
            trial_users: 0,
            mensal_users: 0,
            trimestral_users: 0,
            anual_users: 0,
        };
        for user in &users {
            if user.is_blocked {
                stats.blocked_users += 1;
            }
            if access::check_access(Some(user), now) {
                stats.active_users += 1;
            }
            match user.plan {
                PlanType::Trial => stats.trial_users += 1,
                PlanType::Mensal => stats.mensal_users += 1,
                PlanType::Trimestral => stats.trimestral_users += 1,
                PlanType::Anual => stats.anual_users += 1,
            }
        }
        Ok(stats)
    }

    async fn managed_user(store: &dyn BlobStore, user_id: Uuid) -> AppResult<User> {
        let user = UserRepository::find_by_id(store, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
        if user.is_admin {
            return Err(AppError::AccessDenied(
                "administrator accounts are not managed here".to_string(),
            ));
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Duration;

    async fn seed(store: &MemoryStore, name: &str, email: &str, is_admin: bool) -> User {
        let user = User::new(name.into(), email.into(), "pw".into(), is_admin);
        UserRepository::upsert(store, &user).await.unwrap();
        user
    }

    #[tokio::test]
    async fn listing_excludes_admins_and_filters_case_insensitively() {
        let store = MemoryStore::new();
        seed(&store, "Ana Maria", "ana@example.com", false).await;
        seed(&store, "Bruno", "bruno@loja.co.mz", false).await;
        seed(&store, "Root", "root@example.com", true).await;

        let all = AdminService::list_users(&store, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let hits = AdminService::list_users(&store, Some("ANA")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana Maria");

        let by_email = AdminService::list_users(&store, Some("loja")).await.unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Bruno");
    }

    #[tokio::test]
    async fn plan_assignment_persists() {
        let store = MemoryStore::new();
        let user = seed(&store, "Ana", "ana@example.com", false).await;

        AdminService::set_plan(&store, user.id, PlanType::Trimestral)
            .await
            .unwrap();
        let fresh = UserRepository::find_by_id(&store, user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fresh.plan, PlanType::Trimestral);
    }

    #[tokio::test]
    async fn trial_reset_restarts_the_window() {
        let store = MemoryStore::new();
        let mut user = seed(&store, "Ana", "ana@example.com", false).await;
        user.trial_start_date = Utc::now() - Duration::days(30);
        user.plan = PlanType::Mensal;
        UserRepository::upsert(&store, &user).await.unwrap();

        let renewed = AdminService::reset_trial(&store, user.id).await.unwrap();
        assert_eq!(renewed.plan, PlanType::Trial);
        assert!(access::trial_active(&renewed, Utc::now()));
    }

    #[tokio::test]
    async fn blocking_and_unblocking_round_trips() {
        let store = MemoryStore::new();
        let user = seed(&store, "Ana", "ana@example.com", false).await;

        let blocked = AdminService::set_blocked(&store, user.id, true).await.unwrap();
        assert!(blocked.is_blocked);
        let unblocked = AdminService::set_blocked(&store, user.id, false)
            .await
            .unwrap();
        assert!(!unblocked.is_blocked);
    }

    #[tokio::test]
    async fn admin_accounts_cannot_be_managed() {
        let store = MemoryStore::new();
        let root = seed(&store, "Root", "root@example.com", true).await;

        let err = AdminService::set_blocked(&store, root.id, true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AccessDenied(_)));

        let err = AdminService::set_plan(&store, Uuid::new_v4(), PlanType::Anual)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn stats_count_plans_blocks_and_active_access() {
        let store = MemoryStore::new();
        seed(&store, "Ana", "ana@example.com", false).await;
        let bruno = seed(&store, "Bruno", "bruno@example.com", false).await;
        let mut carla = seed(&store, "Carla", "carla@example.com", false).await;
        seed(&store, "Root", "root@example.com", true).await;

        AdminService::set_plan(&store, bruno.id, PlanType::Anual)
            .await
            .unwrap();
        carla.trial_start_date = Utc::now() - Duration::days(10);
        UserRepository::upsert(&store, &carla).await.unwrap();
        AdminService::set_blocked(&store, carla.id, true).await.unwrap();

        let stats = AdminService::stats(&store).await.unwrap();
        assert_eq!(
            stats,
            SystemStats {
                total_users: 3,
                active_users: 2,
                blocked_users: 1,
                trial_users: 2,
                mensal_users: 0,
                trimestral_users: 0,
                anual_users: 1,
            }
        );
    }
}
