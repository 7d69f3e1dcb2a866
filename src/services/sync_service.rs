//! Synchronization loop and due-schedule checker
//!
//! Single reconciliation routine, two triggers: store change notifications
//! from writers in this runtime, and an unconditional fallback poll for
//! writers outside it (another process editing the data directory). A
//! separate, slower timer scans for scheduled posts entering their due
//! window and queues local reminders.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::constants::DUE_WINDOW_SECS;
use crate::error::AppResult;
use crate::services::SessionService;
use crate::state::{AppState, Notice};
use crate::store::PostRepository;

/// Run the reconciliation loop for the process lifetime.
///
/// Both triggers funnel into [`SessionService::reconcile`], which is
/// idempotent; reconciling with no actual changes is a no-op.
pub async fn run_sync_loop(state: AppState) {
    let mut changes = state.store().subscribe();
    let mut ticker = tokio::time::interval(state.config().sync.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        poll_interval = ?state.config().sync.poll_interval,
        "synchronization loop started"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            event = changes.recv() => match event {
                Ok(key) => debug!(key, "store change notification"),
                // A lagged receiver just means we missed intermediate
                // notifications; the reconciliation below reads the latest
                // state anyway.
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "change notifications lagged"),
                Err(RecvError::Closed) => break,
            },
        }

        if let Err(e) = SessionService::reconcile(&state).await {
            warn!(error = %e, "reconciliation failed");
        }
    }
}

/// Run the due-schedule checker for the process lifetime
pub async fn run_schedule_checker(state: AppState) {
    let mut ticker = tokio::time::interval(state.config().sync.schedule_check_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if let Err(e) = check_due_posts(&state, Utc::now()).await {
            warn!(error = %e, "due-schedule check failed");
        }
    }
}

/// Scan the active non-admin user's posts for scheduled times inside the
/// trailing due window and queue one reminder per match.
///
/// No record of prior reminders is kept: a post whose scheduled time falls
/// inside the window of two consecutive checks queues a reminder both times.
pub async fn check_due_posts(state: &AppState, now: DateTime<Utc>) -> AppResult<usize> {
    let session = state.session().await;
    let Some(user) = session.user() else {
        return Ok(0);
    };
    if user.is_admin {
        return Ok(0);
    }

    let posts = PostRepository::load_all(state.store()).await?;
    let window_start = now - Duration::seconds(DUE_WINDOW_SECS);

    let mut raised = 0;
    for post in posts.iter().filter(|p| p.user_id == user.id && !p.is_posted) {
        if let Some(scheduled) = post.scheduled_time {
            if scheduled <= now && scheduled > window_start {
                state.push_notice(Notice::PostDue { post_id: post.id });
                raised += 1;
            }
        }
    }

    if raised > 0 {
        info!(count = raised, "scheduled posts due");
    }
    Ok(raised)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanType, PostContent, PostType};
    use crate::services::{PostService, SessionService, access};
    use crate::state::test_support::test_state;
    use crate::store::UserRepository;

    #[tokio::test]
    async fn blocking_a_user_forces_logout_on_next_reconcile() {
        let state = test_state();
        let user = SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();

        // Administrator flips the block flag in the persisted collection.
        let mut blocked = user.clone();
        blocked.is_blocked = true;
        UserRepository::upsert(state.store(), &blocked).await.unwrap();

        SessionService::reconcile(&state).await.unwrap();
        assert!(state.session().await.is_anonymous());
        assert_eq!(state.drain_notices(), vec![Notice::AccountBlocked]);
    }

    #[tokio::test]
    async fn deleting_a_user_forces_logout_on_next_reconcile() {
        let state = test_state();
        SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();

        UserRepository::save_all(state.store(), &[]).await.unwrap();

        SessionService::reconcile(&state).await.unwrap();
        assert!(state.session().await.is_anonymous());
        assert_eq!(state.drain_notices(), vec![Notice::AccountRemoved]);
    }

    #[tokio::test]
    async fn plan_change_propagates_to_the_session_snapshot() {
        let state = test_state();
        let user = SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();

        // Expire the trial, then have the administrator grant a yearly plan.
        let mut paid = user.clone();
        paid.trial_start_date = Utc::now() - Duration::days(30);
        paid.plan = PlanType::Anual;
        UserRepository::upsert(state.store(), &paid).await.unwrap();

        SessionService::reconcile(&state).await.unwrap();
        let fresh = state.current_user().await.unwrap();
        assert_eq!(fresh.plan, PlanType::Anual);
        assert!(access::check_access(Some(&fresh), Utc::now()));
    }

    #[tokio::test]
    async fn reconcile_with_no_changes_keeps_the_session() {
        let state = test_state();
        let user = SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();

        SessionService::reconcile(&state).await.unwrap();
        SessionService::reconcile(&state).await.unwrap();
        assert_eq!(state.current_user().await.unwrap().id, user.id);
        assert!(state.drain_notices().is_empty());
    }

    #[tokio::test]
    async fn due_check_raises_for_posts_inside_the_trailing_window() {
        let state = test_state();
        let user = SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();
        let now = Utc::now();

        let due = PostService::create_post(
            state.store(),
            user.id,
            PostType::TextImage,
            PostContent::default(),
            Some(now - Duration::seconds(30)),
        )
        .await
        .unwrap();
        // Outside the window: too old and not yet due.
        PostService::create_post(
            state.store(),
            user.id,
            PostType::TextImage,
            PostContent::default(),
            Some(now - Duration::seconds(90)),
        )
        .await
        .unwrap();
        PostService::create_post(
            state.store(),
            user.id,
            PostType::TextImage,
            PostContent::default(),
            Some(now + Duration::seconds(30)),
        )
        .await
        .unwrap();

        let raised = check_due_posts(&state, now).await.unwrap();
        assert_eq!(raised, 1);
        assert_eq!(
            state.drain_notices(),
            vec![Notice::PostDue { post_id: due.id }]
        );
    }

    #[tokio::test]
    async fn due_check_fires_again_on_the_next_tick_inside_the_window() {
        // Legacy behavior, deliberately preserved: with a 30s cadence and a
        // 60s window, a post can be reported by two consecutive checks.
        let state = test_state();
        let user = SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();
        let now = Utc::now();

        PostService::create_post(
            state.store(),
            user.id,
            PostType::Reel,
            PostContent::default(),
            Some(now),
        )
        .await
        .unwrap();

        assert_eq!(check_due_posts(&state, now).await.unwrap(), 1);
        assert_eq!(
            check_due_posts(&state, now + Duration::seconds(30))
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            check_due_posts(&state, now + Duration::seconds(61))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn due_check_ignores_admin_and_anonymous_sessions() {
        let state = test_state();
        assert_eq!(check_due_posts(&state, Utc::now()).await.unwrap(), 0);

        SessionService::register(&state, "Root", "root@example.com", "pw", true)
            .await
            .unwrap();
        assert_eq!(check_due_posts(&state, Utc::now()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn due_check_ignores_other_users_posts() {
        let state = test_state();
        let user = SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();
        let now = Utc::now();

        PostService::create_post(
            state.store(),
            uuid::Uuid::new_v4(),
            PostType::TextImage,
            PostContent::default(),
            Some(now),
        )
        .await
        .unwrap();
        PostService::create_post(
            state.store(),
            user.id,
            PostType::TextImage,
            PostContent::default(),
            Some(now),
        )
        .await
        .unwrap();

        assert_eq!(check_due_posts(&state, now).await.unwrap(), 1);
    }
}
