//! Access policy evaluation
//!
//! Pure functions deciding whether a user may use gated features right now.
//! They are side-effect free and cheap enough to back UI gating on every
//! render, not just login. `now` is always injected by the caller.

use chrono::{DateTime, Duration, Utc};

use crate::constants::TRIAL_DURATION_HOURS;
use crate::models::User;

/// When the user's trial window ends
pub fn trial_expires_at(user: &User) -> DateTime<Utc> {
    user.trial_start_date + Duration::hours(TRIAL_DURATION_HOURS)
}

/// Whether the user's plan grants access at `now`.
///
/// Paid plans are always active; they are administrator-asserted state and
/// never re-validated against billing. Trial plans are active strictly
/// before `trial_start_date + 72h`.
pub fn trial_active(user: &User, now: DateTime<Utc>) -> bool {
    if user.plan.is_paid() {
        return true;
    }
    now < trial_expires_at(user)
}

/// Whether gated creation/scheduling features are available.
///
/// False when no user is present, for administrators (they use a separate
/// surface and never pass the gated-feature check), for blocked accounts,
/// and for expired trials.
pub fn check_access(user: Option<&User>, now: DateTime<Utc>) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user.is_admin {
        return false;
    }
    if user.is_blocked {
        return false;
    }
    trial_active(user, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanType;

    fn trial_user(start: DateTime<Utc>) -> User {
        let mut user = User::new("Ana".into(), "ana@example.com".into(), "pw".into(), false);
        user.trial_start_date = start;
        user
    }

    #[test]
    fn trial_is_active_strictly_before_expiry() {
        let start = Utc::now();
        let user = trial_user(start);
        let expiry = start + Duration::hours(72);

        assert!(trial_active(&user, expiry - Duration::milliseconds(1)));
        assert!(!trial_active(&user, expiry));
        assert!(!trial_active(&user, expiry + Duration::milliseconds(1)));
    }

    #[test]
    fn paid_plans_ignore_trial_start_date() {
        let mut user = trial_user(Utc::now() - Duration::days(365));
        for plan in [PlanType::Mensal, PlanType::Trimestral, PlanType::Anual] {
            user.plan = plan;
            assert!(trial_active(&user, Utc::now()));
        }
    }

    #[test]
    fn no_user_has_no_access() {
        assert!(!check_access(None, Utc::now()));
    }

    #[test]
    fn admins_never_pass_the_gated_feature_check() {
        let mut admin = User::new("Root".into(), "root@example.com".into(), "pw".into(), true);
        admin.plan = PlanType::Anual;
        assert!(!check_access(Some(&admin), Utc::now()));
    }

    #[test]
    fn blocked_users_have_no_access_even_on_paid_plans() {
        let mut user = trial_user(Utc::now());
        user.plan = PlanType::Anual;
        user.is_blocked = true;
        assert!(!check_access(Some(&user), Utc::now()));
    }

    #[test]
    fn active_trial_user_has_access() {
        let user = trial_user(Utc::now());
        assert!(check_access(Some(&user), Utc::now() + Duration::hours(71)));
        assert!(!check_access(Some(&user), Utc::now() + Duration::hours(73)));
    }
}
