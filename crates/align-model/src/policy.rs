//! Who may set whose alignment
//!
//! A member may always set their own entry. Setting someone else's entry is
//! allowed when that member has no entry yet, or when the actor is listed in
//! the chart's admins. [`crate::set_user`] never consults this; callers acting
//! on behalf of another member must call [`authorize_set`] first.

use crate::chart::Chart;
use crate::error::PolicyError;
use crate::ids::UserId;

/// Check whether `actor` may set the entry of `target` in `chart`
///
/// # Errors
/// [`PolicyError::UnauthorizedMutation`] when `target` already has an entry,
/// differs from `actor`, and `actor` is not an admin.
pub fn authorize_set(chart: &Chart, actor: &UserId, target: &UserId) -> Result<(), PolicyError> {
    if actor == target || !chart.contains_user(target.as_str()) || chart.is_admin(actor.as_str()) {
        return Ok(());
    }

    Err(PolicyError::UnauthorizedMutation {
        actor: actor.clone(),
        target: target.clone(),
    })
}
