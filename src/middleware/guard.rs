//! Authorization checks run before a service touches the store.
//!
//! Each check takes the caller's resolved [`Role`] and either passes (handing
//! back the profile it matched, where there is one) or fails with
//! [`Error::Forbidden`]. Failures never mention the target record, so a
//! rejected caller learns nothing about whether it exists.

use crate::error::{Error, Result};
use crate::models::{candidate::Candidate, role::Role, staff::Staff};

/// The profile that owns a record, e.g. an interview's interviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Staff(i32),
    Candidate(i32),
}

pub fn require_staff(role: &Role) -> Result<&Staff> {
    role.staff().ok_or_else(|| deny(role, "staff"))
}

pub fn require_admin(role: &Role) -> Result<&Staff> {
    match role.staff() {
        Some(staff) if staff.admin => Ok(staff),
        _ => Err(deny(role, "admin")),
    }
}

pub fn require_candidate(role: &Role) -> Result<&Candidate> {
    role.candidate().ok_or_else(|| deny(role, "candidate"))
}

/// Passes when the caller's own profile is `owner`.
///
/// `None` means the owning record could not be found; that is reported as
/// `Forbidden` too.
pub fn require_owner(role: &Role, owner: Option<Owner>) -> Result<()> {
    if owner.is_some_and(|owner| owns(role, owner)) {
        Ok(())
    } else {
        Err(deny(role, "owner"))
    }
}

pub fn require_admin_or_owner(role: &Role, owner: Option<Owner>) -> Result<()> {
    if role.is_admin() {
        return Ok(());
    }
    require_owner(role, owner)
}

pub fn owns(role: &Role, owner: Owner) -> bool {
    match (role, owner) {
        (Role::Staff(staff), Owner::Staff(id)) => staff.id == id,
        (Role::Candidate(candidate), Owner::Candidate(id)) => candidate.id == id,
        _ => false,
    }
}

fn deny(role: &Role, required: &str) -> Error {
    tracing::warn!(role = role.label(), required, "Authorization check failed");
    Error::forbidden()
}
