use crate::models::{candidate::Candidate, staff::Staff};

/// What an authenticated user is, as far as authorization is concerned.
///
/// A user with a Staff profile is always treated as staff, even when they
/// also hold a Candidate profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Registered, but with neither a Staff nor a Candidate profile.
    Unassigned,
    Candidate(Candidate),
    Staff(Staff),
}

impl Role {
    pub fn staff(&self) -> Option<&Staff> {
        match self {
            Role::Staff(staff) => Some(staff),
            _ => None,
        }
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Role::Candidate(candidate) => Some(candidate),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Staff(staff) if staff.admin)
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Staff(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Unassigned => "unassigned",
            Role::Candidate(_) => "candidate",
            Role::Staff(staff) if staff.admin => "admin",
            Role::Staff(_) => "staff",
        }
    }
}
