use std::fmt;

use super::{ActivityId, ParticipationId, StudentId};

/// One student's membership in one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participation {
    pub id: ParticipationId,
    #[allow(dead_code)]
    pub activity_id: ActivityId,
    pub student_id: StudentId,
}

/// Outcome of a successful roster mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp { email: String, activity_name: String },
    Unregistered { email: String, activity_name: String },
}

impl fmt::Display for RosterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedUp {
                email,
                activity_name,
            } => write!(f, "Signed up {email} for {activity_name}"),
            Self::Unregistered {
                email,
                activity_name,
            } => write!(f, "Unregistered {email} from {activity_name}"),
        }
    }
}
