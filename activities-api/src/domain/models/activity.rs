use super::ActivityId;

/// An extracurricular offering. The name is the natural key used in URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    /// Roster limit. Zero means the roster is unbounded.
    pub max_participants: i64,
}

impl Activity {
    pub fn is_unlimited(&self) -> bool {
        self.max_participants <= 0
    }

    /// Whether one more participant fits next to `enrolled` existing ones.
    pub fn has_room_for_another(&self, enrolled: i64) -> bool {
        self.is_unlimited() || enrolled < self.max_participants
    }
}

/// An activity together with the emails of its participants, in signup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRoster {
    pub activity: Activity,
    pub participants: Vec<String>,
}

impl ActivityRoster {
    pub fn new(activity: Activity, participants: Vec<String>) -> Self {
        Self {
            activity,
            participants,
        }
    }
}
