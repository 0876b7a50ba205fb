use std::fmt;

/// An activity identifier.
///
/// Wraps i64 to match the SQLite INTEGER PRIMARY KEY type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityId(i64);

impl ActivityId {
    #[cfg(test)]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ActivityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A student identifier. Students are addressed by email from the outside,
/// this id only links them to their participations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudentId(i64);

impl StudentId {
    #[cfg(test)]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A participation row identifier. Ids grow monotonically, so ordering by
/// this id yields signup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipationId(i64);

impl ParticipationId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ParticipationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ParticipationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
