use super::StudentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub email: String,
    // Set by fixtures only; not part of any response.
    #[allow(dead_code)]
    pub name: Option<String>,
    #[allow(dead_code)]
    pub grade: Option<String>,
}
