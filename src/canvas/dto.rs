use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Course {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub needs_grading_count: Option<i64>,
}

impl Assignment {
    pub fn needs_grading(&self) -> bool {
        self.needs_grading_count.unwrap_or(0) > 0
    }
}

#[derive(Debug, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub graded_at: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Submission {
    pub fn student_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub name: String,
}
