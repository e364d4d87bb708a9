use serde::{Deserialize, Serialize};

use super::ids::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeType {
    Urgent,
    Info,
    Academic,
}

impl NoticeType {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeType::Urgent => "URGENT",
            NoticeType::Info => "INFO",
            NoticeType::Academic => "ACADEMIC",
        }
    }
}

/// An entry on the digital noticeboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: Id<Notice>,
    pub title: String,
    pub date: String,
    pub notice_type: NoticeType,
    pub content: String,
}
