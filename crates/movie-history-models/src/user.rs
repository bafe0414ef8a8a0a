use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
