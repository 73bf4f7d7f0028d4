use serde::{Deserialize, Serialize};

/// A person tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: false,
        }
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

/// Looks up the user a ticket's `userId` points at
pub fn find_user<'a>(users: &'a [User], user_id: Option<&str>) -> Option<&'a User> {
    let user_id = user_id?;
    users.iter().find(|user| user.id == user_id)
}
