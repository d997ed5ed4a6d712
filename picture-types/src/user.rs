use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::UserId;

/// A registered player as returned by the create-user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub session_id: String,
    pub name: String,
}

/// The client-local identity kept between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    pub session_id: String,
    pub user_id: UserId,
    pub name: String,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Identity {
            session_id: user.session_id,
            user_id: user.id,
            name: user.name,
        }
    }
}
