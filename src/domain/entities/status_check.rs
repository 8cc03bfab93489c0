use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client ping recorded by `POST /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Any string is accepted for `client_name`, including an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    pub fn from_create(create: StatusCheckCreate) -> Self {
        StatusCheck {
            id: Uuid::new_v4().to_string(),
            client_name: create.client_name,
            // Millisecond precision is what the document store keeps
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn from_create_stamps_record() {
        let before = Utc::now().trunc_subsecs(3);
        let check = StatusCheck::from_create(StatusCheckCreate { client_name: "uptime-monitor".into() });

        assert_eq!(check.client_name, "uptime-monitor");
        assert!(check.timestamp >= before);
        assert!(Uuid::parse_str(&check.id).is_ok());
        assert_eq!(check.timestamp.nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn empty_client_name_is_kept_verbatim() {
        let check = StatusCheck::from_create(StatusCheckCreate { client_name: String::new() });
        assert_eq!(check.client_name, "");
    }
}
