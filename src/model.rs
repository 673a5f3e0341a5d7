//! Wire Types
//!
//! Records exchanged with the SplitGroup REST API. Field names follow the
//! server's JSON shapes: `_id` identifiers, camelCase keys, RFC 3339
//! `createdAt` timestamps.

use serde::{Deserialize, Serialize};

/// The authenticated account holder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A user in the context of one group's membership
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A named collection of members who share expenses
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub members: Vec<Member>,
    pub created_at: String,
}

/// A single payment made by one member and split among a subset of members
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub paid_by: Member,
    pub split_among: Vec<Member>,
    pub group_id: String,
    pub created_at: String,
}

/// Format a server timestamp for display, e.g. "Mar 14, 2026".
///
/// Falls back to the raw string when the server sends something that is not
/// RFC 3339.
pub fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// First letter of a name, uppercased, for avatar badges
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_wire_shape() {
        let json = r#"{
            "_id": "g1",
            "name": "Weekend Trip",
            "members": [
                {"_id": "u1", "name": "Alice", "email": "alice@example.com"}
            ],
            "createdAt": "2026-03-14T12:00:00Z"
        }"#;

        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, "g1");
        assert_eq!(group.members.len(), 1);
        assert_eq!(group.members[0].email, "alice@example.com");
        assert_eq!(group.created_at, "2026-03-14T12:00:00Z");
    }

    #[test]
    fn test_expense_wire_shape() {
        let json = r#"{
            "_id": "e1",
            "title": "Dinner",
            "amount": 85.5,
            "paidBy": {"_id": "u1", "name": "Alice", "email": "alice@example.com"},
            "splitAmong": [
                {"_id": "u1", "name": "Alice", "email": "alice@example.com"},
                {"_id": "u2", "name": "Bob", "email": "bob@example.com"}
            ],
            "groupId": "g1",
            "createdAt": "2026-03-14T20:15:00Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.title, "Dinner");
        assert_eq!(expense.amount, 85.5);
        assert_eq!(expense.paid_by.id, "u1");
        assert_eq!(expense.split_among.len(), 2);
        assert_eq!(expense.group_id, "g1");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-14T12:00:00Z"), "Mar 14, 2026");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("alice"), "A");
        assert_eq!(initial(""), "");
    }
}
