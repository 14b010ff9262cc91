//! Record types for the user directory.
//!
//! The shapes mirror the upstream `/users` payload. `name`, `username`, and
//! `email` are the displayed (and filterable) columns; the remaining fields
//! only appear on the detail view and are optional so a sparse payload still
//! decodes.

use serde::{Deserialize, Serialize};

/// A single directory entry, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Option<Geo>,
}

/// Geographic coordinates. The upstream API serves these as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Employer info shown on the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_upstream_payload() {
        let payload = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.phone.as_deref(), Some("1-770-736-8031 x56442"));

        let address = user.address.unwrap();
        assert_eq!(address.city, "Gwenborough");
        assert_eq!(address.geo.unwrap().lat, "-37.3159");

        let company = user.company.unwrap();
        assert_eq!(company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn test_decodes_sparse_payload() {
        let payload = r#"{
            "id": 7,
            "name": "Kurtis Weissnat",
            "username": "Elwyn.Skiles",
            "email": "Telly.Hoeger@billy.biz"
        }"#;

        let user: User = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.phone.is_none());
        assert!(user.address.is_none());
        assert!(user.company.is_none());
    }
}
