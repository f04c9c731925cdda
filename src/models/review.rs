// src/models/review.rs
use serde::{Deserialize, Serialize};

/// A review record as stored by the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    pub review_id: i64,                   // Server-assigned, never edited
    pub contact_number: String,
    pub user_name: String,
    pub product_name: String,
    pub product_review: String,
    pub preferred_contact_method: String, // Only meaningful when preferred_contact_again is set
    pub preferred_contact_again: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `PUT /reviews/{id}`: the editable subset of a [`Review`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub contact_number: String,
    pub user_name: String,
    pub product_name: String,
    pub product_review: String,
    pub preferred_contact_method: String,
    pub preferred_contact_again: bool,
}

impl From<&Review> for ReviewUpdate {
    fn from(review: &Review) -> Self {
        Self {
            contact_number: review.contact_number.clone(),
            user_name: review.user_name.clone(),
            product_name: review.product_name.clone(),
            product_review: review.product_review.clone(),
            preferred_contact_method: review.preferred_contact_method.clone(),
            preferred_contact_again: review.preferred_contact_again,
        }
    }
}

impl Review {
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Response of the `GET /` health probe.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_deserializes_from_service_payload() {
        let raw = r#"{
            "review_id": 7,
            "contact_number": "+15551234567",
            "user_name": "Anne-Marie O'Brien",
            "product_name": "Kettle",
            "product_review": "Boils quickly and quietly.",
            "preferred_contact_method": "Email",
            "preferred_contact_again": true,
            "created_at": "2024-05-01T10:00:00",
            "updated_at": "2024-05-02T11:30:00"
        }"#;
        let review: Review = serde_json::from_str(raw).unwrap();
        assert_eq!(review.review_id, 7);
        assert!(review.preferred_contact_again);
        assert!(review.was_edited());
    }

    #[test]
    fn update_payload_carries_only_editable_fields() {
        let review = Review {
            review_id: 3,
            user_name: "Amina".into(),
            created_at: "2024-01-01T00:00:00".into(),
            ..Review::default()
        };
        let payload = serde_json::to_value(ReviewUpdate::from(&review)).unwrap();

        assert_eq!(payload["user_name"], "Amina");
        assert!(payload.get("review_id").is_none());
        assert!(payload.get("created_at").is_none());
    }
}
