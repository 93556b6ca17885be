use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::jobs::model::PaymentType;

use super::dto::CreateOfferInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

/// A response to a job proposing terms. `job_id` is a non-owning reference,
/// checked against the store at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub job_id: String,
    pub offered_by_id: String,
    pub offered_by_email: Option<String>,
    pub offer_amount_usd: Option<f64>,
    pub offer_payment_type: PaymentType,
    pub offer_in_kind_description: Option<String>,
    pub message: Option<String>,
    pub status: OfferStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Offer {
    pub fn create(id: String, input: CreateOfferInput, actor: &str, now: OffsetDateTime) -> Self {
        Self {
            id,
            job_id: input.job_id,
            offered_by_id: input.offered_by_id.unwrap_or_else(|| actor.to_string()),
            offered_by_email: input.offered_by_email,
            offer_amount_usd: input.offer_amount_usd,
            offer_payment_type: input.offer_payment_type,
            offer_in_kind_description: input.offer_in_kind_description,
            message: input.message,
            status: OfferStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
