use serde::Deserialize;

use crate::jobs::model::PaymentType;

use super::model::{Offer, OfferStatus};

#[derive(Debug, Deserialize)]
pub struct CreateOfferInput {
    pub job_id: String,
    pub offered_by_id: Option<String>,
    pub offered_by_email: Option<String>,
    pub offer_amount_usd: Option<f64>,
    #[serde(default)]
    pub offer_payment_type: PaymentType,
    pub offer_in_kind_description: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OfferFilter {
    pub job_id: Option<String>,
    pub offered_by_id: Option<String>,
    pub status: Option<OfferStatus>,
}

impl OfferFilter {
    pub fn matches(&self, offer: &Offer) -> bool {
        self.job_id.as_deref().map_or(true, |id| offer.job_id == id)
            && self
                .offered_by_id
                .as_deref()
                .map_or(true, |id| offer.offered_by_id == id)
            && self.status.map_or(true, |s| offer.status == s)
    }
}
