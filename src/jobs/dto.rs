use serde::Deserialize;

use super::model::{Job, JobStatus, PaymentType};

#[derive(Debug, Deserialize)]
pub struct CreateJobInput {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub budget_usd: Option<f64>,
    #[serde(default)]
    pub payment_type: PaymentType,
    pub in_kind_description: Option<String>,
    pub deadline_iso: Option<String>,
    pub posted_by_id: Option<String>,
    pub posted_by_email: Option<String>,
    pub service_type: Option<String>,
    #[serde(default)]
    pub is_standard_rate: bool,
}

/// The set of patchable job fields. Unknown keys are rejected at
/// deserialization, which keeps `id` and `created_at` out of reach of PATCH.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub budget_usd: Option<f64>,
    pub currency: Option<String>,
    pub deadline_iso: Option<String>,
    pub status: Option<JobStatus>,
    pub payment_type: Option<PaymentType>,
    pub in_kind_description: Option<String>,
    pub posted_by_email: Option<String>,
    pub claimed_by_id: Option<String>,
    pub claimed_at_iso: Option<String>,
    pub completed_at_iso: Option<String>,
    pub deliverable_url: Option<String>,
    pub service_type: Option<String>,
    pub is_standard_rate: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub claimed_by_id: Option<String>,
    pub posted_by_id: Option<String>,
}

impl JobFilter {
    /// Every supplied field must match exactly.
    pub fn matches(&self, job: &Job) -> bool {
        self.status.map_or(true, |s| job.status == s)
            && self
                .claimed_by_id
                .as_deref()
                .map_or(true, |id| job.claimed_by_id.as_deref() == Some(id))
            && self
                .posted_by_id
                .as_deref()
                .map_or(true, |id| job.posted_by_id == id)
    }
}
