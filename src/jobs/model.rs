use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::rates;

use super::dto::{CreateJobInput, JobPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

/// How a job pays out. Shared with offers, which may propose different terms
/// than the job asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    #[default]
    Monetary,
    InKind,
    Hybrid,
}

/// A posted unit of work. Timestamps are stored as instants and rendered as
/// RFC 3339 UTC strings (`...Z`) on the wire; the `*_iso` fields are
/// client-supplied strings passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub budget_usd: Option<f64>,
    pub currency: String,
    pub deadline_iso: Option<String>,
    pub status: JobStatus,
    pub payment_type: PaymentType,
    pub in_kind_description: Option<String>,
    pub posted_by_id: String,
    pub posted_by_email: Option<String>,
    pub claimed_by_id: Option<String>,
    pub claimed_at_iso: Option<String>,
    pub completed_at_iso: Option<String>,
    pub deliverable_url: Option<String>,
    pub service_type: Option<String>,
    pub is_standard_rate: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Job {
    /// Builds a new job from a creation payload. When the payload opts into a
    /// standard rate and names a known service type, the published base rate
    /// replaces any client-supplied budget.
    pub fn create(id: String, input: CreateJobInput, actor: &str, now: OffsetDateTime) -> Self {
        let budget_usd = if input.is_standard_rate {
            input
                .service_type
                .as_deref()
                .and_then(rates::resolve)
                .map(|rate| rate.base_rate)
                .or(input.budget_usd)
        } else {
            input.budget_usd
        };

        Self {
            id,
            title: input.title,
            category: input.category,
            description: input.description,
            budget_usd,
            currency: "USD".into(),
            deadline_iso: input.deadline_iso,
            status: JobStatus::Open,
            payment_type: input.payment_type,
            in_kind_description: input.in_kind_description,
            posted_by_id: input.posted_by_id.unwrap_or_else(|| actor.to_string()),
            posted_by_email: input.posted_by_email,
            claimed_by_id: None,
            claimed_at_iso: None,
            completed_at_iso: None,
            deliverable_url: None,
            service_type: input.service_type,
            is_standard_rate: input.is_standard_rate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a patch into the job. Only fields present in the patch change;
    /// `id` and `created_at` are not part of the patch schema.
    pub fn apply_patch(&mut self, patch: JobPatch, now: OffsetDateTime) {
        let JobPatch {
            title,
            category,
            description,
            budget_usd,
            currency,
            deadline_iso,
            status,
            payment_type,
            in_kind_description,
            posted_by_email,
            claimed_by_id,
            claimed_at_iso,
            completed_at_iso,
            deliverable_url,
            service_type,
            is_standard_rate,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = budget_usd {
            self.budget_usd = Some(v);
        }
        if let Some(v) = currency {
            self.currency = v;
        }
        if let Some(v) = deadline_iso {
            self.deadline_iso = Some(v);
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = payment_type {
            self.payment_type = v;
        }
        if let Some(v) = in_kind_description {
            self.in_kind_description = Some(v);
        }
        if let Some(v) = posted_by_email {
            self.posted_by_email = Some(v);
        }
        if let Some(v) = claimed_by_id {
            self.claimed_by_id = Some(v);
        }
        if let Some(v) = claimed_at_iso {
            self.claimed_at_iso = Some(v);
        }
        if let Some(v) = completed_at_iso {
            self.completed_at_iso = Some(v);
        }
        if let Some(v) = deliverable_url {
            self.deliverable_url = Some(v);
        }
        if let Some(v) = service_type {
            self.service_type = Some(v);
        }
        if let Some(v) = is_standard_rate {
            self.is_standard_rate = v;
        }
        self.updated_at = now;
    }
}
