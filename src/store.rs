//! In-memory record store for jobs and offers. One instance lives for the
//! process lifetime; nothing survives a restart and nothing is ever deleted.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::jobs::dto::{CreateJobInput, JobFilter, JobPatch};
use crate::jobs::model::Job;
use crate::offers::dto::{CreateOfferInput, OfferFilter};
use crate::offers::model::Offer;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
}

/// Process-wide id source. A single counter is shared by every entity kind,
/// so ids are unique across kinds as well as within one. It never resets.
pub struct IdGen {
    counter: AtomicU64,
}

impl IdGen {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    pub fn next(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}_{n}")
    }
}

pub struct MarketStore {
    ids: IdGen,
    // Insertion-ordered, so the stable newest-first sort keeps records with
    // equal timestamps in the order they were created.
    jobs: RwLock<Vec<Job>>,
    offers: RwLock<Vec<Offer>>,
}

impl MarketStore {
    pub fn new() -> Self {
        Self {
            ids: IdGen::new(),
            jobs: RwLock::new(Vec::new()),
            offers: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert_job(&self, input: CreateJobInput, actor: &str) -> Job {
        let id = self.ids.next("job");
        let job = Job::create(id, input, actor, OffsetDateTime::now_utc());
        self.jobs.write().await.push(job.clone());
        job
    }

    pub async fn list_jobs(&self, filter: &JobFilter) -> Vec<Job> {
        let jobs = self.jobs.read().await;
        let mut out: Vec<Job> = jobs.iter().filter(|j| filter.matches(j)).cloned().collect();
        sort_newest_first(&mut out, |j| j.created_at);
        out
    }

    /// Merges a pre-validated patch under the write lock, so the read of the
    /// current record and the write of the merged one cannot interleave with
    /// another update. An unknown id leaves the store untouched.
    pub async fn patch_job(&self, id: &str, patch: JobPatch) -> Result<Job, StoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("job {id}")))?;
        job.apply_patch(patch, OffsetDateTime::now_utc());
        Ok(job.clone())
    }

    pub async fn job_exists(&self, id: &str) -> bool {
        self.jobs.read().await.iter().any(|j| j.id == id)
    }

    pub async fn insert_offer(&self, input: CreateOfferInput, actor: &str) -> Offer {
        let id = self.ids.next("offer");
        let offer = Offer::create(id, input, actor, OffsetDateTime::now_utc());
        self.offers.write().await.push(offer.clone());
        offer
    }

    pub async fn list_offers(&self, filter: &OfferFilter) -> Vec<Offer> {
        let offers = self.offers.read().await;
        let mut out: Vec<Offer> = offers
            .iter()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect();
        sort_newest_first(&mut out, |o| o.created_at);
        out
    }
}

fn sort_newest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> OffsetDateTime) {
    // Stable sort: records with equal timestamps keep their existing order.
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::model::JobStatus;
    use serde_json::json;

    fn job_input(value: serde_json::Value) -> CreateJobInput {
        serde_json::from_value(value).expect("valid job payload")
    }

    fn offer_input(value: serde_json::Value) -> CreateOfferInput {
        serde_json::from_value(value).expect("valid offer payload")
    }

    #[test]
    fn ids_are_distinct_across_kinds() {
        let ids = IdGen::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            assert!(seen.insert(ids.next("job")));
            assert!(seen.insert(ids.next("offer")));
        }
        assert!(seen.contains("job_1"));
        assert!(seen.contains("offer_2"));
    }

    #[tokio::test]
    async fn insert_assigns_id_and_matching_timestamps() {
        let store = MarketStore::new();
        let job = store
            .insert_job(job_input(json!({ "title": "T", "category": "C" })), "u1")
            .await;
        assert_eq!(job.id, "job_1");
        assert_eq!(job.created_at, job.updated_at);
    }

    #[tokio::test]
    async fn empty_patch_touches_only_updated_at() {
        let store = MarketStore::new();
        let before = store
            .insert_job(job_input(json!({ "title": "T", "category": "C" })), "u1")
            .await;

        let after = store.patch_job(&before.id, JobPatch::default()).await.unwrap();
        assert!(after.updated_at >= before.updated_at);

        let mut expected = before.clone();
        expected.updated_at = after.updated_at;
        assert_eq!(after, expected);
    }

    #[tokio::test]
    async fn patch_of_missing_id_leaves_store_unchanged() {
        let store = MarketStore::new();
        store
            .insert_job(job_input(json!({ "title": "T", "category": "C" })), "u1")
            .await;
        let before = store.list_jobs(&JobFilter::default()).await;

        let patch: JobPatch = serde_json::from_value(json!({ "title": "new" })).unwrap();
        let err = store.patch_job("job_404", patch).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        assert_eq!(store.list_jobs(&JobFilter::default()).await, before);
    }

    #[tokio::test]
    async fn patch_merges_supplied_fields() {
        let store = MarketStore::new();
        let job = store
            .insert_job(job_input(json!({ "title": "T", "category": "C" })), "u1")
            .await;

        let patch: JobPatch = serde_json::from_value(json!({
            "status": "IN_PROGRESS",
            "claimed_by_id": "u2",
        }))
        .unwrap();
        let updated = store.patch_job(&job.id, patch).await.unwrap();

        assert_eq!(updated.status, JobStatus::InProgress);
        assert_eq!(updated.claimed_by_id.as_deref(), Some("u2"));
        assert_eq!(updated.title, "T");
        assert_eq!(updated.created_at, job.created_at);
    }

    #[tokio::test]
    async fn filters_are_conjunctive() {
        let store = MarketStore::new();
        store
            .insert_job(
                job_input(json!({ "title": "a", "category": "C", "posted_by_id": "u1" })),
                "x",
            )
            .await;
        store
            .insert_job(
                job_input(json!({ "title": "b", "category": "C", "posted_by_id": "u2" })),
                "x",
            )
            .await;

        let both = store
            .list_jobs(&JobFilter {
                status: Some(JobStatus::Open),
                posted_by_id: Some("u1".into()),
                claimed_by_id: None,
            })
            .await;
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "a");

        let none = store
            .list_jobs(&JobFilter {
                status: Some(JobStatus::Completed),
                posted_by_id: Some("u1".into()),
                claimed_by_id: None,
            })
            .await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let store = MarketStore::new();
        for title in ["first", "second", "third"] {
            store
                .insert_job(job_input(json!({ "title": title, "category": "C" })), "u1")
                .await;
        }
        let jobs = store.list_jobs(&JobFilter::default()).await;
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[test]
    fn sort_keeps_insertion_order_for_equal_timestamps() {
        use time::macros::datetime;

        let now = datetime!(2025-06-01 12:00:00 UTC);
        let make = |id: &str, at| {
            Job::create(
                id.into(),
                serde_json::from_value(json!({ "title": id, "category": "C" })).unwrap(),
                "u1",
                at,
            )
        };

        let mut jobs = vec![
            make("job_1", now),
            make("job_2", now),
            make("job_3", datetime!(2025-06-01 13:00:00 UTC)),
        ];
        sort_newest_first(&mut jobs, |j| j.created_at);
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["job_3", "job_1", "job_2"]);
    }

    #[tokio::test]
    async fn offers_store_alongside_jobs() {
        let store = MarketStore::new();
        let job = store
            .insert_job(job_input(json!({ "title": "T", "category": "C" })), "u1")
            .await;
        let offer = store
            .insert_offer(
                offer_input(json!({ "job_id": job.id, "offered_by_id": "u2" })),
                "x",
            )
            .await;
        assert_eq!(offer.id, "offer_2");
        assert!(store.job_exists(&job.id).await);
        assert!(!store.job_exists(&offer.id).await);

        let for_job = store
            .list_offers(&OfferFilter {
                job_id: Some(job.id.clone()),
                offered_by_id: None,
                status: None,
            })
            .await;
        assert_eq!(for_job.len(), 1);
    }
}
