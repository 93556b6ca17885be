//! Sample jobs inserted at startup so the frontend has something to show.

use crate::auth::DEMO_USER_ID;
use crate::jobs::dto::CreateJobInput;
use crate::jobs::model::PaymentType;
use crate::store::MarketStore;

pub async fn seed_demo_jobs(store: &MarketStore) {
    let samples = vec![
        CreateJobInput {
            title: "Custom Phone Stand with Wireless Charging".into(),
            category: "3D_PRINTING".into(),
            description: "Need a custom phone stand that supports wireless charging and works \
                          in both portrait and landscape orientations."
                .into(),
            budget_usd: Some(35.0),
            payment_type: PaymentType::Monetary,
            in_kind_description: None,
            deadline_iso: None,
            posted_by_id: Some("demo_user_456".into()),
            posted_by_email: Some("creator@example.com".into()),
            service_type: Some("BAMBU_X1C".into()),
            is_standard_rate: true,
        },
        CreateJobInput {
            title: "Arduino Project Consultation".into(),
            category: "CONSULTATION".into(),
            description: "Looking for help debugging my smart home sensor project. Happy to \
                          trade some 3D printing services in return."
                .into(),
            budget_usd: Some(25.0),
            payment_type: PaymentType::Hybrid,
            in_kind_description: Some("3D printing services (up to $15 value)".into()),
            deadline_iso: None,
            posted_by_id: Some("demo_user_789".into()),
            posted_by_email: Some("maker@example.com".into()),
            service_type: None,
            is_standard_rate: false,
        },
        CreateJobInput {
            title: "Wooden Box Laser Cutting".into(),
            category: "LASER_CUTTING".into(),
            description: "Need precision wooden box with finger joints. Will provide materials."
                .into(),
            budget_usd: None,
            payment_type: PaymentType::InKind,
            in_kind_description: Some("High-quality plywood materials + coffee for the maker".into()),
            deadline_iso: None,
            posted_by_id: Some("demo_user_101".into()),
            posted_by_email: Some("woodworker@example.com".into()),
            service_type: Some("LASER".into()),
            is_standard_rate: true,
        },
    ];

    for sample in samples {
        let job = store.insert_job(sample, DEMO_USER_ID).await;
        tracing::debug!(id = %job.id, title = %job.title, "seeded demo job");
    }
}
