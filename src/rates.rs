//! Published standard rates for catalogued service types.

use std::collections::HashMap;

use axum::{routing::get, Json, Router};
use lazy_static::lazy_static;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct StandardRate {
    pub name: &'static str,
    pub base_rate: f64,
}

lazy_static! {
    static ref STANDARD_RATES: HashMap<&'static str, StandardRate> = {
        let mut m = HashMap::new();
        m.insert(
            "BAMBU_X1C",
            StandardRate {
                name: "Bambu Lab X1 Carbon",
                base_rate: 5.0,
            },
        );
        m.insert(
            "H2D",
            StandardRate {
                name: "Bambu Lab H2D",
                base_rate: 7.0,
            },
        );
        m.insert(
            "LASER",
            StandardRate {
                name: "Laser Cutting",
                base_rate: 20.0,
            },
        );
        m
    };
}

/// Looks up the published rate for a service-type code. Unknown codes are not
/// an error; callers fall back to whatever budget the client supplied.
pub fn resolve(service_type: &str) -> Option<&'static StandardRate> {
    STANDARD_RATES.get(service_type)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/standard-rates", get(standard_rates))
}

async fn standard_rates() -> Json<&'static HashMap<&'static str, StandardRate>> {
    Json(&*STANDARD_RATES)
}
