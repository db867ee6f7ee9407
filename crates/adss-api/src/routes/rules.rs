use axum::Json;

use adss_rules::cutoffs::{self, Cutoff};
use adss_rules::diagnosis::{self, RuleDescription};

pub async fn list_rules() -> Json<Vec<RuleDescription>> {
    Json(diagnosis::catalogue())
}

pub async fn list_cutoffs() -> Json<Vec<Cutoff>> {
    Json(cutoffs::table())
}
