// src/domain/labels.rs

use crate::domain::fields::{Amenity, ListingField};
use crate::domain::listing::RawListingRecord;
use serde::Serialize;

pub const AGENT_POST_LABEL: &str = "Agent post";
/// "Accepts co-agent", as the listing team writes it.
pub const CO_AGENT_LABEL: &str = "รับ Co-Agent";

/// Display tags computed from a row's boolean columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedLabels {
    pub status: Vec<&'static str>,
    pub amenities: Vec<&'static str>,
}

/// Status tags come out agent-post first, co-agent second. Amenity tags follow
/// `Amenity::ALL`. A missing flag behaves like `false`.
pub fn derive_labels(record: &RawListingRecord) -> DerivedLabels {
    let mut status = Vec::with_capacity(2);
    if record.flag(ListingField::AgentPost) == Some(true) {
        status.push(AGENT_POST_LABEL);
    }
    if record.flag(ListingField::AcceptAgent) == Some(true) {
        status.push(CO_AGENT_LABEL);
    }

    let amenities = Amenity::ALL
        .into_iter()
        .filter(|a| record.has_amenity(*a))
        .map(Amenity::label)
        .collect();

    DerivedLabels { status, amenities }
}
