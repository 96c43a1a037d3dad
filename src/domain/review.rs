// src/domain/review.rs

use crate::domain::fields::ListingField;
use crate::domain::labels::{derive_labels, DerivedLabels};
use crate::domain::listing::RawListingRecord;
use serde::Serialize;

pub const NOT_FOUND: &str = "not found";
pub const STUDIO: &str = "Studio";

/// One row of the review table.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRow {
    /// 1-based, in upload order.
    pub number: usize,
    pub valid: bool,
    pub labels: DerivedLabels,
    pub record: RawListingRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub file_name: String,
    pub total: usize,
    pub publishable: usize,
    pub flagged: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub summary: ReviewSummary,
    pub rows: Vec<ReviewRow>,
}

/// Numbers every record, runs the publish check and derives its tags.
pub fn build_review(file_name: &str, records: Vec<RawListingRecord>) -> Review {
    let rows: Vec<ReviewRow> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ReviewRow {
            number: i + 1,
            valid: record.is_publishable(),
            labels: derive_labels(&record),
            record,
        })
        .collect();

    let publishable = rows.iter().filter(|r| r.valid).count();

    Review {
        summary: ReviewSummary {
            file_name: file_name.to_string(),
            total: rows.len(),
            publishable,
            flagged: rows.len() - publishable,
        },
        rows,
    }
}

/// Review table columns, left to right (after the row number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewColumn {
    Name,
    RentPrice,
    SalePrice,
    Bedroom,
    Bathroom,
    Size,
    Floor,
    Status,
    Photo,
    Title,
    Description,
    Amenities,
}

impl ReviewColumn {
    pub const ALL: [ReviewColumn; 12] = [
        ReviewColumn::Name,
        ReviewColumn::RentPrice,
        ReviewColumn::SalePrice,
        ReviewColumn::Bedroom,
        ReviewColumn::Bathroom,
        ReviewColumn::Size,
        ReviewColumn::Floor,
        ReviewColumn::Status,
        ReviewColumn::Photo,
        ReviewColumn::Title,
        ReviewColumn::Description,
        ReviewColumn::Amenities,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReviewColumn::Name => "CONDO NAME",
            ReviewColumn::RentPrice => "RENT PRICE (Baht)",
            ReviewColumn::SalePrice => "SELL PRICE (Baht)",
            ReviewColumn::Bedroom => "BEDROOM",
            ReviewColumn::Bathroom => "BATHROOM",
            ReviewColumn::Size => "SIZE (sqm.)",
            ReviewColumn::Floor => "FLOOR",
            ReviewColumn::Status => "STATUS",
            ReviewColumn::Photo => "PHOTO",
            ReviewColumn::Title => "TITLE",
            ReviewColumn::Description => "DESCRIPTION",
            ReviewColumn::Amenities => "Amenities",
        }
    }
}

/// What a review cell shows, before it is turned into HTML or a sheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellDisplay<'a> {
    Text(String),
    PerMonth(String),
    Tags(&'a [&'static str]),
    Image(&'a str),
    NotFound,
    Blank,
}

impl CellDisplay<'_> {
    pub fn plain_text(&self) -> String {
        match self {
            CellDisplay::Text(s) => s.clone(),
            CellDisplay::PerMonth(s) => format!("{s}/month"),
            CellDisplay::Tags(tags) => tags.join(", "),
            CellDisplay::Image(url) => url.to_string(),
            CellDisplay::NotFound => NOT_FOUND.to_string(),
            CellDisplay::Blank => String::new(),
        }
    }
}

impl ReviewRow {
    pub fn display(&self, column: ReviewColumn) -> CellDisplay<'_> {
        let record = &self.record;
        match column {
            ReviewColumn::Name => text_or_not_found(record, ListingField::Name),
            ReviewColumn::Title => text_or_not_found(record, ListingField::Title),
            ReviewColumn::Description => text_or_not_found(record, ListingField::Description),
            ReviewColumn::Bathroom => number_or_not_found(record, ListingField::Bath),
            ReviewColumn::Size => number_or_not_found(record, ListingField::Size),
            ReviewColumn::Floor => number_or_not_found(record, ListingField::Floor),
            ReviewColumn::Bedroom => match record.bedrooms {
                Some(v) if v == 0.0 => CellDisplay::Text(STUDIO.to_string()),
                _ => number_or_not_found(record, ListingField::Bedroom),
            },
            // A zero price is shown blank.
            ReviewColumn::RentPrice => match price_text(record, ListingField::RentPrice) {
                Some(text) => CellDisplay::PerMonth(text),
                None => CellDisplay::Blank,
            },
            ReviewColumn::SalePrice => match price_text(record, ListingField::SalePrice) {
                Some(text) => CellDisplay::Text(text),
                None => CellDisplay::Blank,
            },
            ReviewColumn::Status => CellDisplay::Tags(&self.labels.status),
            ReviewColumn::Amenities => CellDisplay::Tags(&self.labels.amenities),
            ReviewColumn::Photo => match record.photo_url.as_deref() {
                Some(url) => CellDisplay::Image(url),
                None => CellDisplay::Blank,
            },
        }
    }
}

fn text_or_not_found(record: &RawListingRecord, field: ListingField) -> CellDisplay<'static> {
    match record.text(field) {
        Some(s) => CellDisplay::Text(s.to_string()),
        None => CellDisplay::NotFound,
    }
}

fn number_or_not_found(record: &RawListingRecord, field: ListingField) -> CellDisplay<'static> {
    match (record.number(field), record.raw(field)) {
        (Some(v), _) => CellDisplay::Text(v.to_string()),
        (None, Some(raw)) => CellDisplay::Text(raw.to_string()),
        (None, None) => CellDisplay::NotFound,
    }
}

fn price_text(record: &RawListingRecord, field: ListingField) -> Option<String> {
    match (record.number(field), record.raw(field)) {
        (Some(v), _) if v != 0.0 => Some(v.to_string()),
        (Some(_), _) => None,
        (None, raw) => raw.map(str::to_string),
    }
}
