// src/domain/validation.rs

use crate::domain::fields::ListingField;
use crate::domain::listing::RawListingRecord;

/// Columns every publishable listing must fill in.
pub const REQUIRED_FIELDS: &[ListingField] = &[
    ListingField::Name,
    ListingField::Bedroom,
    ListingField::Bath,
    ListingField::Size,
    ListingField::Floor,
    ListingField::Title,
    ListingField::Description,
];

/// At least one of these must be filled in.
pub const PRICE_FIELDS: &[ListingField] = &[ListingField::RentPrice, ListingField::SalePrice];

/// Decides whether a row can be published.
///
/// A row passes when at least one of `price_fields` holds a value and every
/// one of `required_fields` does. An empty `price_fields` set never passes.
pub fn is_valid(
    record: &RawListingRecord,
    required_fields: &[ListingField],
    price_fields: &[ListingField],
) -> bool {
    if price_fields.iter().all(|f| !record.is_present(*f)) {
        return false;
    }

    required_fields.iter().all(|f| record.is_present(*f))
}

impl RawListingRecord {
    pub fn is_publishable(&self) -> bool {
        is_valid(self, REQUIRED_FIELDS, PRICE_FIELDS)
    }
}
