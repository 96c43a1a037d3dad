// src/domain/listing.rs

use crate::domain::fields::{Amenity, ListingField};
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of an uploaded listing sheet.
///
/// Every column is optional because the sheet is operator-supplied. A `None`
/// with no entry in `unparsed` means the cell was empty; a `Some(0.0)` or
/// `Some(false)` is a real value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawListingRecord {
    #[serde(rename = "id")]
    pub id: Option<i64>,
    #[serde(rename = "condo_name-EN")]
    pub name: Option<String>,
    pub rent_price: Option<f64>,
    pub sale_price: Option<f64>,
    #[serde(rename = "bedroom")]
    pub bedrooms: Option<f64>,
    #[serde(rename = "bath")]
    pub bathrooms: Option<f64>,
    #[serde(rename = "size (sq.m)")]
    pub size_sqm: Option<f64>,
    pub floor: Option<f64>,
    pub agent_post: Option<bool>,
    pub accept_agent: Option<bool>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "photo1")]
    pub photo_url: Option<String>,

    // Amenities
    #[serde(rename = "Aircon")]
    pub aircon: Option<bool>,
    #[serde(rename = "Bath tub")]
    pub bath_tub: Option<bool>,
    #[serde(rename = "Electric stove")]
    pub electric_stove: Option<bool>,
    #[serde(rename = "Furniture")]
    pub furniture: Option<bool>,
    #[serde(rename = "Gas stove")]
    pub gas_stove: Option<bool>,
    #[serde(rename = "Refrigerator")]
    pub refrigerator: Option<bool>,
    #[serde(rename = "Washing machine")]
    pub washing_machine: Option<bool>,
    #[serde(rename = "Water heater")]
    pub water_heater: Option<bool>,

    /// Filled-in cells that did not read as their column's type, kept as typed.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub unparsed: BTreeMap<ListingField, String>,
}

/// A typed cell value, already coerced to its column's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl RawListingRecord {
    /// True when the column holds a value. Zero, `false` and unparsed text
    /// all count as present.
    pub fn is_present(&self, field: ListingField) -> bool {
        if self.unparsed.contains_key(&field) {
            return true;
        }
        match field {
            ListingField::Id => self.id.is_some(),
            ListingField::Name => self.name.is_some(),
            ListingField::Title => self.title.is_some(),
            ListingField::Description => self.description.is_some(),
            ListingField::Photo => self.photo_url.is_some(),
            _ => self.number(field).is_some() || self.flag(field).is_some(),
        }
    }

    /// Numeric columns only; every other column reads as `None`.
    pub fn number(&self, field: ListingField) -> Option<f64> {
        match field {
            ListingField::RentPrice => self.rent_price,
            ListingField::SalePrice => self.sale_price,
            ListingField::Bedroom => self.bedrooms,
            ListingField::Bath => self.bathrooms,
            ListingField::Size => self.size_sqm,
            ListingField::Floor => self.floor,
            _ => None,
        }
    }

    /// Boolean columns only; every other column reads as `None`. Unparsed
    /// text in a boolean column reads as `true`.
    pub fn flag(&self, field: ListingField) -> Option<bool> {
        let typed = match field {
            ListingField::AgentPost => self.agent_post,
            ListingField::AcceptAgent => self.accept_agent,
            ListingField::Aircon => self.aircon,
            ListingField::BathTub => self.bath_tub,
            ListingField::ElectricStove => self.electric_stove,
            ListingField::Furniture => self.furniture,
            ListingField::GasStove => self.gas_stove,
            ListingField::Refrigerator => self.refrigerator,
            ListingField::WashingMachine => self.washing_machine,
            ListingField::WaterHeater => self.water_heater,
            _ => return None,
        };
        typed.or_else(|| self.raw(field).map(|_| true))
    }

    /// The cell text for a column whose value could not be typed.
    pub fn raw(&self, field: ListingField) -> Option<&str> {
        self.unparsed.get(&field).map(String::as_str)
    }

    /// Keeps a filled-in cell that does not fit its column's type.
    pub fn assign_raw(&mut self, field: ListingField, raw: String) {
        self.unparsed.insert(field, raw);
    }

    pub fn text(&self, field: ListingField) -> Option<&str> {
        match field {
            ListingField::Name => self.name.as_deref(),
            ListingField::Title => self.title.as_deref(),
            ListingField::Description => self.description.as_deref(),
            ListingField::Photo => self.photo_url.as_deref(),
            _ => None,
        }
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.flag(amenity.field()).unwrap_or(false)
    }

    /// Stores a coerced cell. Returns `false` if the value's kind does not
    /// fit the column, in which case the record is left unchanged.
    pub fn assign(&mut self, field: ListingField, value: CellValue) -> bool {
        match value {
            CellValue::Integer(v) if field == ListingField::Id => {
                self.id = Some(v);
                true
            }
            CellValue::Number(v) => match self.number_slot(field) {
                Some(slot) => {
                    *slot = Some(v);
                    true
                }
                None => false,
            },
            CellValue::Boolean(v) => match self.flag_slot(field) {
                Some(slot) => {
                    *slot = Some(v);
                    true
                }
                None => false,
            },
            CellValue::Text(v) => match self.text_slot(field) {
                Some(slot) => {
                    *slot = Some(v);
                    true
                }
                None => false,
            },
            CellValue::Integer(_) => false,
        }
    }

    fn number_slot(&mut self, field: ListingField) -> Option<&mut Option<f64>> {
        match field {
            ListingField::RentPrice => Some(&mut self.rent_price),
            ListingField::SalePrice => Some(&mut self.sale_price),
            ListingField::Bedroom => Some(&mut self.bedrooms),
            ListingField::Bath => Some(&mut self.bathrooms),
            ListingField::Size => Some(&mut self.size_sqm),
            ListingField::Floor => Some(&mut self.floor),
            _ => None,
        }
    }

    fn flag_slot(&mut self, field: ListingField) -> Option<&mut Option<bool>> {
        match field {
            ListingField::AgentPost => Some(&mut self.agent_post),
            ListingField::AcceptAgent => Some(&mut self.accept_agent),
            ListingField::Aircon => Some(&mut self.aircon),
            ListingField::BathTub => Some(&mut self.bath_tub),
            ListingField::ElectricStove => Some(&mut self.electric_stove),
            ListingField::Furniture => Some(&mut self.furniture),
            ListingField::GasStove => Some(&mut self.gas_stove),
            ListingField::Refrigerator => Some(&mut self.refrigerator),
            ListingField::WashingMachine => Some(&mut self.washing_machine),
            ListingField::WaterHeater => Some(&mut self.water_heater),
            _ => None,
        }
    }

    fn text_slot(&mut self, field: ListingField) -> Option<&mut Option<String>> {
        match field {
            ListingField::Name => Some(&mut self.name),
            ListingField::Title => Some(&mut self.title),
            ListingField::Description => Some(&mut self.description),
            ListingField::Photo => Some(&mut self.photo_url),
            _ => None,
        }
    }
}
