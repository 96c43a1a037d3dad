// src/domain/fields.rs

use serde::{Serialize, Serializer};

/// Column headers a listing upload must declare, in this exact order.
pub const CANONICAL_HEADERS: [&str; 21] = {
    let mut headers = [""; 21];
    let mut i = 0;
    while i < ListingField::ALL.len() {
        headers[i] = ListingField::ALL[i].header();
        i += 1;
    }
    headers
};

/// Every column a listing sheet can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListingField {
    Id,
    Name,
    RentPrice,
    SalePrice,
    Bedroom,
    Bath,
    Size,
    Floor,
    AgentPost,
    AcceptAgent,
    Title,
    Description,
    Photo,
    Aircon,
    BathTub,
    ElectricStove,
    Furniture,
    GasStove,
    Refrigerator,
    WashingMachine,
    WaterHeater,
}

/// How a column's raw cell text is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Number,
    Boolean,
    Text,
}

impl ListingField {
    /// Same order as `CANONICAL_HEADERS`.
    pub const ALL: [ListingField; 21] = [
        ListingField::Id,
        ListingField::Name,
        ListingField::RentPrice,
        ListingField::SalePrice,
        ListingField::Bedroom,
        ListingField::Bath,
        ListingField::Size,
        ListingField::Floor,
        ListingField::AgentPost,
        ListingField::AcceptAgent,
        ListingField::Title,
        ListingField::Description,
        ListingField::Photo,
        ListingField::Aircon,
        ListingField::BathTub,
        ListingField::ElectricStove,
        ListingField::Furniture,
        ListingField::GasStove,
        ListingField::Refrigerator,
        ListingField::WashingMachine,
        ListingField::WaterHeater,
    ];

    pub const fn header(self) -> &'static str {
        match self {
            ListingField::Id => "id",
            ListingField::Name => "condo_name-EN",
            ListingField::RentPrice => "rent_price",
            ListingField::SalePrice => "sale_price",
            ListingField::Bedroom => "bedroom",
            ListingField::Bath => "bath",
            ListingField::Size => "size (sq.m)",
            ListingField::Floor => "floor",
            ListingField::AgentPost => "agent_post",
            ListingField::AcceptAgent => "accept_agent",
            ListingField::Title => "title",
            ListingField::Description => "description",
            ListingField::Photo => "photo1",
            ListingField::Aircon => "Aircon",
            ListingField::BathTub => "Bath tub",
            ListingField::ElectricStove => "Electric stove",
            ListingField::Furniture => "Furniture",
            ListingField::GasStove => "Gas stove",
            ListingField::Refrigerator => "Refrigerator",
            ListingField::WashingMachine => "Washing machine",
            ListingField::WaterHeater => "Water heater",
        }
    }

    /// Unknown headers map to `None` and are ignored by the record builder.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.header() == header)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ListingField::Id => FieldKind::Integer,
            ListingField::RentPrice
            | ListingField::SalePrice
            | ListingField::Bedroom
            | ListingField::Bath
            | ListingField::Size
            | ListingField::Floor => FieldKind::Number,
            ListingField::Name
            | ListingField::Title
            | ListingField::Description
            | ListingField::Photo => FieldKind::Text,
            _ => FieldKind::Boolean,
        }
    }
}

/// Serializes as its column header.
impl Serialize for ListingField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.header())
    }
}

/// Amenity flags in display order. Each one is labelled with its column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Aircon,
    BathTub,
    ElectricStove,
    Furniture,
    GasStove,
    Refrigerator,
    WashingMachine,
    WaterHeater,
}

impl Amenity {
    pub const ALL: [Amenity; 8] = [
        Amenity::Aircon,
        Amenity::BathTub,
        Amenity::ElectricStove,
        Amenity::Furniture,
        Amenity::GasStove,
        Amenity::Refrigerator,
        Amenity::WashingMachine,
        Amenity::WaterHeater,
    ];

    pub fn field(self) -> ListingField {
        match self {
            Amenity::Aircon => ListingField::Aircon,
            Amenity::BathTub => ListingField::BathTub,
            Amenity::ElectricStove => ListingField::ElectricStove,
            Amenity::Furniture => ListingField::Furniture,
            Amenity::GasStove => ListingField::GasStove,
            Amenity::Refrigerator => ListingField::Refrigerator,
            Amenity::WashingMachine => ListingField::WashingMachine,
            Amenity::WaterHeater => ListingField::WaterHeater,
        }
    }

    pub fn label(self) -> &'static str {
        self.field().header()
    }
}
