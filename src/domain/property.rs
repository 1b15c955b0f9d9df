// src/domain/property.rs

use crate::domain::logic::{group_thousands, join_address, slugify};
use crate::storage::ImageStorage;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of property a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Villa,
    Land,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 7] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Villa,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Villa => "Villa",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
        }
    }

    /// Glyph shown next to the type in listing views.
    pub fn icon(self) -> &'static str {
        match self {
            PropertyType::House => "🏠",
            PropertyType::Apartment => "🏢",
            PropertyType::Condo => "🏬",
            PropertyType::Townhouse => "🏘️",
            PropertyType::Villa => "🏡",
            PropertyType::Land => "🌍",
            PropertyType::Commercial => "🏢",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }
}

/// Whether the listing is offered for sale or for monthly rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub const ALL: [ListingType; 2] = [ListingType::Sale, ListingType::Rent];

    pub fn code(self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingType::Sale => "For Sale",
            ListingType::Rent => "For Rent",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }
}

/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Draft,
    Available,
    Pending,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 5] = [
        PropertyStatus::Draft,
        PropertyStatus::Available,
        PropertyStatus::Pending,
        PropertyStatus::Sold,
        PropertyStatus::Rented,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PropertyStatus::Draft => "draft",
            PropertyStatus::Available => "available",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::Draft => "Draft",
            PropertyStatus::Available => "Available",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Rented => "Rented",
        }
    }

    /// Semantic color tag used by listing badges.
    pub fn color(self) -> &'static str {
        match self {
            PropertyStatus::Available => "success",
            PropertyStatus::Sold => "danger",
            PropertyStatus::Rented => "warning",
            PropertyStatus::Pending => "info",
            PropertyStatus::Draft => "secondary",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

// Fixed code -> display-label tables exposed for UI dropdowns and validation.
pub const PROPERTY_TYPES: [(&str, &str); 7] = [
    ("house", "House"),
    ("apartment", "Apartment"),
    ("condo", "Condo"),
    ("townhouse", "Townhouse"),
    ("villa", "Villa"),
    ("land", "Land"),
    ("commercial", "Commercial"),
];

pub const LISTING_TYPES: [(&str, &str); 2] = [("sale", "For Sale"), ("rent", "For Rent")];

pub const STATUSES: [(&str, &str); 5] = [
    ("draft", "Draft"),
    ("available", "Available"),
    ("pending", "Pending"),
    ("sold", "Sold"),
    ("rented", "Rented"),
];

/// Badge color for a raw status code. Unknown codes render as "secondary"
/// rather than failing.
pub fn status_color(code: &str) -> &'static str {
    PropertyStatus::from_code(code)
        .map(PropertyStatus::color)
        .unwrap_or("secondary")
}

/// Glyph for a raw type code, with the house glyph as the fallback for
/// anything unrecognized.
pub fn type_icon(code: &str) -> &'static str {
    PropertyType::from_code(code)
        .map(PropertyType::icon)
        .unwrap_or("🏠")
}

/// A single catalog listing: one `PropertyRecord` per persisted row.
///
/// The record is a freestanding value; loading and saving go through the
/// persistence layer in `db::properties`, which also runs the slug hooks
/// before every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    // Identity. `slug` is the externally addressable key; `id` is the
    // surrogate row id, None until the first insert.
    pub id: Option<i64>,
    pub slug: String,

    // Descriptive
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,

    // Lifecycle
    pub status: PropertyStatus,
    pub is_active: bool,

    // Commercial
    pub price: f64,
    pub price_per_sqft: Option<f64>,

    // Location
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Physical
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub total_area: f64,
    pub built_year: Option<i64>,
    pub furnished: bool,
    pub parking: bool,
    pub parking_spaces: Option<i64>,

    // Collections
    pub features: Vec<String>,
    pub images: Vec<String>,

    // Promotion
    pub is_featured: bool,
    pub featured_until: Option<DateTime<Utc>>,

    // Contact
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,

    // SEO
    pub meta_title: String,
    pub meta_description: String,

    // Row bookkeeping, stamped by the save path.
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        PropertyRecord {
            id: None,
            slug: String::new(),
            title: String::new(),
            description: String::new(),
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            status: PropertyStatus::Draft,
            is_active: true,
            price: 0.0,
            price_per_sqft: None,
            address: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            postal_code: None,
            latitude: None,
            longitude: None,
            bedrooms: None,
            bathrooms: None,
            total_area: 0.0,
            built_year: None,
            furnished: false,
            parking: false,
            parking_spaces: None,
            features: Vec::new(),
            images: Vec::new(),
            is_featured: false,
            featured_until: None,
            contact_name: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl PropertyRecord {
    /// Derives the slug from the title when no slug has been set yet.
    /// Called by the save path on insert; edits to fields other than the
    /// title never touch an existing slug.
    pub fn ensure_slug(&mut self) {
        if self.slug.is_empty() {
            self.slug = slugify(&self.title);
        }
    }

    // --- Derived read-only attributes -----------------------------------

    /// "JOD 1,500,000" style price string, zero decimals.
    pub fn formatted_price(&self) -> String {
        format!("JOD {}", group_thousands(self.price))
    }

    /// Address components joined by ", " with empty parts skipped.
    pub fn full_address(&self) -> String {
        join_address(&[&self.address, &self.city, &self.state, &self.country])
    }

    /// First image path, if any images were uploaded.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Public URL of the main image, resolved through the storage
    /// collaborator. None when the listing has no images.
    pub fn image_url(&self, storage: &dyn ImageStorage) -> Option<String> {
        self.main_image().and_then(|path| storage.url(path))
    }

    pub fn status_color(&self) -> &'static str {
        self.status.color()
    }

    pub fn type_icon(&self) -> &'static str {
        self.property_type.icon()
    }

    // --- Predicates -----------------------------------------------------

    /// Whether the listing is currently promoted: the flag must be set and
    /// the expiry, when present, must still be in the future.
    pub fn is_currently_featured(&self) -> bool {
        self.is_currently_featured_at(Utc::now())
    }

    pub fn is_currently_featured_at(&self, now: DateTime<Utc>) -> bool {
        if !self.is_featured {
            return false;
        }
        match self.featured_until {
            None => true,
            Some(until) => until > now,
        }
    }

    /// Available for viewing: status says so and the listing is active.
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available && self.is_active
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    // --- In-memory mutators (persisting wrappers live in db::properties) -

    /// Recomputes `price_per_sqft` from price and area. Returns whether the
    /// value was updated; a non-positive area is a guarded no-op.
    pub fn recompute_price_per_sqft(&mut self) -> bool {
        if self.total_area > 0.0 {
            self.price_per_sqft = Some(self.price / self.total_area);
            true
        } else {
            false
        }
    }

    /// Appends a feature unless it is already present. Returns whether the
    /// list changed, so callers know if a save is needed.
    pub fn add_feature(&mut self, feature: &str) -> bool {
        if self.has_feature(feature) {
            return false;
        }
        self.features.push(feature.to_string());
        true
    }

    /// Removes every occurrence of a feature. Absent features are a no-op.
    /// Returns whether anything was removed.
    pub fn remove_feature(&mut self, feature: &str) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f != feature);
        self.features.len() != before
    }
}
