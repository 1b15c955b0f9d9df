// src/domain/query.rs

use crate::domain::property::{ListingType, PropertyRecord, PropertyType};
use chrono::{DateTime, Utc};

/// Composable filter over a collection of listings.
///
/// Each scope narrows the filter; chained scopes combine as a logical AND.
/// The filter is evaluated in memory against loaded records, so every scope
/// can be tested on its own against a fixed record set.
///
/// ```
/// use property_catalog::domain::query::PropertyFilter;
///
/// let filter = PropertyFilter::new().for_rent().price_between(500.0, 1500.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    available: bool,
    listing_type: Option<ListingType>,
    featured: bool,
    city: Option<String>,
    price_range: Option<(f64, f64)>,
    property_type: Option<PropertyType>,
    min_bedrooms: Option<i64>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// status == available AND is_active
    pub fn available(mut self) -> Self {
        self.available = true;
        self
    }

    pub fn for_sale(mut self) -> Self {
        self.listing_type = Some(ListingType::Sale);
        self
    }

    pub fn for_rent(mut self) -> Self {
        self.listing_type = Some(ListingType::Rent);
        self
    }

    /// Promoted listings whose promotion has not lapsed.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Case-insensitive substring match on the city name.
    pub fn in_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_lowercase());
        self
    }

    /// Inclusive price range.
    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    pub fn by_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    /// At least `n` bedrooms. Listings without a bedroom count (land)
    /// never match.
    pub fn with_bedrooms(mut self, n: i64) -> Self {
        self.min_bedrooms = Some(n);
        self
    }

    pub fn matches(&self, property: &PropertyRecord) -> bool {
        self.matches_at(property, Utc::now())
    }

    /// Evaluates every accumulated predicate against one record. The
    /// featured-expiry comparison uses the supplied clock value.
    pub fn matches_at(&self, property: &PropertyRecord, now: DateTime<Utc>) -> bool {
        if self.available && !property.is_available() {
            return false;
        }
        if let Some(listing_type) = self.listing_type {
            if property.listing_type != listing_type {
                return false;
            }
        }
        if self.featured && !property.is_currently_featured_at(now) {
            return false;
        }
        if let Some(city) = &self.city {
            if !property.city.to_lowercase().contains(city.as_str()) {
                return false;
            }
        }
        if let Some((min, max)) = self.price_range {
            if property.price < min || property.price > max {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if property.property_type != property_type {
                return false;
            }
        }
        if let Some(min_bedrooms) = self.min_bedrooms {
            match property.bedrooms {
                Some(bedrooms) if bedrooms >= min_bedrooms => {}
                _ => return false,
            }
        }
        true
    }

    /// Filters a slice of records, preserving their order.
    pub fn apply<'a>(&self, properties: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        let now = Utc::now();
        properties
            .iter()
            .filter(|p| self.matches_at(p, now))
            .collect()
    }
}
