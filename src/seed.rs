// src/seed.rs
//
// Synthetic listing generation for seeding and tests. Every draw funnels
// through a caller-supplied RNG so fixtures are reproducible with a seeded
// StdRng.

use crate::domain::logic::slugify;
use crate::domain::property::{ListingType, PropertyRecord, PropertyStatus, PropertyType};
use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: [&str; 8] = [
    "Modern",
    "Luxury",
    "Spacious",
    "Elegant",
    "Premium",
    "Exclusive",
    "Beautiful",
    "High-End",
];

const COMMON_FEATURES: [&str; 7] = [
    "Central Heating",
    "Split A/C",
    "Balcony",
    "Parking",
    "Security System",
    "Water Tank",
    "Solar Water Heater",
];

const FIRST_NAMES: [&str; 10] = [
    "Omar", "Layla", "Khaled", "Rania", "Samir", "Dana", "Yousef", "Noor", "Tariq", "Hala",
];

const LAST_NAMES: [&str; 8] = [
    "Haddad", "Nasser", "Khoury", "Masri", "Qasem", "Barakat", "Shaheen", "Awad",
];

const STREETS: [&str; 8] = [
    "Zahran Street",
    "Al Kindi Street",
    "Rainbow Street",
    "Queen Rania Street",
    "Wakalat Street",
    "Abdullah Ghosheh Street",
    "Al Shareef Naser Street",
    "Ibn Khaldoun Street",
];

const EMAIL_DOMAINS: [&str; 3] = ["gmail.com", "outlook.com", "yahoo.com"];

/// Monthly rent range in JOD, applied to every rent listing regardless of
/// property type.
const RENT_RANGE: (i64, i64) = (250, 5000);

/// Amman district with the coordinate box plausible listings fall into.
pub(crate) struct District {
    pub(crate) name: &'static str,
    pub(crate) lat: (f64, f64),
    pub(crate) lon: (f64, f64),
}

pub(crate) static DISTRICTS: [District; 10] = [
    District { name: "Abdoun", lat: (31.946, 31.950), lon: (35.850, 35.860) },
    District { name: "Jabal Amman", lat: (31.949, 31.955), lon: (35.910, 35.920) },
    District { name: "Jabal Al Lweibdeh", lat: (31.958, 31.963), lon: (35.910, 35.915) },
    District { name: "Khalda", lat: (31.995, 32.002), lon: (35.830, 35.840) },
    District { name: "Sweifieh", lat: (31.956, 31.961), lon: (35.860, 35.870) },
    District { name: "Dabouq", lat: (32.014, 32.019), lon: (35.810, 35.820) },
    District { name: "Shmeisani", lat: (31.982, 31.987), lon: (35.900, 35.910) },
    District { name: "Mecca Street", lat: (31.970, 31.979), lon: (35.850, 35.870) },
    District { name: "Al Rabiah", lat: (31.974, 31.978), lon: (35.880, 35.900) },
    District { name: "Al Jubeiha", lat: (32.024, 32.028), lon: (35.850, 35.860) },
];

// Unknown districts draw from a box wide enough to cover all of Amman.
pub(crate) static FALLBACK_DISTRICT: District = District {
    name: "Amman",
    lat: (31.9, 32.05),
    lon: (35.80, 35.95),
};

pub(crate) fn district_bounds(city: &str) -> &'static District {
    DISTRICTS
        .iter()
        .find(|d| d.name == city)
        .unwrap_or(&FALLBACK_DISTRICT)
}

/// Produces internally consistent `PropertyRecord` candidates for seeding.
///
/// The base draw correlates price with type and listing type, coordinates
/// with the chosen district, and the feature pool with the property type.
/// The named variants are composable in any order:
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use property_catalog::seed::PropertySampleGenerator;
///
/// let mut gen = PropertySampleGenerator::new(StdRng::seed_from_u64(7))
///     .featured()
///     .for_rent();
/// let listing = gen.generate();
/// assert!(listing.is_featured);
/// ```
pub struct PropertySampleGenerator<R: Rng> {
    rng: R,
    force_featured: bool,
    force_sold: bool,
    force_rent: bool,
}

impl PropertySampleGenerator<OsRng> {
    /// Generator backed by the OS RNG, for ad-hoc seeding runs.
    pub fn with_os_rng() -> Self {
        Self::new(OsRng)
    }
}

impl<R: Rng> PropertySampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            force_featured: false,
            force_sold: false,
            force_rent: false,
        }
    }

    /// Every generated listing is promoted, with an expiry in the future.
    pub fn featured(mut self) -> Self {
        self.force_featured = true;
        self
    }

    /// Every generated listing is already sold.
    pub fn sold(mut self) -> Self {
        self.force_sold = true;
        self
    }

    /// Every generated listing is a rental, priced from the rent range.
    pub fn for_rent(mut self) -> Self {
        self.force_rent = true;
        self
    }

    /// Draws one listing. Never fails and performs no I/O; persisting the
    /// result is the caller's concern.
    pub fn generate(&mut self) -> PropertyRecord {
        let rng = &mut self.rng;
        let now = Utc::now();

        let property_type = *pick(rng, &PropertyType::ALL);
        let listing_type = *pick(rng, &ListingType::ALL);
        let status = *pick(rng, &PropertyStatus::ALL);
        let is_land = property_type == PropertyType::Land;

        let district = pick(rng, &DISTRICTS);
        let city = district.name.to_string();
        let latitude = round8(rng.gen_range(district.lat.0..district.lat.1));
        let longitude = round8(rng.gen_range(district.lon.0..district.lon.1));

        let price = match listing_type {
            ListingType::Rent => rent_price(rng),
            ListingType::Sale => sale_price(rng, property_type),
        };

        let title = generate_title(rng, property_type, &city);
        let description = type_blurb(property_type).to_string();

        let contact_first = *pick(rng, &FIRST_NAMES);
        let contact_last = *pick(rng, &LAST_NAMES);

        let mut property = PropertyRecord {
            slug: slugify(&title),
            meta_title: format!("{title} - Real Estate in Amman"),
            meta_description: truncate_blurb(&description, 155),
            title,
            description,
            property_type,
            listing_type,
            status,
            is_active: rng.gen_bool(0.95),
            price,
            address: format!("{} {}", rng.gen_range(1..=200), pick(rng, &STREETS)),
            city,
            state: "Amman".to_string(),
            country: "Jordan".to_string(),
            postal_code: if rng.gen_bool(0.5) {
                Some(format!("{}", rng.gen_range(11100..11999)))
            } else {
                None
            },
            latitude: Some(latitude),
            longitude: Some(longitude),
            bedrooms: if is_land { None } else { Some(rng.gen_range(1..=6)) },
            bathrooms: if is_land { None } else { Some(rng.gen_range(1..=4)) },
            total_area: rng.gen_range(80..=1500) as f64,
            built_year: if is_land { None } else { Some(rng.gen_range(1980..=2025)) },
            furnished: rng.gen_bool(0.4),
            parking: rng.gen_bool(0.8),
            parking_spaces: if rng.gen_bool(0.8) { Some(rng.gen_range(1..=3)) } else { None },
            features: generate_features(rng, property_type),
            // Images come from a separate upload step, never from seeding.
            images: Vec::new(),
            is_featured: rng.gen_bool(0.2),
            featured_until: if rng.gen_bool(0.2) {
                Some(now + Duration::days(rng.gen_range(1..=90)))
            } else {
                None
            },
            contact_name: format!("{contact_first} {contact_last}"),
            contact_phone: format!(
                "+962 7{} {:03} {:04}",
                rng.gen_range(7..=9),
                rng.gen_range(100..1000),
                rng.gen_range(0..10000)
            ),
            contact_email: format!(
                "{}.{}@{}",
                contact_first.to_lowercase(),
                contact_last.to_lowercase(),
                pick(rng, &EMAIL_DOMAINS)
            ),
            ..Default::default()
        };

        if self.force_rent {
            property.listing_type = ListingType::Rent;
            property.price = rent_price(&mut self.rng);
        }
        if self.force_sold {
            property.status = PropertyStatus::Sold;
        }
        if self.force_featured {
            property.is_featured = true;
            property.featured_until =
                Some(now + Duration::days(self.rng.gen_range(1..=180)));
        }

        property
    }
}

fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

fn rent_price<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(RENT_RANGE.0..=RENT_RANGE.1) as f64
}

/// Sale price range in JOD by property type, reflecting the Amman market.
fn sale_price<R: Rng>(rng: &mut R, property_type: PropertyType) -> f64 {
    let (min, max) = match property_type {
        PropertyType::Land => (100_000, 1_000_000),
        PropertyType::Apartment => (45_000, 250_000),
        PropertyType::House => (120_000, 800_000),
        PropertyType::Villa => (400_000, 2_500_000),
        PropertyType::Commercial => (150_000, 1_500_000),
        _ => (70_000, 500_000),
    };
    rng.gen_range(min..=max) as f64
}

fn generate_title<R: Rng>(rng: &mut R, property_type: PropertyType, city: &str) -> String {
    // Land gets a fixed phrasing; everything else takes a random adjective.
    if property_type == PropertyType::Land {
        return format!("Prime Land in {city}");
    }
    let adjective = pick(rng, &ADJECTIVES);
    let noun = match property_type {
        PropertyType::Commercial => "Commercial Property",
        other => other.label(),
    };
    format!("{adjective} {noun} in {city}")
}

fn type_blurb(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::House => {
            "A beautiful home offering spacious living areas, modern finishes, and an excellent location near top schools and amenities."
        }
        PropertyType::Apartment => {
            "A stylish apartment with contemporary design, a secure building, and close proximity to shopping centers and cafes."
        }
        PropertyType::Villa => {
            "A luxurious villa offering privacy, premium architecture, and high-end facilities in one of Amman's elite neighborhoods."
        }
        PropertyType::Condo => {
            "A modern condo with excellent building amenities and a prime location in Amman."
        }
        PropertyType::Townhouse => {
            "A modern townhouse that offers comfort, privacy, and community living."
        }
        PropertyType::Land => {
            "Prime investment land suitable for residential or commercial development."
        }
        PropertyType::Commercial => {
            "A commercial space ideal for offices, clinics, or retail with excellent visibility."
        }
    }
}

fn type_features(property_type: PropertyType) -> &'static [&'static str] {
    match property_type {
        PropertyType::House | PropertyType::Villa => &[
            "Garden",
            "Maid Room",
            "Laundry Room",
            "Storage Room",
            "Private Entrance",
        ],
        PropertyType::Apartment | PropertyType::Condo => {
            &["Elevator", "Shared Gym", "Shared Pool", "Generator"]
        }
        PropertyType::Townhouse => &["Private Terrace", "Garage", "Small Garden"],
        PropertyType::Commercial => &[
            "Reception Area",
            "Conference Room",
            "Central AC",
            "Backup Generator",
        ],
        PropertyType::Land => &[
            "Main Road Access",
            "Zoned for Building",
            "Registered Title Deed",
        ],
    }
}

/// 3-7 features drawn from the union of the common pool and the
/// type-specific pool, without repeats.
fn generate_features<R: Rng>(rng: &mut R, property_type: PropertyType) -> Vec<String> {
    let mut pool: Vec<&str> = COMMON_FEATURES.to_vec();
    pool.extend_from_slice(type_features(property_type));

    let count = rng.gen_range(3..=7);
    pool.choose_multiple(rng, count)
        .map(|f| f.to_string())
        .collect()
}

/// Caps a blurb at `limit` characters, marking the cut with an ellipsis
/// the way meta descriptions are usually clipped.
fn truncate_blurb(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let clipped: String = text.chars().take(limit).collect();
    format!("{}...", clipped.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn district_lookup_falls_back_to_the_wide_box() {
        let known = district_bounds("Abdoun");
        assert_eq!(known.name, "Abdoun");

        let unknown = district_bounds("Atlantis");
        assert_eq!(unknown.name, "Amman");
        for d in &DISTRICTS {
            assert!(unknown.lat.0 <= d.lat.0 && d.lat.1 <= unknown.lat.1);
            assert!(unknown.lon.0 <= d.lon.0 && d.lon.1 <= unknown.lon.1);
        }
    }

    #[test]
    fn truncate_blurb_passes_short_text_through() {
        assert_eq!(truncate_blurb("short", 155), "short");
    }

    #[test]
    fn truncate_blurb_clips_long_text_with_ellipsis() {
        let long = "x".repeat(200);
        let clipped = truncate_blurb(&long, 155);
        assert_eq!(clipped.chars().count(), 158);
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn titles_follow_the_type_phrasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let title = generate_title(&mut rng, PropertyType::Land, "Khalda");
        assert_eq!(title, "Prime Land in Khalda");

        let title = generate_title(&mut rng, PropertyType::Commercial, "Sweifieh");
        assert!(title.ends_with("Commercial Property in Sweifieh"));
    }

    #[test]
    fn feature_draw_stays_within_bounds_and_unique() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let features = generate_features(&mut rng, PropertyType::Villa);
            assert!((3..=7).contains(&features.len()));
            let mut deduped = features.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), features.len());
        }
    }
}
