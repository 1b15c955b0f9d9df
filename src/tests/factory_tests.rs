use crate::domain::logic::slugify;
use crate::domain::property::{ListingType, PropertyStatus, PropertyType};
use crate::seed::{district_bounds, PropertySampleGenerator};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generated_records_are_internally_consistent() {
    let mut generator = PropertySampleGenerator::new(StdRng::seed_from_u64(2024));

    for _ in 0..1000 {
        let p = generator.generate();

        // Identity follows the title.
        assert_eq!(p.slug, slugify(&p.title));
        assert!(p.title.ends_with(&format!("in {}", p.city)));
        assert_eq!(p.meta_title, format!("{} - Real Estate in Amman", p.title));
        // The meta description is always a (possibly clipped) prefix of the
        // description, so the two never drift apart.
        let meta_stem = p.meta_description.trim_end_matches("...").trim_end();
        assert!(p.description.starts_with(meta_stem));
        assert!(p.meta_description.chars().count() <= 158);

        // Land never carries room counts or a build year.
        if p.property_type == PropertyType::Land {
            assert_eq!(p.bedrooms, None);
            assert_eq!(p.bathrooms, None);
            assert_eq!(p.built_year, None);
            assert!(p.title.starts_with("Prime Land in "));
        } else {
            assert!(p.bedrooms.is_some());
            assert!(p.bathrooms.is_some());
            assert!(p.built_year.is_some());
        }

        // Rent pricing overrides the sale base for every type.
        if p.listing_type == ListingType::Rent {
            assert!(
                (250.0..=5000.0).contains(&p.price),
                "rent price out of range: {}",
                p.price
            );
        } else {
            assert!(p.price >= 45000.0);
        }

        // Coordinates fall inside the chosen district's box.
        let district = district_bounds(&p.city);
        assert_eq!(district.name, p.city);
        let lat = p.latitude.expect("latitude missing");
        let lon = p.longitude.expect("longitude missing");
        assert!(district.lat.0 <= lat && lat < district.lat.1 + 1e-9);
        assert!(district.lon.0 <= lon && lon < district.lon.1 + 1e-9);

        assert!((3..=7).contains(&p.features.len()));
        assert!((80.0..=1500.0).contains(&p.total_area));
        assert!(p.images.is_empty());
        assert_eq!(p.state, "Amman");
        assert_eq!(p.country, "Jordan");
        assert!(p.contact_email.contains('@'));
        assert!(p.contact_phone.starts_with("+962 7"));
        assert!(p.id.is_none());
    }
}

#[test]
fn for_rent_variant_always_prices_from_the_rent_range() {
    let mut generator = PropertySampleGenerator::new(StdRng::seed_from_u64(7)).for_rent();

    for _ in 0..1000 {
        let p = generator.generate();
        assert_eq!(p.listing_type, ListingType::Rent);
        assert!((250.0..=5000.0).contains(&p.price));
    }
}

#[test]
fn sold_variant_forces_the_status() {
    let mut generator = PropertySampleGenerator::new(StdRng::seed_from_u64(11)).sold();

    for _ in 0..100 {
        assert_eq!(generator.generate().status, PropertyStatus::Sold);
    }
}

#[test]
fn featured_variant_sets_a_future_expiry() {
    let mut generator = PropertySampleGenerator::new(StdRng::seed_from_u64(13)).featured();

    for _ in 0..100 {
        let p = generator.generate();
        assert!(p.is_featured);
        let until = p.featured_until.expect("featured_until missing");
        assert!(until > Utc::now());
        assert!(p.is_currently_featured());
    }
}

#[test]
fn variants_compose_in_any_order() {
    let mut generator = PropertySampleGenerator::new(StdRng::seed_from_u64(17))
        .sold()
        .featured()
        .for_rent();

    for _ in 0..100 {
        let p = generator.generate();
        assert_eq!(p.status, PropertyStatus::Sold);
        assert!(p.is_featured);
        assert_eq!(p.listing_type, ListingType::Rent);
        assert!((250.0..=5000.0).contains(&p.price));
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let mut a = PropertySampleGenerator::new(StdRng::seed_from_u64(99));
    let mut b = PropertySampleGenerator::new(StdRng::seed_from_u64(99));

    for _ in 0..20 {
        let left = a.generate();
        let right = b.generate();
        assert_eq!(left.slug, right.slug);
        assert_eq!(left.price, right.price);
        assert_eq!(left.features, right.features);
    }
}
