use crate::db::connection::Database;
use crate::domain::logic::slugify;
use crate::domain::property::{ListingType, PropertyRecord, PropertyStatus, PropertyType};
use crate::errors::CatalogError;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Column list shared by every SELECT so row mapping stays in one place.
const PROPERTY_COLUMNS: &str = "\
    id, slug, title, description, property_type, listing_type, status, is_active, \
    price, price_per_sqft, address, city, state, country, postal_code, \
    latitude, longitude, bedrooms, bathrooms, total_area, built_year, \
    furnished, parking, parking_spaces, features, images, \
    is_featured, featured_until, contact_name, contact_phone, contact_email, \
    meta_title, meta_description, created_at, updated_at";

/// Saves a record, running the slug hooks before the write.
///
/// - Insert (no row id yet): an empty slug is derived from the title, the
///   bookkeeping timestamps are stamped, and the assigned row id is written
///   back onto the record.
/// - Update: when the stored title differs from the record's current title
///   the slug is re-derived; edits to any other field leave it untouched.
///
/// Database failures surface unmodified as `CatalogError::DbError`.
pub fn save_property(db: &Database, property: &mut PropertyRecord) -> Result<(), CatalogError> {
    db.with_conn(|conn| {
        let now = Utc::now().naive_utc();
        match property.id {
            None => insert_property(conn, property, now),
            Some(id) => update_property(conn, id, property, now),
        }
    })
}

/// Loads a record by its slug, the externally addressable identifier used
/// for pretty-URL lookups.
pub fn find_property_by_slug(
    db: &Database,
    slug: &str,
) -> Result<Option<PropertyRecord>, CatalogError> {
    db.with_conn(|conn| {
        let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE slug = ?1");
        conn.query_row(&sql, params![slug], map_property_row)
            .optional()
            .map_err(CatalogError::from)
    })
}

/// All records, ordered for stable listing pages.
pub fn list_properties(db: &Database) -> Result<Vec<PropertyRecord>, CatalogError> {
    db.with_conn(|conn| {
        let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties ORDER BY city, title");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], map_property_row)?;

        let mut properties = Vec::new();
        for row in rows {
            properties.push(row?);
        }
        Ok(properties)
    })
}

// --- Persisting wrappers around the record's in-memory helpers ------------

/// Recomputes price-per-sqm and saves when the area allows it; a
/// non-positive area leaves the record and the row untouched.
pub fn recompute_price_per_sqft(
    db: &Database,
    property: &mut PropertyRecord,
) -> Result<bool, CatalogError> {
    if !property.recompute_price_per_sqft() {
        return Ok(false);
    }
    save_property(db, property)?;
    Ok(true)
}

/// Adds a feature and saves. Skips the save entirely when the feature was
/// already present, so repeated calls write once.
pub fn add_feature(
    db: &Database,
    property: &mut PropertyRecord,
    feature: &str,
) -> Result<bool, CatalogError> {
    if !property.add_feature(feature) {
        return Ok(false);
    }
    save_property(db, property)?;
    Ok(true)
}

/// Removes a feature and saves. Absent features are a no-op.
pub fn remove_feature(
    db: &Database,
    property: &mut PropertyRecord,
    feature: &str,
) -> Result<bool, CatalogError> {
    if !property.remove_feature(feature) {
        return Ok(false);
    }
    save_property(db, property)?;
    Ok(true)
}

/// Promotes a listing, optionally until a given expiry.
pub fn set_featured(
    db: &Database,
    property: &mut PropertyRecord,
    until: Option<DateTime<Utc>>,
) -> Result<(), CatalogError> {
    property.is_featured = true;
    property.featured_until = until;
    save_property(db, property)
}

/// Ends a listing's promotion.
pub fn clear_featured(db: &Database, property: &mut PropertyRecord) -> Result<(), CatalogError> {
    property.is_featured = false;
    property.featured_until = None;
    save_property(db, property)
}

// --- Write path -----------------------------------------------------------

fn insert_property(
    conn: &Connection,
    property: &mut PropertyRecord,
    now: NaiveDateTime,
) -> Result<(), CatalogError> {
    property.ensure_slug();
    if property.slug.is_empty() {
        return Err(CatalogError::BadRequest(
            "cannot derive a slug from an empty title".to_string(),
        ));
    }
    property.created_at = Some(now);
    property.updated_at = Some(now);

    conn.execute(
        r#"
        INSERT INTO properties (
            slug, title, description, property_type, listing_type, status, is_active,
            price, price_per_sqft, address, city, state, country, postal_code,
            latitude, longitude, bedrooms, bathrooms, total_area, built_year,
            furnished, parking, parking_spaces, features, images,
            is_featured, featured_until, contact_name, contact_phone, contact_email,
            meta_title, meta_description, created_at, updated_at
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7,
            ?8, ?9, ?10, ?11, ?12, ?13, ?14,
            ?15, ?16, ?17, ?18, ?19, ?20,
            ?21, ?22, ?23, ?24, ?25,
            ?26, ?27, ?28, ?29, ?30,
            ?31, ?32, ?33, ?34
        )
        "#,
        params![
            // identity
            &property.slug,
            &property.title,
            &property.description,
            property.property_type.code(),
            property.listing_type.code(),
            property.status.code(),
            property.is_active,
            // commercial
            property.price,
            property.price_per_sqft,
            // location
            &property.address,
            &property.city,
            &property.state,
            &property.country,
            &property.postal_code,
            property.latitude,
            property.longitude,
            // physical
            property.bedrooms,
            property.bathrooms,
            property.total_area,
            property.built_year,
            property.furnished,
            property.parking,
            property.parking_spaces,
            // collections (JSON text columns)
            encode_string_list(&property.features),
            encode_string_list(&property.images),
            // promotion
            property.is_featured,
            property.featured_until,
            // contact + SEO
            &property.contact_name,
            &property.contact_phone,
            &property.contact_email,
            &property.meta_title,
            &property.meta_description,
            // bookkeeping
            property.created_at,
            property.updated_at,
        ],
    )?;

    property.id = Some(conn.last_insert_rowid());
    Ok(())
}

fn update_property(
    conn: &Connection,
    id: i64,
    property: &mut PropertyRecord,
    now: NaiveDateTime,
) -> Result<(), CatalogError> {
    // Dirty-title check against the stored row: the slug only ever moves
    // when the title itself changed.
    let stored_title: Option<String> = conn
        .query_row(
            "SELECT title FROM properties WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()?;

    let stored_title = stored_title.ok_or(CatalogError::NotFound)?;
    if stored_title != property.title {
        property.slug = slugify(&property.title);
    }
    property.ensure_slug();
    if property.slug.is_empty() {
        return Err(CatalogError::BadRequest(
            "cannot derive a slug from an empty title".to_string(),
        ));
    }
    property.updated_at = Some(now);

    conn.execute(
        r#"
        UPDATE properties SET
            slug = ?1, title = ?2, description = ?3, property_type = ?4,
            listing_type = ?5, status = ?6, is_active = ?7,
            price = ?8, price_per_sqft = ?9, address = ?10, city = ?11,
            state = ?12, country = ?13, postal_code = ?14,
            latitude = ?15, longitude = ?16, bedrooms = ?17, bathrooms = ?18,
            total_area = ?19, built_year = ?20,
            furnished = ?21, parking = ?22, parking_spaces = ?23,
            features = ?24, images = ?25,
            is_featured = ?26, featured_until = ?27,
            contact_name = ?28, contact_phone = ?29, contact_email = ?30,
            meta_title = ?31, meta_description = ?32, updated_at = ?33
        WHERE id = ?34
        "#,
        params![
            &property.slug,
            &property.title,
            &property.description,
            property.property_type.code(),
            property.listing_type.code(),
            property.status.code(),
            property.is_active,
            property.price,
            property.price_per_sqft,
            &property.address,
            &property.city,
            &property.state,
            &property.country,
            &property.postal_code,
            property.latitude,
            property.longitude,
            property.bedrooms,
            property.bathrooms,
            property.total_area,
            property.built_year,
            property.furnished,
            property.parking,
            property.parking_spaces,
            encode_string_list(&property.features),
            encode_string_list(&property.images),
            property.is_featured,
            property.featured_until,
            &property.contact_name,
            &property.contact_phone,
            &property.contact_email,
            &property.meta_title,
            &property.meta_description,
            property.updated_at,
            id,
        ],
    )?;
    Ok(())
}

// --- Row mapping ----------------------------------------------------------

fn map_property_row(row: &Row) -> rusqlite::Result<PropertyRecord> {
    let property_type: String = row.get("property_type")?;
    let listing_type: String = row.get("listing_type")?;
    let status: String = row.get("status")?;
    let features: String = row.get("features")?;
    let images: String = row.get("images")?;

    Ok(PropertyRecord {
        id: Some(row.get("id")?),
        slug: row.get("slug")?,
        title: row.get("title")?,
        description: row.get("description")?,
        // Unknown codes in stored rows map to defaults instead of failing.
        property_type: PropertyType::from_code(&property_type).unwrap_or(PropertyType::House),
        listing_type: ListingType::from_code(&listing_type).unwrap_or(ListingType::Sale),
        status: PropertyStatus::from_code(&status).unwrap_or(PropertyStatus::Draft),
        is_active: row.get("is_active")?,
        price: row.get("price")?,
        price_per_sqft: row.get("price_per_sqft")?,
        address: row.get("address")?,
        city: row.get("city")?,
        state: row.get("state")?,
        country: row.get("country")?,
        postal_code: row.get("postal_code")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        bedrooms: row.get("bedrooms")?,
        bathrooms: row.get("bathrooms")?,
        total_area: row.get("total_area")?,
        built_year: row.get("built_year")?,
        furnished: row.get("furnished")?,
        parking: row.get("parking")?,
        parking_spaces: row.get("parking_spaces")?,
        features: decode_string_list(&features),
        images: decode_string_list(&images),
        is_featured: row.get("is_featured")?,
        featured_until: row.get("featured_until")?,
        contact_name: row.get("contact_name")?,
        contact_phone: row.get("contact_phone")?,
        contact_email: row.get("contact_email")?,
        meta_title: row.get("meta_title")?,
        meta_description: row.get("meta_description")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn encode_string_list(values: &[String]) -> String {
    // Vec<String> -> JSON text column; serialization of plain strings
    // cannot fail.
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

fn decode_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}
