// src/domain/logic.rs

/// Derives a URL-safe slug from a listing title.
///
/// Lowercases everything, collapses each run of non-alphanumeric characters
/// into a single `-`, and trims leading/trailing separators. Reapplying the
/// function to its own output is a no-op, so slugs stay stable across
/// repeated normalization.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            // Runs of punctuation/whitespace collapse into one separator,
            // emitted only when more alphanumeric content follows.
            pending_separator = true;
        }
    }

    slug
}

/// Formats a price magnitude with thousands grouping and no decimals.
/// 1500000.0 -> "1,500,000"
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if rounded < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Joins address components with ", ", skipping empty ones so the result
/// never carries stray separators.
pub fn join_address(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_separates() {
        assert_eq!(slugify("Modern Villa in Abdoun"), "modern-villa-in-abdoun");
        assert_eq!(slugify("High-End Apartment"), "high-end-apartment");
    }

    #[test]
    fn slugify_collapses_symbol_runs() {
        assert_eq!(slugify("Luxury!!!   Condo -- Sweifieh"), "luxury-condo-sweifieh");
    }

    #[test]
    fn slugify_trims_leading_and_trailing_separators() {
        let slug = slugify("  (Prime) Land in Khalda!  ");
        assert_eq!(slug, "prime-land-in-khalda");
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slugify_is_idempotent() {
        let once = slugify("Elegant Townhouse in Jabal Amman");
        let twice = slugify(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Spacious House"), slugify("Spacious House"));
    }

    #[test]
    fn slugify_of_pure_punctuation_is_empty() {
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(250.0), "250");
        assert_eq!(group_thousands(45000.0), "45,000");
        assert_eq!(group_thousands(1500000.0), "1,500,000");
    }

    #[test]
    fn group_thousands_rounds_to_whole_units() {
        assert_eq!(group_thousands(999.6), "1,000");
    }

    #[test]
    fn join_address_skips_empty_components() {
        assert_eq!(join_address(&["", "Amman", "", "Jordan"]), "Amman, Jordan");
        assert_eq!(join_address(&["", "", "", ""]), "");
    }

    #[test]
    fn join_address_keeps_full_component_order() {
        assert_eq!(
            join_address(&["12 Zahran Street", "Sweifieh", "Amman", "Jordan"]),
            "12 Zahran Street, Sweifieh, Amman, Jordan"
        );
    }
}
