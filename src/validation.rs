//! Record-level checks the JSON Schema cannot express.
//!
//! Each check appends a message instead of short-circuiting so
//! `property-check` can report every problem in a record at once.
//! `PropertyCatalog::from_property` refuses records with any finding.

use crate::catalog::{BookingPeriod, CancellationTier, ContactRole, Property};
use std::collections::BTreeSet;

pub fn validate_property(property: &Property) -> Vec<String> {
    let mut errors = Vec::new();

    if property.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if property.identifier.0.trim().is_empty() {
        errors.push("identifier must not be empty".to_string());
    }

    check_times(property, &mut errors);
    check_gallery(property, &mut errors);
    check_amenities(property, &mut errors);
    check_contacts(property, &mut errors);
    check_capacity(property, &mut errors);

    let schedule = &property.booking_terms.payment_schedule;
    if schedule.deposit_percent > 100 {
        errors.push(format!(
            "payment_schedule.deposit_percent must be at most 100, got {}",
            schedule.deposit_percent
        ));
    }

    let cancellation = &property.booking_terms.cancellation;
    for period in [BookingPeriod::Standard, BookingPeriod::Peak] {
        check_tiers(period, cancellation.tiers(period), &mut errors);
    }

    errors
}

/// True for 24-hour `HH:MM` strings.
pub fn is_clock_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }
    match (hours.parse::<u8>(), minutes.parse::<u8>()) {
        (Ok(h), Ok(m)) => h < 24 && m < 60,
        _ => false,
    }
}

fn check_times(property: &Property, errors: &mut Vec<String>) {
    let quiet = &property.house_rules.quiet_hours;
    let fields = [
        ("check_in", property.check_in.as_deref()),
        ("check_out", property.check_out.as_deref()),
        ("house_rules.quiet_hours.start", Some(quiet.start.as_str())),
        ("house_rules.quiet_hours.end", Some(quiet.end.as_str())),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            if !is_clock_time(value) {
                errors.push(format!("{field} must be HH:MM, got '{value}'"));
            }
        }
    }
}

fn check_gallery(property: &Property, errors: &mut Vec<String>) {
    let mut seen = BTreeSet::new();
    for (idx, image) in property.images.gallery.iter().enumerate() {
        if image.id.trim().is_empty() {
            errors.push(format!("images.gallery[{idx}] has an empty id"));
            continue;
        }
        if !seen.insert(image.id.as_str()) {
            errors.push(format!("duplicate gallery image id '{}'", image.id));
        }
    }
}

fn check_amenities(property: &Property, errors: &mut Vec<String>) {
    for (cat_idx, category) in property.amenities.iter().enumerate() {
        if category.category.trim().is_empty() {
            errors.push(format!("amenities[{cat_idx}] has an empty category name"));
        }
        for (idx, amenity) in category.items.iter().enumerate() {
            if amenity.name.trim().is_empty() {
                errors.push(format!(
                    "amenity {idx} in category '{}' has an empty name",
                    category.category
                ));
            }
        }
    }
}

fn check_contacts(property: &Property, errors: &mut Vec<String>) {
    let mut roles: BTreeSet<&ContactRole> = BTreeSet::new();
    for contact in &property.company.contacts {
        if contact.role.is_known() && !roles.insert(&contact.role) {
            errors.push(format!(
                "company.contacts lists more than one '{}'",
                contact.role.as_str()
            ));
        }
    }
}

fn check_capacity(property: &Property, errors: &mut Vec<String>) {
    let sleeps = property.specs.max_guests;
    let booking_limit = property.house_rules.max_guests;
    if booking_limit > sleeps {
        errors.push(format!(
            "house_rules.max_guests ({booking_limit}) exceeds specs.max_guests ({sleeps})"
        ));
    }
}

fn check_tiers(period: BookingPeriod, tiers: &[CancellationTier], errors: &mut Vec<String>) {
    let name = period.as_str();
    let Some(last) = tiers.last() else {
        errors.push(format!("cancellation.{name} defines no tiers"));
        return;
    };
    for pair in tiers.windows(2) {
        if pair[0].min_days_before_arrival <= pair[1].min_days_before_arrival {
            errors.push(format!(
                "cancellation.{name} tiers must be sorted by descending min_days_before_arrival ('{}' then '{}')",
                pair[0].label, pair[1].label
            ));
        }
    }
    if last.min_days_before_arrival != 0 {
        errors.push(format!(
            "cancellation.{name} must end with a tier starting at 0 days, last is '{}'",
            last.label
        ));
    }
}
