//! Small, schema-valid property record shared by unit tests.

use crate::catalog::Property;
use serde_json::{Value, json};

pub(crate) fn sample_property_json() -> Value {
    json!({
        "schema_version": "property_v1",
        "name": "Test Chalet",
        "tagline": "A chalet for tests",
        "description": "Fixture record.",
        "identifier": "TEST-0001",
        "location": {
            "address": {
                "street": "1 Test Rd",
                "city": "Fernie",
                "region": "British Columbia",
                "postal_code": "V0B 1M0",
                "country": "Canada"
            },
            "coordinates": {"latitude": 49.5, "longitude": -115.0},
            "timezone": "America/Edmonton"
        },
        "specs": {"bedrooms": 2, "bathrooms": 1, "max_guests": 6, "levels": 2},
        "check_in": "16:00",
        "check_out": "10:00",
        "beds": [
            {"room": "Bedroom 1", "beds": "Queen", "level": 1},
            {"room": "Bedroom 2", "beds": "Twin", "level": 0},
            {"room": "Den", "beds": "Sofabed", "level": 0}
        ],
        "images": {
            "hero": "exterior-front",
            "og_image": "exterior-front",
            "gallery": [
                {"id": "kitchen", "alt": "Kitchen", "category": "kitchen"},
                {"id": "hot-tub", "alt": "Hot tub", "category": "outdoor"},
                {"id": "loft", "alt": "Loft"},
                {"id": "patio", "alt": "Patio", "category": "outdoor"}
            ]
        },
        "amenities": [
            {"category": "Recreation", "items": [
                {"name": "Hot Tub", "schema_name": "hotTub"},
                {"name": "Board Games"}
            ]},
            {"category": "Empty", "items": []},
            {"category": "Kitchen", "items": [
                {"name": "Dishwasher", "icon": "dishwasher", "schema_name": "dishwasher"}
            ]}
        ],
        "company": {
            "name": "Test Properties",
            "contacts": [
                {"name": "Olive Owner", "email": "owner@example.com", "phone": "+1 555 0101", "role": "owner"},
                {"name": "Max Manager", "email": "pm@example.com", "phone": "+1 555 0102", "role": "property_manager"}
            ]
        },
        "house_rules": {
            "quiet_hours": {"start": "22:00", "end": "07:00"},
            "max_guests": 4,
            "no_smoking": true
        },
        "booking_terms": {
            "security_deposit": {"amount": 500, "currency": "CAD"},
            "payment_schedule": {"deposit_percent": 30, "balance_due_days": 60},
            "cancellation": {
                "standard": [
                    {"min_days_before_arrival": 60, "label": "60+ days", "refund": "Full refund"},
                    {"min_days_before_arrival": 30, "label": "30–59 days", "refund": "50% refund"},
                    {"min_days_before_arrival": 0, "label": "Less than 30 days", "refund": "No refund"}
                ],
                "peak": [
                    {"min_days_before_arrival": 90, "label": "90+ days", "refund": "Full refund"},
                    {"min_days_before_arrival": 60, "label": "60–89 days", "refund": "50% refund"},
                    {"min_days_before_arrival": 0, "label": "Less than 60 days", "refund": "No refund"}
                ]
            },
            "peak_periods": ["Christmas week"]
        }
    })
}

pub(crate) fn sample_property() -> Property {
    serde_json::from_value(sample_property_json()).expect("fixture matches the model")
}
