use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Registration identifier of a property (e.g., `H182037990`).
///
/// Used as the repository key, so two records for the same property collide
/// instead of being merged.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role a company contact plays for the property.
///
/// `Other` keeps records with roles this crate does not know about loadable;
/// such contacts only matter to `primary_contact` through list order.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ContactRole {
    PropertyManager,
    Owner,
    Other(String),
}

/// Which cancellation schedule applies to a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingPeriod {
    Standard,
    Peak,
}

impl Serialize for ContactRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContactRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

impl ContactRole {
    pub fn as_str(&self) -> &str {
        match self {
            ContactRole::PropertyManager => "property_manager",
            ContactRole::Owner => "owner",
            ContactRole::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "property_manager" => ContactRole::PropertyManager,
            "owner" => ContactRole::Owner,
            other => ContactRole::Other(other.to_string()),
        }
    }

    /// True for roles the site gives special meaning to.
    pub fn is_known(&self) -> bool {
        !matches!(self, ContactRole::Other(_))
    }
}

impl BookingPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingPeriod::Standard => "standard",
            BookingPeriod::Peak => "peak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_known_and_unknown() {
        let known = ContactRole::PropertyManager;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json, "\"property_manager\"");
        let back: ContactRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);
        assert!(back.is_known());

        let parsed: ContactRole = serde_json::from_str("\"cleaner\"").unwrap();
        assert_eq!(parsed, ContactRole::Other("cleaner".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"cleaner\"");
    }

    #[test]
    fn property_id_is_transparent() {
        let id = PropertyId("H182037990".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"H182037990\"");
        assert_eq!(id.to_string(), "H182037990");
    }
}
