//! Canonical primitive value categories.

use std::fmt;

/// Canonical category of a primitive-kind type.
///
/// Derived from the topmost ancestor's FHIR name with the `-primitive`
/// suffix stripped. The set is closed over the primitive names that appear
/// across the supported schema-standard revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveCategory {
    /// `base64Binary`
    Base64Binary,
    /// `boolean`
    Boolean,
    /// `canonical`
    Canonical,
    /// `code`
    Code,
    /// `date`
    Date,
    /// `dateTime`
    DateTime,
    /// `decimal`
    Decimal,
    /// `id`
    Id,
    /// `instant`
    Instant,
    /// `integer`
    Integer,
    /// `markdown`
    Markdown,
    /// `oid`
    Oid,
    /// `positiveInt`
    PositiveInt,
    /// `string`
    String,
    /// `time`
    Time,
    /// `unsignedInt`
    UnsignedInt,
    /// `uri`
    Uri,
    /// `url`
    Url,
    /// `uuid`
    Uuid,
    /// `xhtml`
    Xhtml,
}

impl PrimitiveCategory {
    /// Parses a canonical FHIR primitive name.
    #[must_use]
    pub fn from_fhir_name(name: &str) -> Option<Self> {
        match name {
            "base64Binary" => Some(Self::Base64Binary),
            "boolean" => Some(Self::Boolean),
            "canonical" => Some(Self::Canonical),
            "code" => Some(Self::Code),
            "date" => Some(Self::Date),
            "dateTime" => Some(Self::DateTime),
            "decimal" => Some(Self::Decimal),
            "id" => Some(Self::Id),
            "instant" => Some(Self::Instant),
            "integer" => Some(Self::Integer),
            "markdown" => Some(Self::Markdown),
            "oid" => Some(Self::Oid),
            "positiveInt" => Some(Self::PositiveInt),
            "string" => Some(Self::String),
            "time" => Some(Self::Time),
            "unsignedInt" => Some(Self::UnsignedInt),
            "uri" => Some(Self::Uri),
            "url" => Some(Self::Url),
            "uuid" => Some(Self::Uuid),
            "xhtml" => Some(Self::Xhtml),
            _ => None,
        }
    }

    /// Returns the canonical FHIR name of the category.
    #[must_use]
    pub const fn fhir_name(&self) -> &'static str {
        match self {
            Self::Base64Binary => "base64Binary",
            Self::Boolean => "boolean",
            Self::Canonical => "canonical",
            Self::Code => "code",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Decimal => "decimal",
            Self::Id => "id",
            Self::Instant => "instant",
            Self::Integer => "integer",
            Self::Markdown => "markdown",
            Self::Oid => "oid",
            Self::PositiveInt => "positiveInt",
            Self::String => "string",
            Self::Time => "time",
            Self::UnsignedInt => "unsignedInt",
            Self::Uri => "uri",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::Xhtml => "xhtml",
        }
    }
}

impl fmt::Display for PrimitiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fhir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fhir_name() {
        assert_eq!(
            PrimitiveCategory::from_fhir_name("string"),
            Some(PrimitiveCategory::String)
        );
        assert_eq!(
            PrimitiveCategory::from_fhir_name("dateTime"),
            Some(PrimitiveCategory::DateTime)
        );
        assert_eq!(
            PrimitiveCategory::from_fhir_name("positiveInt"),
            Some(PrimitiveCategory::PositiveInt)
        );
        assert_eq!(PrimitiveCategory::from_fhir_name("Patient"), None);
        assert_eq!(PrimitiveCategory::from_fhir_name("String"), None);
    }

    #[test]
    fn test_fhir_name_round_trip() {
        for cat in [
            PrimitiveCategory::Base64Binary,
            PrimitiveCategory::Decimal,
            PrimitiveCategory::UnsignedInt,
            PrimitiveCategory::Xhtml,
        ] {
            assert_eq!(PrimitiveCategory::from_fhir_name(cat.fhir_name()), Some(cat));
        }
    }
}
