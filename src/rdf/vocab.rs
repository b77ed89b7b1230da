//! Vocabulary terms emitted by the observation graph builder
//!
//! `rdf` and `xsd` terms come from `oxrdf::vocab`.

pub use oxrdf::vocab::{rdf, xsd};

pub mod sosa {
    use oxrdf::NamedNodeRef;

    pub const OBSERVATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/sosa/Observation");
    pub const RESULT_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/sosa/resultTime");
    pub const HAS_RESULT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/sosa/hasResult");
}

pub mod qudt {
    use oxrdf::NamedNodeRef;

    pub const QUANTITY_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://qudt.org/1.1/schema/qudt#QuantityValue");
    pub const NUMERIC_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://qudt.org/1.1/schema/qudt#numericValue");
    pub const UNIT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://qudt.org/1.1/schema/qudt#unit");
}

pub mod qudt_unit {
    use oxrdf::NamedNodeRef;

    /// Euro per kilowatt-hour
    pub const CCY_EUR_PER_KILOW_HR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://qudt.org/1.1/vocab/unit#CCY_EUR-PER-KiloW-HR");
}

pub mod dct {
    use oxrdf::NamedNodeRef;

    pub const SOURCE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://purl.org/dc/terms/source");
    pub const LICENSE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://purl.org/dc/terms/license");
    pub const CREATOR: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://purl.org/dc/terms/creator");
}

/// Provenance shared by every observation
pub mod provenance {
    use oxrdf::NamedNodeRef;

    pub const SOURCE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://www.smard.de/");
    pub const LICENSE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://creativecommons.org/licenses/by/4.0/");
    pub const CREATOR: &str = "Bundesnetzagentur | SMARD.de";
}
