//! Standard IRI constants shared by the element graph and the resolver.
//!
//! Meta-model namespaces are versioned; they are built from the prefixes
//! below plus a [`MetaModelVersion`](crate::MetaModelVersion) string, e.g.
//! `urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#`.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Common URN prefix of every meta-model namespace.
pub const SAMM_URN_PREFIX: &str = "urn:samm:org.eclipse.esmf.samm:";
/// Prefix of the core meta-model namespace (`samm:`), completed by `<version>#`.
pub const SAMM_META_MODEL: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:";
/// Prefix of the characteristic/constraint namespace (`samm-c:`).
pub const SAMM_CHARACTERISTIC: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:";
/// Prefix of the shared entity namespace (`samm-e:`).
pub const SAMM_ENTITY: &str = "urn:samm:org.eclipse.esmf.samm:entity:";
/// Prefix of the unit catalog namespace (`unit:`).
pub const SAMM_UNIT: &str = "urn:samm:org.eclipse.esmf.samm:unit:";

// RDF vocabulary
/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:first`.
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
/// `rdf:rest`.
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
/// `rdf:nil`.
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
/// `rdf:langString`.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

// XSD datatypes
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:decimal`.
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:double`.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:float`.
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
/// `xsd:date`.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:time`.
pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
/// `xsd:dateTime`.
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
/// `xsd:dateTimeStamp`.
pub const XSD_DATE_TIME_STAMP: &str = "http://www.w3.org/2001/XMLSchema#dateTimeStamp";
/// `xsd:gYear`.
pub const XSD_G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
/// `xsd:gMonth`.
pub const XSD_G_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gMonth";
/// `xsd:gDay`.
pub const XSD_G_DAY: &str = "http://www.w3.org/2001/XMLSchema#gDay";
/// `xsd:gYearMonth`.
pub const XSD_G_YEAR_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gYearMonth";
/// `xsd:gMonthDay`.
pub const XSD_G_MONTH_DAY: &str = "http://www.w3.org/2001/XMLSchema#gMonthDay";
/// `xsd:duration`.
pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
/// `xsd:yearMonthDuration`.
pub const XSD_YEAR_MONTH_DURATION: &str = "http://www.w3.org/2001/XMLSchema#yearMonthDuration";
/// `xsd:dayTimeDuration`.
pub const XSD_DAY_TIME_DURATION: &str = "http://www.w3.org/2001/XMLSchema#dayTimeDuration";
/// `xsd:byte`.
pub const XSD_BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
/// `xsd:short`.
pub const XSD_SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
/// `xsd:int`.
pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
/// `xsd:long`.
pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
/// `xsd:unsignedByte`.
pub const XSD_UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";
/// `xsd:unsignedShort`.
pub const XSD_UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";
/// `xsd:unsignedInt`.
pub const XSD_UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
/// `xsd:unsignedLong`.
pub const XSD_UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
/// `xsd:positiveInteger`.
pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
/// `xsd:nonNegativeInteger`.
pub const XSD_NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
/// `xsd:negativeInteger`.
pub const XSD_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";
/// `xsd:nonPositiveInteger`.
pub const XSD_NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
/// `xsd:hexBinary`.
pub const XSD_HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
/// `xsd:base64Binary`.
pub const XSD_BASE64_BINARY: &str = "http://www.w3.org/2001/XMLSchema#base64Binary";
/// `xsd:anyURI`.
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

/// Integer-valued XSD datatypes, parsed into [`LiteralValue::Integer`](crate::LiteralValue::Integer).
pub const XSD_INTEGER_TYPES: &[&str] = &[
    XSD_INTEGER,
    XSD_BYTE,
    XSD_SHORT,
    XSD_INT,
    XSD_LONG,
    XSD_UNSIGNED_BYTE,
    XSD_UNSIGNED_SHORT,
    XSD_UNSIGNED_INT,
    XSD_UNSIGNED_LONG,
    XSD_POSITIVE_INTEGER,
    XSD_NON_NEGATIVE_INTEGER,
    XSD_NEGATIVE_INTEGER,
    XSD_NON_POSITIVE_INTEGER,
];

/// Every XSD datatype the meta model admits as a scalar `samm:dataType`.
pub const XSD_SCALAR_TYPES: &[&str] = &[
    XSD_STRING,
    XSD_BOOLEAN,
    XSD_DECIMAL,
    XSD_INTEGER,
    XSD_DOUBLE,
    XSD_FLOAT,
    XSD_DATE,
    XSD_TIME,
    XSD_DATE_TIME,
    XSD_DATE_TIME_STAMP,
    XSD_G_YEAR,
    XSD_G_MONTH,
    XSD_G_DAY,
    XSD_G_YEAR_MONTH,
    XSD_G_MONTH_DAY,
    XSD_DURATION,
    XSD_YEAR_MONTH_DURATION,
    XSD_DAY_TIME_DURATION,
    XSD_BYTE,
    XSD_SHORT,
    XSD_INT,
    XSD_LONG,
    XSD_UNSIGNED_BYTE,
    XSD_UNSIGNED_SHORT,
    XSD_UNSIGNED_INT,
    XSD_UNSIGNED_LONG,
    XSD_POSITIVE_INTEGER,
    XSD_NON_NEGATIVE_INTEGER,
    XSD_NEGATIVE_INTEGER,
    XSD_NON_POSITIVE_INTEGER,
    XSD_HEX_BINARY,
    XSD_BASE64_BINARY,
    XSD_ANY_URI,
];

/// Returns the local part of an IRI or URN: the text after the last `#`,
/// falling back to the last `/` or `:`.
///
/// ```
/// use aspect_meta_model::iris::local_name;
/// assert_eq!(local_name("urn:samm:org.example:1.0.0#Movement"), "Movement");
/// assert_eq!(local_name("http://www.w3.org/2001/XMLSchema#string"), "string");
/// ```
#[must_use]
pub fn local_name(iri: &str) -> &str {
    iri.rsplit_once('#')
        .or_else(|| iri.rsplit_once('/'))
        .or_else(|| iri.rsplit_once(':'))
        .map_or(iri, |(_, local)| local)
}

/// Returns the namespace part of an IRI: everything up to and including the
/// last `#`, or `None` if the IRI has no fragment separator.
#[must_use]
pub fn namespace_of(iri: &str) -> Option<&str> {
    iri.rfind('#').map(|idx| &iri[..=idx])
}
