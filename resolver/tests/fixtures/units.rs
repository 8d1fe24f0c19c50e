//! Measurements with defined and catalog units.

/// A measurement in a catalog unit and a quantifiable in a defined unit.
pub const UNITS: &str = r#"
:Vehicle a samm:Aspect ;
    samm:properties ( :speed :fuel ) .

:speed a samm:Property ;
    samm:characteristic :Speed .

:Speed a samm-c:Measurement ;
    samm:dataType xsd:float ;
    samm-c:unit unit:kilometrePerHour .

:fuel a samm:Property ;
    samm:characteristic :Fuel .

:Fuel a samm-c:Quantifiable ;
    samm:dataType xsd:float ;
    samm-c:unit :Cup .

:Cup a samm:Unit ;
    samm:preferredName "cup"@en ;
    samm:symbol "cup" ;
    samm:referenceUnit unit:litre ;
    samm:conversionFactor "0.25" ;
    samm:quantityKind unit:volume .
"#;
