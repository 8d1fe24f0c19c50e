//! Enumerations and states over scalars and entities.

/// An entity-typed enumeration and a scalar state.
pub const ENUMERATIONS: &str = r#"
:Traffic a samm:Aspect ;
    samm:properties ( :light :status ) .

:light a samm:Property ;
    samm:characteristic :Lights .

:Lights a samm-c:Enumeration ;
    samm:dataType :Light ;
    samm-c:values ( :Red :Green ) .

:Light a samm:Entity ;
    samm:properties ( :colour :wavelength ) .

:colour a samm:Property ;
    samm:characteristic samm-c:Text .

:wavelength a samm:Property ;
    samm:characteristic :Wavelength .

:Wavelength a samm:Characteristic ;
    samm:dataType xsd:int .

:Red a :Light ;
    :colour "red" ;
    :wavelength "700" .

:Green a :Light ;
    :colour "green" ;
    :wavelength "530"^^xsd:int .

:status a samm:Property ;
    samm:characteristic :Status .

:Status a samm-c:State ;
    samm:dataType xsd:string ;
    samm-c:values ( "on" "off" "broken" ) ;
    samm-c:defaultValue "on" .
"#;
