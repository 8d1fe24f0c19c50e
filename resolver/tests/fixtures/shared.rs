//! Two aspects sharing every kind of referenceable element.

/// Two aspects that reference the same named property, unit, constraint,
/// entity instance, operation and event, each from two places.
pub const SHARED: &str = r#"
:Fleet a samm:Aspect ;
    samm:properties ( :speed :topSpeed :status ) ;
    samm:operations ( :reset ) ;
    samm:events ( :alarm ) .

:Depot a samm:Aspect ;
    samm:properties ( :speed :lastStatus ) ;
    samm:operations ( :reset ) ;
    samm:events ( :alarm ) .

:speed a samm:Property ;
    samm:characteristic :Speed .

:topSpeed a samm:Property ;
    samm:characteristic :TopSpeed .

:Speed a samm-c:Trait ;
    samm-c:baseCharacteristic :SpeedValue ;
    samm-c:constraint :NonNegative .

:TopSpeed a samm-c:Trait ;
    samm-c:baseCharacteristic :TopSpeedValue ;
    samm-c:constraint :NonNegative .

:SpeedValue a samm-c:Measurement ;
    samm:dataType xsd:float ;
    samm-c:unit :Knot .

:TopSpeedValue a samm-c:Measurement ;
    samm:dataType xsd:float ;
    samm-c:unit :Knot .

:Knot a samm:Unit ;
    samm:symbol "kn" ;
    samm:conversionFactor "1.852" .

:NonNegative a samm-c:RangeConstraint ;
    samm-c:minValue "0"^^xsd:float .

:status a samm:Property ;
    samm:characteristic :Status .

:lastStatus a samm:Property ;
    samm:characteristic :LastStatus .

:Status a samm-c:Enumeration ;
    samm:dataType :State ;
    samm-c:values ( :Running :Stopped ) .

:LastStatus a samm-c:Enumeration ;
    samm:dataType :State ;
    samm-c:values ( :Stopped ) .

:State a samm:Entity ;
    samm:properties ( :code ) .

:code a samm:Property ;
    samm:characteristic samm-c:Text .

:Running a :State ;
    :code "running" .

:Stopped a :State ;
    :code "stopped" .

:reset a samm:Operation ;
    samm:input ( :speed ) ;
    samm:output :status .

:alarm a samm:Event ;
    samm:parameters ( :speed ) .
"#;
