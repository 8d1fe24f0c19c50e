//! One aspect, one property over the predefined `samm-c:Text`.

/// A minimal aspect.
pub const MOVEMENT: &str = r#"
:Movement a samm:Aspect ;
    samm:preferredName "movement"@en, "Bewegung"@de ;
    samm:description "Aspect for movement information"@en ;
    samm:see <https://example.org/movement> ;
    samm:properties ( :name ) ;
    samm:operations ( ) ;
    samm:events ( ) .

:name a samm:Property ;
    samm:preferredName "name"@en ;
    samm:characteristic samm-c:Text ;
    samm:exampleValue "Vehicle 7" .
"#;
