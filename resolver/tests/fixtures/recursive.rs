//! An entity whose property's characteristic refers back to the entity.

/// `Node.child` is a `Node` again.
pub const RECURSIVE: &str = r#"
:Tree a samm:Aspect ;
    samm:properties ( :root ) .

:root a samm:Property ;
    samm:characteristic :NodeCharacteristic .

:NodeCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Node .

:Node a samm:Entity ;
    samm:properties ( :label [ samm:property :child ; samm:optional true ] ) .

:label a samm:Property ;
    samm:characteristic samm-c:Text .

:child a samm:Property ;
    samm:characteristic :NodeCharacteristic .
"#;
