//! Two entities extending one abstract entity, in two declaration orders.

/// `Inner` and `Other` declared before `Base`.
pub const INHERITANCE_INNER_FIRST: &str = r#"
:Fleet a samm:Aspect ;
    samm:properties ( :inner :other ) .

:inner a samm:Property ;
    samm:characteristic :InnerCharacteristic .

:other a samm:Property ;
    samm:characteristic :OtherCharacteristic .

:InnerCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Inner .

:OtherCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Other .

:Inner a samm:Entity ;
    samm:extends :Base ;
    samm:properties ( :depth ) .

:Other a samm:Entity ;
    samm:extends :Base ;
    samm:properties ( ) .

:Base a samm:AbstractEntity ;
    samm:properties ( :id ) .

:id a samm:Property ;
    samm:characteristic samm-c:Text .

:depth a samm:Property ;
    samm:characteristic :Depth .

:Depth a samm:Characteristic ;
    samm:dataType xsd:int .
"#;

/// `Base` declared and referenced first; the extenders are found only by
/// the reverse scan.
pub const INHERITANCE_BASE_FIRST: &str = r#"
:Catalog a samm:Aspect ;
    samm:properties ( :base ) .

:base a samm:Property ;
    samm:characteristic :BaseCharacteristic .

:BaseCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Base .

:Base a samm:AbstractEntity ;
    samm:properties ( :id ) .

:id a samm:Property ;
    samm:characteristic samm-c:Text .

:Other a samm:Entity ;
    samm:extends :Base ;
    samm:properties ( ) .

:Inner a samm:Entity ;
    samm:extends :Base ;
    samm:properties ( ) .
"#;
