//! The collection family.

/// One aspect with exactly one collection property, reached through a Trait,
/// plus one characteristic of each collection kind.
pub const COLLECTIONS: &str = r#"
:Inventory a samm:Aspect ;
    samm:properties ( :items :count ) .

:items a samm:Property ;
    samm:characteristic :ShortItemList .

:count a samm:Property ;
    samm:characteristic :Count .

:Count a samm:Characteristic ;
    samm:dataType xsd:nonNegativeInteger .

:ShortItemList a samm-c:Trait ;
    samm-c:baseCharacteristic :ItemList ;
    samm-c:constraint :AtMostTen .

:AtMostTen a samm-c:LengthConstraint ;
    samm-c:maxValue "10"^^xsd:nonNegativeInteger .

:ItemList a samm-c:List ;
    samm-c:elementCharacteristic :Item .

:Item a samm:Characteristic ;
    samm:dataType xsd:string .

:ItemSet a samm-c:Set ;
    samm:dataType xsd:string .

:ItemSortedSet a samm-c:SortedSet ;
    samm:dataType xsd:string .

:ItemCollection a samm-c:Collection ;
    samm:dataType xsd:string .
"#;

/// An aspect with two collection properties.
pub const TWO_COLLECTIONS: &str = r#"
:Pair a samm:Aspect ;
    samm:properties ( :left :right ) .

:left a samm:Property ;
    samm:characteristic :Names .

:right a samm:Property ;
    samm:characteristic :Names .

:Names a samm-c:Set ;
    samm:dataType xsd:string .
"#;
