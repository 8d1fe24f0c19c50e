//! Property usages, abstract properties and refinements.

/// An entity refining an abstract property and an aspect decorating a named
/// property with a usage.
pub const PROPERTIES: &str = r#"
:Shipment a samm:Aspect ;
    samm:properties (
        [ samm:property :weight ; samm:optional true ; samm:payloadName "w" ]
        :parcel
    ) .

:weight a samm:Property ;
    samm:characteristic :Weight .

:Weight a samm:Characteristic ;
    samm:dataType xsd:decimal .

:parcel a samm:Property ;
    samm:characteristic :ParcelCharacteristic .

:ParcelCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Parcel .

:Labelled a samm:AbstractEntity ;
    samm:properties ( :label ) .

:label a samm:AbstractProperty ;
    samm:preferredName "label"@en .

:Parcel a samm:Entity ;
    samm:extends :Labelled ;
    samm:properties ( [ samm:extends :label ; samm:characteristic samm-c:Text ] :weight ) .

:DefaultParcel a :Parcel ;
    :label "standard" ;
    :weight "1.25" .

:Parcels a samm-c:Enumeration ;
    samm:dataType :Parcel ;
    samm-c:values ( :DefaultParcel ) .
"#;
