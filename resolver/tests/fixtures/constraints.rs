//! Traits with range, length, language and pattern constraints.

/// Constrained characteristics, one per property.
pub const CONSTRAINTS: &str = r#"
:Measurements a samm:Aspect ;
    samm:properties ( :temperature :pressure :code :locale ) .

:temperature a samm:Property ;
    samm:characteristic :UpperBoundedTemperature .

:UpperBoundedTemperature a samm-c:Trait ;
    samm-c:baseCharacteristic :Temperature ;
    samm-c:constraint :MaxOnly .

:Temperature a samm:Characteristic ;
    samm:dataType xsd:float .

:MaxOnly a samm-c:RangeConstraint ;
    samm-c:maxValue "100.5" .

:pressure a samm:Property ;
    samm:characteristic :BoundedPressure .

:BoundedPressure a samm-c:Trait ;
    samm-c:baseCharacteristic :Pressure ;
    samm-c:constraint :Exclusive, :Pattern .

:Pressure a samm:Characteristic ;
    samm:dataType xsd:int .

:Exclusive a samm-c:RangeConstraint ;
    samm-c:minValue "0"^^xsd:int ;
    samm-c:maxValue "10"^^xsd:int ;
    samm-c:lowerBoundDefinition samm-c:GREATER_THAN ;
    samm-c:upperBoundDefinition samm-c:LESS_THAN .

:Pattern a samm-c:RegularExpressionConstraint ;
    samm:value "[0-9]+" .

:code a samm:Property ;
    samm:characteristic :FixedCode .

:FixedCode a samm-c:Trait ;
    samm-c:baseCharacteristic :Pressure ;
    samm-c:constraint [
        a samm-c:FixedPointConstraint ;
        samm-c:scale "2"^^xsd:positiveInteger ;
        samm-c:integer "3"^^xsd:positiveInteger
    ] .

:locale a samm:Property ;
    samm:characteristic :EnglishText .

:EnglishText a samm-c:Trait ;
    samm-c:baseCharacteristic samm-c:Text ;
    samm-c:constraint :English .

:English a samm-c:LocaleConstraint ;
    samm:preferredName "english"@en, "English"@EN ;
    samm-c:localeCode "en_US" .
"#;
