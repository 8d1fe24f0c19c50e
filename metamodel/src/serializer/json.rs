//! JSON serializer for resolved aspect models.
//!
//! Produces a single document with the meta-model version, the requested
//! roots and an `elements` array holding one node per element in arena
//! order. Named elements are referenced by URN; anonymous ones by `_:` plus
//! their synthetic name.

use serde_json::{json, Map, Value as Json};

use crate::characteristic::{CharacteristicKind, StructuredValueElement};
use crate::constraint::ConstraintKind;
use crate::model::{AspectModel, ComplexTypeKind, ElementBase, ElementRef};
use crate::types::Type;
use crate::value::{LiteralValue, Value};

/// Serializes a resolved model to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(model: &AspectModel) -> Json {
    let roots: Vec<Json> = model.roots.iter().map(|r| reference(model, *r)).collect();
    let elements: Vec<Json> = model
        .element_refs()
        .map(|element| element_to_json(model, element))
        .collect();
    let mut doc = json!({
        "metaModelVersion": model.meta_model_version.as_str(),
        "roots": roots,
        "elements": elements
    });
    if let Some(namespace) = &model.namespace {
        doc["namespace"] = json!(namespace.urn_prefix);
    }
    doc
}

fn reference(model: &AspectModel, element: ElementRef) -> Json {
    let base = model.base(element);
    match &base.urn {
        Some(urn) => json!(urn),
        None => json!(format!("_:{}", base.name)),
    }
}

fn references<I>(model: &AspectModel, elements: I) -> Json
where
    I: IntoIterator<Item = ElementRef>,
{
    Json::Array(elements.into_iter().map(|e| reference(model, e)).collect())
}

fn base_to_json(kind: &str, base: &ElementBase) -> Json {
    let mut node = json!({
        "@id": base.urn,
        "@type": kind,
        "name": base.name
    });
    if !base.preferred_names.is_empty() {
        node["preferredName"] = json!(base.preferred_names);
    }
    if !base.descriptions.is_empty() {
        node["description"] = json!(base.descriptions);
    }
    if !base.see.is_empty() {
        node["see"] = json!(base.see);
    }
    node
}

fn element_to_json(model: &AspectModel, element: ElementRef) -> Json {
    match element {
        ElementRef::Aspect(id) => {
            let aspect = model.aspect(id);
            let mut node = base_to_json("Aspect", &aspect.base);
            node["properties"] =
                references(model, aspect.properties.iter().map(|p| ElementRef::Property(*p)));
            node["operations"] =
                references(model, aspect.operations.iter().map(|o| ElementRef::Operation(*o)));
            node["events"] = references(model, aspect.events.iter().map(|e| ElementRef::Event(*e)));
            node["isCollectionAspect"] = json!(aspect.is_collection_aspect);
            node
        }
        ElementRef::Property(id) => {
            let property = model.property(id);
            let kind = if property.is_abstract {
                "AbstractProperty"
            } else {
                "Property"
            };
            let mut node = base_to_json(kind, &property.base);
            if let Some(c) = property.characteristic {
                node["characteristic"] = reference(model, ElementRef::Characteristic(c));
            }
            if let Some(v) = &property.example_value {
                node["exampleValue"] = value_to_json(model, v);
            }
            if property.optional {
                node["optional"] = json!(true);
            }
            if property.not_in_payload {
                node["notInPayload"] = json!(true);
            }
            if property.payload_name != property.base.name {
                node["payloadName"] = json!(property.payload_name);
            }
            if let Some(r) = property.refines {
                node["extends"] = reference(model, ElementRef::Property(r));
            }
            if property.usage_of.is_some() {
                // A usage shares its target's URN; mark it as anonymous.
                node["@id"] = Json::Null;
                node["usageOf"] = json!(property.base.urn);
            }
            node
        }
        ElementRef::Characteristic(id) => characteristic_to_json(model, id),
        ElementRef::Constraint(id) => {
            let constraint = model.constraint(id);
            let mut node = base_to_json(constraint.kind.name(), &constraint.base);
            constraint_attributes(model, &constraint.kind, &mut node);
            node
        }
        ElementRef::ComplexType(id) => {
            let complex = model.complex_type(id);
            let kind = match complex.kind {
                ComplexTypeKind::Entity => "Entity",
                ComplexTypeKind::AbstractEntity { .. } => "AbstractEntity",
            };
            let mut node = base_to_json(kind, &complex.base);
            node["properties"] =
                references(model, complex.properties.iter().map(|p| ElementRef::Property(*p)));
            if let Some(parent) = complex.extends {
                node["extends"] = reference(model, ElementRef::ComplexType(parent));
            }
            if complex.is_abstract() {
                node["extendingElements"] = references(
                    model,
                    complex
                        .extending_elements()
                        .iter()
                        .map(|e| ElementRef::ComplexType(*e)),
                );
            }
            node
        }
        ElementRef::Unit(id) => {
            let unit = model.unit(id);
            let mut node = base_to_json("Unit", &unit.base);
            if let Some(symbol) = &unit.symbol {
                node["symbol"] = json!(symbol);
            }
            if let Some(code) = &unit.code {
                node["commonCode"] = json!(code);
            }
            if let Some(r) = unit.reference_unit {
                node["referenceUnit"] = reference(model, ElementRef::Unit(r));
            }
            if let Some(factor) = &unit.conversion_factor {
                node["conversionFactor"] = json!(factor);
            }
            node["quantityKinds"] = references(
                model,
                unit.quantity_kinds.iter().map(|q| ElementRef::QuantityKind(*q)),
            );
            node
        }
        ElementRef::QuantityKind(id) => base_to_json("QuantityKind", &model.quantity_kind(id).base),
        ElementRef::Operation(id) => {
            let operation = model.operation(id);
            let mut node = base_to_json("Operation", &operation.base);
            node["input"] =
                references(model, operation.input.iter().map(|p| ElementRef::Property(*p)));
            if let Some(output) = operation.output {
                node["output"] = reference(model, ElementRef::Property(output));
            }
            node
        }
        ElementRef::Event(id) => {
            let event = model.event(id);
            let mut node = base_to_json("Event", &event.base);
            node["parameters"] =
                references(model, event.parameters.iter().map(|p| ElementRef::Property(*p)));
            node
        }
        ElementRef::EntityInstance(id) => {
            let instance = model.entity_instance(id);
            let mut node = base_to_json("EntityInstance", &instance.base);
            node["entity"] = reference(model, ElementRef::ComplexType(instance.entity_type));
            let mut assertions = Map::new();
            for (property, value) in &instance.assertions {
                let key = model.property(*property).payload_name.clone();
                assertions.insert(key, value_to_json(model, value));
            }
            node["assertions"] = Json::Object(assertions);
            node
        }
    }
}

fn characteristic_to_json(model: &AspectModel, id: crate::model::CharacteristicId) -> Json {
    let characteristic = model.characteristic(id);
    let mut node = base_to_json(characteristic.kind_name(), &characteristic.base);
    if let Some(data_type) = &characteristic.data_type {
        node["dataType"] = type_to_json(model, data_type);
    }
    match &characteristic.kind {
        CharacteristicKind::Plain | CharacteristicKind::SingleEntity | CharacteristicKind::Code => {}
        CharacteristicKind::Trait {
            base_characteristic,
            constraints,
        } => {
            node["baseCharacteristic"] =
                reference(model, ElementRef::Characteristic(*base_characteristic));
            node["constraints"] =
                references(model, constraints.iter().map(|c| ElementRef::Constraint(*c)));
        }
        CharacteristicKind::Collection {
            collection,
            element_characteristic,
        } => {
            node["ordered"] = json!(collection.is_ordered());
            node["unique"] = json!(collection.is_unique());
            if let Some(e) = element_characteristic {
                node["elementCharacteristic"] = reference(model, ElementRef::Characteristic(*e));
            }
        }
        CharacteristicKind::Enumeration { values } => {
            node["values"] = values_to_json(model, values);
        }
        CharacteristicKind::State {
            values,
            default_value,
        } => {
            node["values"] = values_to_json(model, values);
            node["defaultValue"] = value_to_json(model, default_value);
        }
        CharacteristicKind::Quantifiable { unit }
        | CharacteristicKind::Measurement { unit }
        | CharacteristicKind::Duration { unit } => {
            if let Some(u) = unit {
                node["unit"] = reference(model, ElementRef::Unit(*u));
            }
        }
        CharacteristicKind::Either { left, right } => {
            node["left"] = reference(model, ElementRef::Characteristic(*left));
            node["right"] = reference(model, ElementRef::Characteristic(*right));
        }
        CharacteristicKind::StructuredValue {
            deconstruction_rule,
            elements,
        } => {
            node["deconstructionRule"] = json!(deconstruction_rule);
            let parts: Vec<Json> = elements
                .iter()
                .map(|e| match e {
                    StructuredValueElement::Literal(s) => json!(s),
                    StructuredValueElement::Property(p) => json!({
                        "property": reference(model, ElementRef::Property(*p))
                    }),
                })
                .collect();
            node["elements"] = Json::Array(parts);
        }
    }
    node
}

fn constraint_attributes(model: &AspectModel, kind: &ConstraintKind, node: &mut Json) {
    match kind {
        ConstraintKind::Generic => {}
        ConstraintKind::Range {
            min_value,
            max_value,
            lower_bound_definition,
            upper_bound_definition,
        } => {
            if let Some(min) = min_value {
                node["minValue"] = value_to_json(model, &Value::Scalar(min.clone()));
            }
            if let Some(max) = max_value {
                node["maxValue"] = value_to_json(model, &Value::Scalar(max.clone()));
            }
            node["lowerBoundDefinition"] = json!(lower_bound_definition.as_str());
            node["upperBoundDefinition"] = json!(upper_bound_definition.as_str());
        }
        ConstraintKind::Length {
            min_value,
            max_value,
        } => {
            if let Some(min) = min_value {
                node["minValue"] = json!(min);
            }
            if let Some(max) = max_value {
                node["maxValue"] = json!(max);
            }
        }
        ConstraintKind::Encoding { charset } => node["value"] = json!(charset),
        ConstraintKind::Language { language_code } => node["languageCode"] = json!(language_code),
        ConstraintKind::Locale { locale_code } => node["localeCode"] = json!(locale_code),
        ConstraintKind::RegularExpression { pattern } => node["value"] = json!(pattern),
        ConstraintKind::FixedPoint { scale, integer } => {
            node["scale"] = json!(scale);
            node["integer"] = json!(integer);
        }
    }
}

fn type_to_json(model: &AspectModel, data_type: &Type) -> Json {
    match data_type {
        Type::Scalar(scalar) => json!(scalar.urn),
        Type::Complex(id) => reference(model, ElementRef::ComplexType(*id)),
    }
}

fn values_to_json(model: &AspectModel, values: &[Value]) -> Json {
    Json::Array(values.iter().map(|v| value_to_json(model, v)).collect())
}

fn value_to_json(model: &AspectModel, value: &Value) -> Json {
    match value {
        Value::Scalar(scalar) => match &scalar.literal {
            LiteralValue::LangString { text, language } => json!({
                "@value": text,
                "@language": language
            }),
            literal => json!({
                "@value": literal.lexical_form(),
                "@type": scalar.scalar_type.urn
            }),
        },
        Value::Entity(id) => reference(model, ElementRef::EntityInstance(*id)),
        Value::Collection(collection) => values_to_json(model, &collection.elements),
    }
}
