//! Characteristics, one arm per class.

use aspect_meta_model::{
    Characteristic, CharacteristicKind, ConstraintId, StructuredValueElement, Type, UnitId, Value,
};

use crate::datatype;
use crate::error::{ResolutionError, Result};
use crate::factory::Factory;
use crate::graph::Term;
use crate::shapes;
use crate::values;
use crate::vocabulary::CharacteristicClass;

pub(crate) fn characteristic(
    f: &mut Factory<'_>,
    resource: &Term,
    class: CharacteristicClass,
) -> Result<Characteristic> {
    let vocab = f.vocab;
    let c = &vocab.samm_c;
    let base = f.base(resource, class.label());
    let (data_type, kind) = match class {
        CharacteristicClass::Plain => (Some(required_type(f, resource)?), CharacteristicKind::Plain),
        CharacteristicClass::Code => (Some(required_type(f, resource)?), CharacteristicKind::Code),
        CharacteristicClass::SingleEntity => (
            Some(required_type(f, resource)?),
            CharacteristicKind::SingleEntity,
        ),
        CharacteristicClass::Trait => {
            let base_characteristic =
                f.lookup
                    .required(resource, &c.base_characteristic, "a base Characteristic")?;
            let base_characteristic = f.resolve_characteristic(base_characteristic)?;
            let constraints = constraints(f, resource)?;
            (
                None,
                CharacteristicKind::Trait {
                    base_characteristic,
                    constraints,
                },
            )
        }
        CharacteristicClass::Collection(collection) => {
            let data_type = match shapes::data_type_ref(f.lookup, vocab, resource) {
                Some(type_ref) => datatype::resolve_type(f, resource, type_ref)?,
                None => {
                    return Err(ResolutionError::missing(
                        resource,
                        &vocab.samm.data_type,
                        "a datatype, declared or inherited from samm-c:elementCharacteristic",
                    ))
                }
            };
            let element_characteristic = match f.lookup.object(resource, &c.element_characteristic)
            {
                Some(element) => Some(f.resolve_characteristic(element)?),
                None => None,
            };
            (
                Some(data_type),
                CharacteristicKind::Collection {
                    collection,
                    element_characteristic,
                },
            )
        }
        CharacteristicClass::Enumeration => {
            let data_type = required_type(f, resource)?;
            let values = values(f, resource)?;
            (Some(data_type), CharacteristicKind::Enumeration { values })
        }
        CharacteristicClass::State => {
            let data_type = required_type(f, resource)?;
            let values = values(f, resource)?;
            let default_value = default_value(f, resource)?;
            (
                Some(data_type),
                CharacteristicKind::State {
                    values,
                    default_value,
                },
            )
        }
        CharacteristicClass::Quantifiable => {
            let data_type = required_type(f, resource)?;
            let unit = unit(f, resource, false)?;
            (Some(data_type), CharacteristicKind::Quantifiable { unit })
        }
        CharacteristicClass::Measurement => {
            let data_type = required_type(f, resource)?;
            let unit = unit(f, resource, true)?;
            (Some(data_type), CharacteristicKind::Measurement { unit })
        }
        CharacteristicClass::Duration => {
            let data_type = required_type(f, resource)?;
            let unit = unit(f, resource, true)?;
            (Some(data_type), CharacteristicKind::Duration { unit })
        }
        CharacteristicClass::Either => {
            let left = f.lookup.required(resource, &c.left, "a Characteristic")?;
            let left = f.resolve_characteristic(left)?;
            let right = f.lookup.required(resource, &c.right, "a Characteristic")?;
            let right = f.resolve_characteristic(right)?;
            let data_type = datatype::resolve_optional_type(f, resource, &vocab.samm.data_type)?;
            (data_type, CharacteristicKind::Either { left, right })
        }
        CharacteristicClass::StructuredValue => {
            let data_type = required_type(f, resource)?;
            let deconstruction_rule = f
                .lookup
                .string(resource, &c.deconstruction_rule)?
                .ok_or_else(|| {
                    ResolutionError::missing(resource, &c.deconstruction_rule, "a regular expression")
                })?;
            let elements = structured_elements(f, resource)?;
            (
                Some(data_type),
                CharacteristicKind::StructuredValue {
                    deconstruction_rule,
                    elements,
                },
            )
        }
    };
    Ok(Characteristic {
        base,
        data_type,
        kind,
    })
}

fn required_type(f: &mut Factory<'_>, resource: &Term) -> Result<Type> {
    let vocab = f.vocab;
    let type_ref = f
        .lookup
        .required(resource, &vocab.samm.data_type, "a scalar datatype or an Entity")?;
    datatype::resolve_type(f, resource, type_ref)
}

/// Constraints in statement order; a list object contributes its members.
fn constraints(f: &mut Factory<'_>, resource: &Term) -> Result<Vec<ConstraintId>> {
    let vocab = f.vocab;
    let mut references = Vec::new();
    for object in f.lookup.objects(resource, &vocab.samm_c.constraint) {
        if f.lookup.is_list(object) {
            references.extend(f.lookup.list(object)?);
        } else {
            references.push(object);
        }
    }
    references
        .into_iter()
        .map(|constraint| f.resolve_constraint(constraint))
        .collect()
}

fn values(f: &mut Factory<'_>, resource: &Term) -> Result<Vec<Value>> {
    let vocab = f.vocab;
    let members = f
        .lookup
        .list_of(resource, &vocab.samm_c.values)?
        .ok_or_else(|| ResolutionError::missing(resource, &vocab.samm_c.values, "an rdf:List of values"))?;
    let expected = f.lookup.object(resource, &vocab.samm.data_type);
    let mut values = Vec::with_capacity(members.len());
    for member in members {
        if let Some(value) = values::build_value(f, resource, member, expected)? {
            values.push(value);
        }
    }
    Ok(values)
}

fn default_value(f: &mut Factory<'_>, resource: &Term) -> Result<Value> {
    let vocab = f.vocab;
    let predicate = &vocab.samm_c.default_value;
    let node = f.lookup.required(resource, predicate, "a value")?;
    let expected = f.lookup.object(resource, &vocab.samm.data_type);
    values::build_value(f, resource, node, expected)?
        .ok_or_else(|| ResolutionError::missing(resource, predicate, "a value with a language"))
}

fn unit(f: &mut Factory<'_>, resource: &Term, required: bool) -> Result<Option<UnitId>> {
    let vocab = f.vocab;
    match f.lookup.object(resource, &vocab.samm_c.unit) {
        Some(unit) => f.resolve_unit(unit).map(Some),
        None if required => Err(ResolutionError::missing(resource, &vocab.samm_c.unit, "a samm:Unit")),
        None => Ok(None),
    }
}

fn structured_elements(
    f: &mut Factory<'_>,
    resource: &Term,
) -> Result<Vec<StructuredValueElement>> {
    let vocab = f.vocab;
    let members = f
        .lookup
        .list_of(resource, &vocab.samm_c.elements)?
        .ok_or_else(|| {
            ResolutionError::missing(
                resource,
                &vocab.samm_c.elements,
                "an rdf:List of literals and properties",
            )
        })?;
    members
        .into_iter()
        .map(|member| match member {
            Term::Literal(literal) => Ok(StructuredValueElement::Literal(literal.lexical.clone())),
            _ => f.resolve_property(member).map(StructuredValueElement::Property),
        })
        .collect()
}
