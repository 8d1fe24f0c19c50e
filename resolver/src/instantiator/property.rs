//! Properties: named, abstract, usages and anonymous refinements.

use aspect_meta_model::{Property, PropertyId};

use crate::error::{ResolutionError, Result};
use crate::factory::Factory;
use crate::graph::Term;
use crate::instantiator::PropertyShape;
use crate::shapes;
use crate::values;

pub(crate) fn property<'r>(
    f: &mut Factory<'r>,
    resource: &Term,
    shape: PropertyShape<'r>,
) -> Result<Property> {
    let vocab = f.vocab;
    let samm = &vocab.samm;
    match shape {
        PropertyShape::Named | PropertyShape::Abstract => {
            let is_abstract = shape == PropertyShape::Abstract;
            let label = if is_abstract { "AbstractProperty" } else { "Property" };
            let base = f.base(resource, label);
            let characteristic = if is_abstract {
                None
            } else {
                let characteristic =
                    f.lookup
                        .required(resource, &samm.characteristic, "a samm:Characteristic")?;
                Some(f.resolve_characteristic(characteristic)?)
            };
            let refines = refines(f, resource)?;
            let example_value = example_value(f, resource, resource)?;
            Ok(Property {
                payload_name: payload_name(f, resource)?.unwrap_or_else(|| base.name.clone()),
                optional: f.lookup.flag(resource, &samm.optional)?,
                not_in_payload: f.lookup.flag(resource, &samm.not_in_payload)?,
                base,
                characteristic,
                example_value,
                refines,
                is_abstract,
                usage_of: None,
            })
        }
        PropertyShape::Usage(target) => {
            let target_id = f.resolve_property(target)?;
            let is_abstract = f.lookup.has_type(target, &samm.abstract_property);
            let base = f.base(target, "Property");
            let characteristic = match f.lookup.object(target, &samm.characteristic) {
                Some(characteristic) => Some(f.resolve_characteristic(characteristic)?),
                None if is_abstract => None,
                None => {
                    return Err(ResolutionError::missing(
                        target,
                        &samm.characteristic,
                        "a samm:Characteristic",
                    ))
                }
            };
            let refines = refines(f, target)?;
            let example_value = example_value(f, target, target)?;
            Ok(Property {
                payload_name: payload_name(f, resource)?.unwrap_or_else(|| base.name.clone()),
                optional: f.lookup.flag(resource, &samm.optional)?,
                not_in_payload: f.lookup.flag(resource, &samm.not_in_payload)?,
                base,
                characteristic,
                example_value,
                refines,
                is_abstract,
                usage_of: Some(target_id),
            })
        }
        PropertyShape::Refinement(general) => {
            if !f.lookup.has_type(general, &samm.abstract_property) {
                return Err(ResolutionError::unsupported(
                    general,
                    "a samm:AbstractProperty as the target of an anonymous samm:extends",
                ));
            }
            let general_id = f.resolve_property(general)?;
            let mut base = f.base(general, "Property");
            base.urn = None;
            base.source = f.lookup.origin(resource).map(str::to_owned).or(base.source);
            let characteristic =
                f.lookup
                    .required(resource, &samm.characteristic, "a samm:Characteristic")?;
            let characteristic = f.resolve_characteristic(characteristic)?;
            let example_value = example_value(f, resource, resource)?;
            Ok(Property {
                payload_name: payload_name(f, resource)?.unwrap_or_else(|| base.name.clone()),
                optional: f.lookup.flag(resource, &samm.optional)?,
                not_in_payload: f.lookup.flag(resource, &samm.not_in_payload)?,
                base,
                characteristic: Some(characteristic),
                example_value,
                refines: Some(general_id),
                is_abstract: false,
                usage_of: None,
            })
        }
    }
}

fn refines(f: &mut Factory<'_>, property: &Term) -> Result<Option<PropertyId>> {
    let vocab = f.vocab;
    match f.lookup.object(property, &vocab.samm.extends) {
        Some(general) => f.resolve_property(general).map(Some),
        None => Ok(None),
    }
}

/// The example value declared on `declaring`, typed by the characteristic
/// of `property`.
fn example_value(
    f: &mut Factory<'_>,
    property: &Term,
    declaring: &Term,
) -> Result<Option<aspect_meta_model::Value>> {
    let vocab = f.vocab;
    match f.lookup.object(declaring, &vocab.samm.example_value) {
        Some(node) => {
            let expected = shapes::property_data_type(f.lookup, vocab, property);
            values::build_value(f, declaring, node, expected)
        }
        None => Ok(None),
    }
}

fn payload_name(f: &Factory<'_>, resource: &Term) -> Result<Option<String>> {
    f.lookup.string(resource, &f.vocab.samm.payload_name)
}
