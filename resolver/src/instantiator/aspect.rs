//! Aspects, operations and events.

use aspect_meta_model::{Aspect, Event, Operation};

use crate::error::Result;
use crate::factory::Factory;
use crate::graph::Term;
use crate::shapes;

pub(crate) fn aspect(f: &mut Factory<'_>, resource: &Term) -> Result<Aspect> {
    let vocab = f.vocab;
    let base = f.base(resource, "Aspect");
    let members = f.lookup.list_of(resource, &vocab.samm.properties)?;
    let collection_properties = members
        .iter()
        .flatten()
        .filter(|property| shapes::has_collection_characteristic(f.lookup, vocab, property))
        .count();
    let properties = f.property_list(resource, &vocab.samm.properties, true)?;
    let operations = f
        .lookup
        .list_of(resource, &vocab.samm.operations)?
        .unwrap_or_default()
        .into_iter()
        .map(|operation| f.resolve_operation(operation))
        .collect::<Result<Vec<_>>>()?;
    let events = f
        .lookup
        .list_of(resource, &vocab.samm.events)?
        .unwrap_or_default()
        .into_iter()
        .map(|event| f.resolve_event(event))
        .collect::<Result<Vec<_>>>()?;
    Ok(Aspect {
        base,
        properties,
        operations,
        events,
        is_collection_aspect: collection_properties == 1,
    })
}

pub(crate) fn operation(f: &mut Factory<'_>, resource: &Term) -> Result<Operation> {
    let vocab = f.vocab;
    let base = f.base(resource, "Operation");
    let input = f.property_list(resource, &vocab.samm.input, false)?;
    let output = match f.lookup.object(resource, &vocab.samm.output) {
        Some(output) => Some(f.resolve_property(output)?),
        None => None,
    };
    Ok(Operation {
        base,
        input,
        output,
    })
}

pub(crate) fn event(f: &mut Factory<'_>, resource: &Term) -> Result<Event> {
    let vocab = f.vocab;
    let base = f.base(resource, "Event");
    let parameters = f.property_list(resource, &vocab.samm.parameters, false)?;
    Ok(Event { base, parameters })
}
