//! Units and quantity kinds.

use aspect_meta_model::{QuantityKind, Unit};

use crate::error::Result;
use crate::factory::Factory;
use crate::graph::Term;
use crate::instantiator::UnitShape;

pub(crate) fn unit(f: &mut Factory<'_>, resource: &Term, shape: UnitShape) -> Result<Unit> {
    let vocab = f.vocab;
    let samm = &vocab.samm;
    let base = f.base(resource, "Unit");
    if shape == UnitShape::Bare {
        f.info(
            resource,
            format!("unit {} is not defined in the model; resolved by name only", base.name),
        );
        return Ok(Unit {
            base,
            symbol: None,
            code: None,
            reference_unit: None,
            conversion_factor: None,
            quantity_kinds: Vec::new(),
        });
    }
    let reference_unit = match f.lookup.object(resource, &samm.reference_unit) {
        Some(reference) => Some(f.resolve_unit(reference)?),
        None => None,
    };
    let mut quantity_kinds = Vec::new();
    for kind in f.lookup.objects(resource, &samm.quantity_kind).collect::<Vec<_>>() {
        let kind = f.resolve_quantity_kind(kind)?;
        if !quantity_kinds.contains(&kind) {
            quantity_kinds.push(kind);
        }
    }
    Ok(Unit {
        base,
        symbol: f.lookup.string(resource, &samm.symbol)?,
        code: f.lookup.string(resource, &samm.common_code)?,
        reference_unit,
        conversion_factor: f.lookup.string(resource, &samm.conversion_factor)?,
        quantity_kinds,
    })
}

pub(crate) fn quantity_kind(
    f: &mut Factory<'_>,
    resource: &Term,
    shape: UnitShape,
) -> Result<QuantityKind> {
    let base = f.base(resource, "QuantityKind");
    if shape == UnitShape::Bare {
        f.info(
            resource,
            format!("quantity kind {} is not defined in the model; resolved by name only", base.name),
        );
    }
    Ok(QuantityKind { base })
}
