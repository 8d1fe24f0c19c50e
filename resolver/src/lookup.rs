//! Fixed-predicate reads over the model graph and the built-in graph.
//!
//! The built-in graph holds the meta model's predefined elements. A subject
//! is read from the model graph when the model says anything about it, and
//! from the built-in graph otherwise, so a model may redefine a predefined
//! element.

use aspect_meta_model::iris;

use crate::error::{ResolutionError, Result};
use crate::graph::{ListError, Literal, Term, TripleGraph};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Lookup<'r> {
    model: &'r TripleGraph,
    builtin: Option<&'r TripleGraph>,
}

impl<'r> Lookup<'r> {
    pub(crate) fn new(model: &'r TripleGraph, builtin: Option<&'r TripleGraph>) -> Self {
        Self { model, builtin }
    }

    fn layer(&self, subject: &Term) -> &'r TripleGraph {
        match self.builtin {
            Some(builtin) if !self.model.has_statements(subject) => builtin,
            _ => self.model,
        }
    }

    pub(crate) fn has_statements(&self, subject: &Term) -> bool {
        self.layer(subject).has_statements(subject)
    }

    pub(crate) fn statements(
        &self,
        subject: &Term,
    ) -> impl Iterator<Item = (&'r str, &'r Term)> + 'r {
        self.layer(subject).statements(subject)
    }

    pub(crate) fn objects(&self, subject: &Term, predicate: &str) -> impl Iterator<Item = &'r Term> + 'r {
        self.layer(subject).objects(subject, predicate)
    }

    pub(crate) fn object(&self, subject: &Term, predicate: &str) -> Option<&'r Term> {
        self.layer(subject).object(subject, predicate)
    }

    /// Subjects of `(?, predicate, object)` across both graphs, model first.
    pub(crate) fn subjects(&self, predicate: &str, object: &Term) -> Vec<&'r Term> {
        let mut subjects: Vec<&'r Term> = self.model.subjects(predicate, object).collect();
        if let Some(builtin) = self.builtin {
            for subject in builtin.subjects(predicate, object) {
                if !self.model.has_statements(subject) && !subjects.contains(&subject) {
                    subjects.push(subject);
                }
            }
        }
        subjects
    }

    pub(crate) fn origin(&self, subject: &Term) -> Option<&'r str> {
        self.layer(subject).origin(subject)
    }

    /// The IRIs `subject` is typed with.
    pub(crate) fn types(&self, subject: &Term) -> Vec<&'r str> {
        self.objects(subject, iris::RDF_TYPE)
            .filter_map(Term::as_iri)
            .collect()
    }

    pub(crate) fn has_type(&self, subject: &Term, class: &str) -> bool {
        self.objects(subject, iris::RDF_TYPE)
            .any(|t| t.as_iri() == Some(class))
    }

    pub(crate) fn required(
        &self,
        subject: &Term,
        predicate: &str,
        expected: &str,
    ) -> Result<&'r Term> {
        self.object(subject, predicate)
            .ok_or_else(|| ResolutionError::missing(subject, predicate, expected))
    }

    /// The members of the list at `(subject, predicate)`, read from the
    /// subject's graph. `None` if the predicate is absent.
    pub(crate) fn list_of(&self, subject: &Term, predicate: &str) -> Result<Option<Vec<&'r Term>>> {
        let graph = self.layer(subject);
        match graph.object(subject, predicate) {
            Some(head) => graph.list(head).map(Some).map_err(list_error),
            None => Ok(None),
        }
    }

    /// The members of the list starting at `head`.
    pub(crate) fn list(&self, head: &'r Term) -> Result<Vec<&'r Term>> {
        self.layer(head).list(head).map_err(list_error)
    }

    pub(crate) fn is_list(&self, node: &Term) -> bool {
        self.layer(node).is_list(node)
    }

    pub(crate) fn literal(&self, subject: &Term, predicate: &str) -> Result<Option<&'r Literal>> {
        match self.object(subject, predicate) {
            None => Ok(None),
            Some(Term::Literal(literal)) => Ok(Some(literal)),
            Some(other) => Err(ResolutionError::unsupported(
                subject,
                format!("a literal as {predicate}, found {other}"),
            )),
        }
    }

    pub(crate) fn string(&self, subject: &Term, predicate: &str) -> Result<Option<String>> {
        Ok(self
            .literal(subject, predicate)?
            .map(|literal| literal.lexical.clone()))
    }

    /// A boolean flag; absent means false.
    pub(crate) fn flag(&self, subject: &Term, predicate: &str) -> Result<bool> {
        match self.literal(subject, predicate)? {
            None => Ok(false),
            Some(literal) => match literal.lexical.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(ResolutionError::malformed(subject, other, "xsd:boolean")),
            },
        }
    }

    pub(crate) fn unsigned(&self, subject: &Term, predicate: &str) -> Result<Option<u64>> {
        match self.literal(subject, predicate)? {
            None => Ok(None),
            Some(literal) => literal
                .lexical
                .trim()
                .trim_start_matches('+')
                .parse()
                .map(Some)
                .map_err(|_| {
                    ResolutionError::malformed(subject, &literal.lexical, "a non-negative integer")
                }),
        }
    }
}

fn list_error(error: ListError) -> ResolutionError {
    let node = match &error {
        ListError::Cycle(node) | ListError::Malformed(node) => node,
    };
    ResolutionError::unsupported(node, format!("a well-formed rdf:List ({error})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn model_shadows_builtin() {
        let text = Term::iri("urn:x#Text");
        let model = GraphBuilder::new()
            .triple(text.clone(), "urn:x#p", Term::string("model"))
            .build();
        let builtin = GraphBuilder::new()
            .triple(text.clone(), "urn:x#p", Term::string("builtin"))
            .triple(Term::iri("urn:x#Other"), "urn:x#p", Term::string("builtin"))
            .build();
        let lookup = Lookup::new(&model, Some(&builtin));
        assert_eq!(lookup.object(&text, "urn:x#p"), Some(&Term::string("model")));
        assert_eq!(
            lookup.object(&Term::iri("urn:x#Other"), "urn:x#p"),
            Some(&Term::string("builtin"))
        );
    }

    #[test]
    fn flags_and_numbers() {
        let s = Term::iri("urn:x#s");
        let graph = GraphBuilder::new()
            .triple(s.clone(), "urn:x#yes", Term::literal("true", iris::XSD_BOOLEAN))
            .triple(s.clone(), "urn:x#bad", Term::literal("yes", iris::XSD_BOOLEAN))
            .triple(s.clone(), "urn:x#n", Term::literal("12", iris::XSD_INTEGER))
            .triple(s.clone(), "urn:x#neg", Term::literal("-1", iris::XSD_INTEGER))
            .build();
        let lookup = Lookup::new(&graph, None);
        assert_eq!(lookup.flag(&s, "urn:x#yes"), Ok(true));
        assert_eq!(lookup.flag(&s, "urn:x#absent"), Ok(false));
        assert!(matches!(
            lookup.flag(&s, "urn:x#bad"),
            Err(ResolutionError::MalformedLiteral { .. })
        ));
        assert_eq!(lookup.unsigned(&s, "urn:x#n"), Ok(Some(12)));
        assert!(matches!(
            lookup.unsigned(&s, "urn:x#neg"),
            Err(ResolutionError::MalformedLiteral { .. })
        ));
    }

    #[test]
    fn missing_attribute_names_predicate() {
        let s = Term::iri("urn:x#s");
        let graph = TripleGraph::new();
        let lookup = Lookup::new(&graph, None);
        let err = lookup.required(&s, "urn:x#p", "a p");
        assert_eq!(
            err,
            Err(ResolutionError::MissingRequiredAttribute {
                resource: "<urn:x#s>".to_owned(),
                attribute: "urn:x#p".to_owned(),
                expected: "a p".to_owned(),
            })
        );
    }
}
