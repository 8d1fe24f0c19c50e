//! Turtle loading through `sophia_turtle`.

use sophia_api::prelude::*;
use sophia_api::term::SimpleTerm;
use sophia_turtle::parser::turtle;

use super::{Literal, Term, Triple, TripleGraph};
use crate::error::LoadError;

impl TripleGraph {
    /// Parses a Turtle document and merges its statements into this graph,
    /// attributed to `origin`. Returns the number of new statements.
    ///
    /// Blank node labels are scoped to the loaded source, so loading several
    /// documents never merges their anonymous resources.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Syntax`] if the document is not valid Turtle, and
    /// [`LoadError::UnsupportedTerm`] for RDF-star triples or variables.
    pub fn load_turtle(&mut self, src: &str, origin: &str) -> Result<usize, LoadError> {
        let parsed: Vec<[SimpleTerm<'static>; 3]> = turtle::parse_str(src)
            .collect_triples()
            .map_err(|e| LoadError::Syntax {
                origin: origin.to_owned(),
                message: e.to_string(),
            })?;

        let source = self.add_source(origin);
        let mut added = 0;
        for [s, p, o] in &parsed {
            let predicate = match convert(p, source, origin)? {
                Term::Iri(iri) => iri,
                other => {
                    return Err(LoadError::UnsupportedTerm {
                        origin: origin.to_owned(),
                        term: other.to_string(),
                    })
                }
            };
            let triple = Triple {
                subject: convert(s, source, origin)?,
                predicate,
                object: convert(o, source, origin)?,
            };
            let stored = self
                .insert(triple, Some(source))
                .map_err(|error| LoadError::UnsupportedTerm {
                    origin: origin.to_owned(),
                    term: error.to_string(),
                })?;
            if stored {
                added += 1;
            }
        }
        log::debug!("loaded {added} statements from {origin}");
        Ok(added)
    }
}

fn convert(term: &SimpleTerm<'_>, source: usize, origin: &str) -> Result<Term, LoadError> {
    match term {
        SimpleTerm::Iri(iri) => Ok(Term::Iri(iri.as_str().to_owned())),
        SimpleTerm::BlankNode(id) => Ok(Term::Blank(format!("{source}.{}", id.as_str()))),
        SimpleTerm::LiteralDatatype(lexical, datatype) => Ok(Term::Literal(Literal {
            lexical: lexical.to_string(),
            datatype: datatype.as_str().to_owned(),
            language: None,
        })),
        SimpleTerm::LiteralLanguage(lexical, language) => Ok(Term::lang_string(
            lexical.to_string(),
            language.as_str().to_owned(),
        )),
        other => Err(LoadError::UnsupportedTerm {
            origin: origin.to_owned(),
            term: format!("{other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspect_meta_model::iris;

    const DOC: &str = r#"
        @prefix : <urn:samm:org.example:1.0.0#> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
        :a :p "text" , "Text"@en , 5 ;
           :q [ :r :b ] ;
           :l ( :x :y ) .
    "#;

    #[test]
    fn literals_keep_datatype_and_language() {
        let mut graph = TripleGraph::new();
        let added = graph.load_turtle(DOC, "doc.ttl");
        assert!(added.is_ok());
        let a = Term::iri("urn:samm:org.example:1.0.0#a");
        let objects: Vec<_> = graph
            .objects(&a, "urn:samm:org.example:1.0.0#p")
            .cloned()
            .collect();
        assert!(objects.contains(&Term::string("text")));
        assert!(objects.contains(&Term::lang_string("Text", "en")));
        assert!(objects.contains(&Term::literal("5", iris::XSD_INTEGER)));
        assert_eq!(graph.origin(&a), Some("doc.ttl"));
    }

    #[test]
    fn blank_nodes_are_scoped_per_source() {
        let mut graph = TripleGraph::new();
        let doc = "<urn:x#a> <urn:x#p> _:b1 . _:b1 <urn:x#q> \"v\" .";
        assert_eq!(graph.load_turtle(doc, "one.ttl"), Ok(2));
        assert_eq!(graph.load_turtle(doc, "two.ttl"), Ok(2));
        let blanks: Vec<_> = graph
            .objects(&Term::iri("urn:x#a"), "urn:x#p")
            .collect();
        assert_eq!(blanks.len(), 2);
        assert_ne!(blanks[0], blanks[1]);
    }

    #[test]
    fn collections_become_lists() {
        let mut graph = TripleGraph::new();
        assert!(graph.load_turtle(DOC, "doc.ttl").is_ok());
        let a = Term::iri("urn:samm:org.example:1.0.0#a");
        let head = graph.object(&a, "urn:samm:org.example:1.0.0#l");
        let members = head.map(|h| graph.list(h).map(|m| m.len()));
        assert_eq!(members, Some(Ok(2)));
    }

    #[test]
    fn syntax_errors_are_reported() {
        let mut graph = TripleGraph::new();
        let err = graph.load_turtle("<urn:x#a> <urn:x#p> .", "bad.ttl");
        assert!(matches!(err, Err(LoadError::Syntax { origin, .. }) if origin == "bad.ttl"));
        assert!(graph.is_empty());
    }
}
