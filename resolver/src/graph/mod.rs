//! In-memory triple graph.
//!
//! [`TripleGraph`] is the read-only input of resolution: a merged set of
//! statements indexed by a `sophia_inmem` store, with stable blank node
//! identity and a per-subject origin lookup. Graphs are filled from Turtle sources with
//! [`TripleGraph::load_turtle`] or programmatically with [`GraphBuilder`].

mod turtle;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::vec;

use aspect_meta_model::iris;
use sophia_api::graph::{Graph, MutableGraph};
use sophia_api::term::matcher::Any;
use sophia_api::term::{BnodeId, IriRef, LanguageTag, SimpleTerm, Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as _;
use sophia_api::MownStr;
use sophia_inmem::graph::FastGraph;

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A named resource.
    Iri(String),
    /// An anonymous resource. The identifier is unique within one graph.
    Blank(String),
    /// A literal.
    Literal(Literal),
}

/// A literal term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI; `rdf:langString` for language-tagged literals.
    pub datatype: String,
    /// Language tag, for `rdf:langString` literals.
    pub language: Option<String>,
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(id: impl Into<String>) -> Self {
        Term::Blank(id.into())
    }

    /// Creates a typed literal.
    pub fn literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Term::literal(lexical, iris::XSD_STRING)
    }

    /// Creates a language-tagged literal.
    pub fn lang_string(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: iris::RDF_LANG_STRING.to_owned(),
            language: Some(language.into()),
        })
    }

    /// Returns the IRI of a named resource.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal, if this is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Returns true for IRIs and blank nodes.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        !matches!(self, Term::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(id) => write!(f, "_:{id}"),
            Term::Literal(literal) => match &literal.language {
                Some(language) => write!(f, "{:?}@{language}", literal.lexical),
                None => write!(f, "{:?}^^<{}>", literal.lexical, literal.datatype),
            },
        }
    }
}

/// One statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject: an IRI or blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

/// Raised when an `rdf:List` cannot be walked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A list node reappears while walking the list.
    #[error("list node {0} is visited twice")]
    Cycle(Term),
    /// A list node lacks `rdf:first` or `rdf:rest`.
    #[error("list node {0} lacks rdf:first or rdf:rest")]
    Malformed(Term),
}

/// Raised when a statement cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An IRI, blank node label or language tag is not well-formed.
    #[error("{0} is not a well-formed RDF term")]
    InvalidTerm(String),
    /// The underlying store refused the statement.
    #[error("statement store: {0}")]
    Store(String),
}

/// A read-only set of triples held in a `sophia_inmem` [`FastGraph`].
///
/// The store answers the pattern queries. Alongside it the graph keeps the
/// owned [`Term`] of every stored node, ranked by first appearance, so
/// answers come back as `&Term` in a stable order, plus the subjects in
/// order of first appearance and the source of each subject's first
/// statement.
pub struct TripleGraph {
    store: FastGraph,
    terms: HashMap<Term, usize>,
    subjects: Vec<Term>,
    origins: HashMap<Term, Option<usize>>,
    sources: Vec<String>,
    len: usize,
}

impl Default for TripleGraph {
    fn default() -> Self {
        Self {
            store: FastGraph::new(),
            terms: HashMap::new(),
            subjects: Vec::new(),
            origins: HashMap::new(),
            sources: Vec::new(),
            len: 0,
        }
    }
}

impl fmt::Debug for TripleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleGraph")
            .field("statements", &self.len)
            .field("subjects", &self.subjects.len())
            .field("sources", &self.sources)
            .finish()
    }
}

/// Borrows `term` as a sophia term; `None` if it is not well-formed.
fn sophia_term(term: &Term) -> Option<SimpleTerm<'_>> {
    Some(match term {
        Term::Iri(iri) => SimpleTerm::Iri(IriRef::new(MownStr::from(iri.as_str())).ok()?),
        Term::Blank(id) => SimpleTerm::BlankNode(BnodeId::new(MownStr::from(id.as_str())).ok()?),
        Term::Literal(literal) => {
            let lexical = MownStr::from(literal.lexical.as_str());
            match &literal.language {
                Some(tag) => SimpleTerm::LiteralLanguage(
                    lexical,
                    LanguageTag::new(MownStr::from(tag.as_str())).ok()?,
                ),
                None => SimpleTerm::LiteralDatatype(
                    lexical,
                    IriRef::new(MownStr::from(literal.datatype.as_str())).ok()?,
                ),
            }
        }
    })
}

fn sophia_iri(iri: &str) -> Option<SimpleTerm<'_>> {
    IriRef::new(MownStr::from(iri)).ok().map(SimpleTerm::Iri)
}

fn in_rank_order<K: Ord + Copy, T>(mut found: Vec<(K, T)>) -> vec::IntoIter<T> {
    found.sort_by_key(|(rank, _)| *rank);
    found
        .into_iter()
        .map(|(_, item)| item)
        .collect::<Vec<_>>()
        .into_iter()
}

/// Converts a stored sophia term back to a [`Term`].
fn owned_term<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::iri(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::blank(id.as_str())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            match term.language_tag() {
                Some(tag) => Some(Term::lang_string(lexical, tag.as_str())),
                None => term
                    .datatype()
                    .map(|datatype| Term::literal(lexical, datatype.as_str())),
            }
        }
        _ => None,
    }
}

impl TripleGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the graph has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the names of the sources loaded so far.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Registers a source name and returns its index.
    pub fn add_source(&mut self, name: impl Into<String>) -> usize {
        self.sources.push(name.into());
        self.sources.len() - 1
    }

    /// Inserts a statement, attributed to a source index. Returns false if
    /// the statement was already present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidTerm`] if a term is not well-formed RDF,
    /// and [`GraphError::Store`] if the store is full.
    pub fn insert(&mut self, triple: Triple, origin: Option<usize>) -> Result<bool, GraphError> {
        let Triple {
            subject,
            predicate,
            object,
        } = triple;
        let predicate = Term::Iri(predicate);
        let added = {
            let invalid = |term: &Term| GraphError::InvalidTerm(term.to_string());
            let s = sophia_term(&subject).ok_or_else(|| invalid(&subject))?;
            let p = sophia_term(&predicate).ok_or_else(|| invalid(&predicate))?;
            let o = sophia_term(&object).ok_or_else(|| invalid(&object))?;
            self.store
                .insert(s, p, o)
                .map_err(|e| GraphError::Store(e.to_string()))?
        };
        if !added {
            return Ok(false);
        }
        for term in [&subject, &predicate, &object] {
            if !self.terms.contains_key(term) {
                let rank = self.terms.len();
                self.terms.insert(term.clone(), rank);
            }
        }
        if !self.origins.contains_key(&subject) {
            self.origins.insert(subject.clone(), origin);
            self.subjects.push(subject);
        }
        self.len += 1;
        Ok(true)
    }

    /// Maps a stored term to its owned view and rank.
    fn stored<T: SophiaTerm>(&self, term: T) -> Option<(&Term, usize)> {
        let term = owned_term(term)?;
        self.terms.get_key_value(&term).map(|(term, rank)| (term, *rank))
    }

    /// Iterates all statements, grouped by subject in order of first
    /// appearance.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.subjects.iter().flat_map(move |subject| {
            self.statements(subject).map(move |(predicate, object)| Triple {
                subject: subject.clone(),
                predicate: predicate.to_owned(),
                object: object.clone(),
            })
        })
    }

    /// Returns the `(predicate, object)` pairs of the statements about
    /// `subject`.
    pub fn statements<'a>(
        &'a self,
        subject: &Term,
    ) -> vec::IntoIter<(&'a str, &'a Term)> {
        let Some(s) = sophia_term(subject) else {
            return Vec::new().into_iter();
        };
        let found: Vec<((usize, usize), (&'a str, &'a Term))> = self
            .store
            .triples_matching([s], Any, Any)
            .flatten()
            .filter_map(|t| {
                let (predicate, p_rank) = self.stored(t.p())?;
                let (object, o_rank) = self.stored(t.o())?;
                Some(((p_rank, o_rank), (predicate.as_iri()?, object)))
            })
            .collect();
        in_rank_order(found)
    }

    /// Returns true if `subject` has at least one statement.
    #[must_use]
    pub fn has_statements(&self, subject: &Term) -> bool {
        self.origins.contains_key(subject)
    }

    /// Returns the objects of `(subject, predicate, ?)` in order of first
    /// appearance.
    pub fn objects<'a>(
        &'a self,
        subject: &Term,
        predicate: &str,
    ) -> vec::IntoIter<&'a Term> {
        let (Some(s), Some(p)) = (sophia_term(subject), sophia_iri(predicate)) else {
            return Vec::new().into_iter();
        };
        let found: Vec<(usize, &'a Term)> = self
            .store
            .triples_matching([s], [p], Any)
            .flatten()
            .filter_map(|t| self.stored(t.o()).map(|(object, rank)| (rank, object)))
            .collect();
        in_rank_order(found)
    }

    /// Returns the first object of `(subject, predicate, ?)`.
    #[must_use]
    pub fn object<'a>(&'a self, subject: &Term, predicate: &str) -> Option<&'a Term> {
        self.objects(subject, predicate).next()
    }

    /// Returns the subjects of `(?, predicate, object)` in order of first
    /// appearance.
    pub fn subjects<'a>(
        &'a self,
        predicate: &str,
        object: &Term,
    ) -> vec::IntoIter<&'a Term> {
        let (Some(p), Some(o)) = (sophia_iri(predicate), sophia_term(object)) else {
            return Vec::new().into_iter();
        };
        let found: Vec<(usize, &'a Term)> = self
            .store
            .triples_matching(Any, [p], [o])
            .flatten()
            .filter_map(|t| self.stored(t.s()).map(|(subject, rank)| (rank, subject)))
            .collect();
        in_rank_order(found)
    }

    /// Iterates the distinct subjects in order of first appearance.
    pub fn subject_terms(&self) -> impl Iterator<Item = &Term> + '_ {
        self.subjects.iter()
    }

    /// Returns true if `(subject, predicate, object)` is present.
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        match (sophia_term(subject), sophia_iri(predicate), sophia_term(object)) {
            (Some(s), Some(p), Some(o)) => self.store.contains(s, p, o).unwrap_or(false),
            _ => false,
        }
    }

    /// Returns the source of the first statement about `subject`.
    #[must_use]
    pub fn origin(&self, subject: &Term) -> Option<&str> {
        let source = (*self.origins.get(subject)?)?;
        self.sources.get(source).map(String::as_str)
    }

    /// Returns true if `node` is `rdf:nil` or an `rdf:List` cell.
    #[must_use]
    pub fn is_list(&self, node: &Term) -> bool {
        node.as_iri() == Some(iris::RDF_NIL) || self.object(node, iris::RDF_FIRST).is_some()
    }

    /// Collects the members of the `rdf:List` starting at `head`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] if a cell lacks `rdf:first`/`rdf:rest` or the
    /// list loops back on itself.
    pub fn list<'a>(&'a self, head: &'a Term) -> Result<Vec<&'a Term>, ListError> {
        let mut members = Vec::new();
        let mut visited = HashSet::new();
        let mut node = head;
        while node.as_iri() != Some(iris::RDF_NIL) {
            if !visited.insert(node) {
                return Err(ListError::Cycle(node.clone()));
            }
            let first = self
                .object(node, iris::RDF_FIRST)
                .ok_or_else(|| ListError::Malformed(node.clone()))?;
            members.push(first);
            node = self
                .object(node, iris::RDF_REST)
                .ok_or_else(|| ListError::Malformed(node.clone()))?;
        }
        Ok(members)
    }
}

/// Programmatic [`TripleGraph`] construction.
///
/// ```
/// use aspect_model_resolver::{GraphBuilder, Term};
///
/// let graph = GraphBuilder::new()
///     .source("inline.ttl")
///     .triple(Term::iri("urn:x#a"), "urn:x#p", Term::string("v"))
///     .build();
/// assert_eq!(graph.len(), 1);
/// assert_eq!(graph.origin(&Term::iri("urn:x#a")), Some("inline.ttl"));
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: TripleGraph,
    source: Option<usize>,
    lists: usize,
}

impl GraphBuilder {
    /// Starts an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes the statements added from now on to `name`.
    #[must_use]
    pub fn source(mut self, name: impl Into<String>) -> Self {
        self.source = Some(self.graph.add_source(name));
        self
    }

    /// Adds one statement.
    #[must_use]
    pub fn triple(mut self, subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        self.push(subject, predicate.into(), object);
        self
    }

    /// Adds `(subject, predicate, list)` where `list` is a fresh `rdf:List`
    /// holding `members`.
    #[must_use]
    pub fn list(
        mut self,
        subject: Term,
        predicate: impl Into<String>,
        members: impl IntoIterator<Item = Term>,
    ) -> Self {
        let head = self.push_list(members.into_iter().collect());
        self.push(subject, predicate.into(), head);
        self
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> TripleGraph {
        self.graph
    }

    fn push(&mut self, subject: Term, predicate: String, object: Term) {
        let triple = Triple {
            subject,
            predicate,
            object,
        };
        if let Err(error) = self.graph.insert(triple, self.source) {
            log::warn!("statement dropped: {error}");
        }
    }

    fn push_list(&mut self, members: Vec<Term>) -> Term {
        let list = self.lists;
        self.lists += 1;
        let mut rest = Term::iri(iris::RDF_NIL);
        for (i, member) in members.into_iter().enumerate().rev() {
            let cell = Term::blank(format!("list{list}.{i}"));
            self.push(cell.clone(), iris::RDF_FIRST.to_owned(), member);
            self.push(cell.clone(), iris::RDF_REST.to_owned(), rest);
            rest = cell;
        }
        rest
    }
}
