/*!
The domain & predicate catalog --- the typed vocabulary a model is written in.

Things include:
- Domains, mapping a domain name to an ordered set of constant symbols. \
  Insertion order is preserved, so grounding is deterministic.
- Predicates, mapping a predicate name to an ordered list of argument domains. \
  A predicate may be *functional* (multi-valued): its last argument is a value position, and the ground atoms sharing a prefix of the other arguments are mutually exclusive and exhaustive.
- The set of closed-world predicates, whose untrue ground atoms are assumed false absent explicit evidence.

The catalog is immutable after model load: grounding only reads it.
*/

use std::collections::{HashMap, HashSet};

use crate::types::err::{self, ErrorKind};

/// A named, ordered set of constant symbols.
#[derive(Clone, Debug)]
pub struct Domain {
    /// The name of the domain.
    pub name: String,

    /// The constants of the domain, in insertion order.
    constants: Vec<String>,

    /// Constant → position, for dedup on insertion.
    positions: HashMap<String, usize>,
}

impl Domain {
    fn new(name: String) -> Self {
        Domain {
            name,
            constants: Vec::default(),
            positions: HashMap::default(),
        }
    }

    /// The constants of the domain, in insertion order.
    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    /// The number of constants in the domain.
    pub fn size(&self) -> usize {
        self.constants.len()
    }

    fn insert(&mut self, constant: String) {
        if !self.positions.contains_key(&constant) {
            self.positions.insert(constant.clone(), self.constants.len());
            self.constants.push(constant);
        }
    }
}

/// A named predicate with a typed argument signature.
#[derive(Clone, Debug)]
pub struct Predicate {
    /// The name of the predicate.
    pub name: String,

    /// The domain names of the arguments, in order. Arity is the length.
    pub signature: Vec<String>,

    /// Whether the predicate is functional (multi-valued), with its last argument as the value position.
    pub functional: bool,
}

impl Predicate {
    /// The arity of the predicate.
    pub fn arity(&self) -> usize {
        self.signature.len()
    }
}

/// The catalog of domains and predicates, and the closed-world set.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    domains: Vec<Domain>,
    domain_ids: HashMap<String, usize>,

    predicates: Vec<Predicate>,
    predicate_ids: HashMap<String, usize>,

    closed_world: HashSet<String>,
}

impl Catalog {
    /// Adds a domain with the given constants, extending the domain if it already exists.
    pub fn add_domain(
        &mut self,
        name: &str,
        constants: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let id = match self.domain_ids.get(name) {
            Some(id) => *id,
            None => {
                let id = self.domains.len();
                self.domains.push(Domain::new(name.to_string()));
                self.domain_ids.insert(name.to_string(), id);
                id
            }
        };

        for constant in constants {
            self.domains[id].insert(constant.into());
        }
    }

    /// Adds a single constant to a domain, creating the domain if required.
    pub fn add_constant(&mut self, domain: &str, constant: impl Into<String>) {
        self.add_domain(domain, [constant.into()]);
    }

    /// Adds a predicate with the given signature.
    ///
    /// A functional predicate must have at least one argument, as its last argument is the value position.
    pub fn add_predicate(
        &mut self,
        name: &str,
        signature: &[&str],
        functional: bool,
    ) -> Result<(), ErrorKind> {
        if functional && signature.is_empty() {
            return Err(err::GroundingError::FunctionalArity(name.to_string()).into());
        }

        let id = self.predicates.len();
        self.predicates.push(Predicate {
            name: name.to_string(),
            signature: signature.iter().map(|d| d.to_string()).collect(),
            functional,
        });
        self.predicate_ids.insert(name.to_string(), id);
        Ok(())
    }

    /// Marks a predicate as closed-world.
    pub fn set_closed_world(&mut self, predicate: &str) {
        self.closed_world.insert(predicate.to_string());
    }

    /// Whether the named predicate is closed-world.
    pub fn is_closed_world(&self, predicate: &str) -> bool {
        self.closed_world.contains(predicate)
    }

    /// The named domain, if defined.
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domain_ids.get(name).map(|id| &self.domains[*id])
    }

    /// The constants of the named domain.
    ///
    /// An undefined or empty domain is an [EmptyDomain](err::GroundingError::EmptyDomain) error, as a cross product over zero elements admits no groundings.
    pub fn constants(&self, domain: &str) -> Result<&[String], ErrorKind> {
        match self.domain(domain) {
            Some(d) if d.size() > 0 => Ok(d.constants()),
            _ => Err(err::GroundingError::EmptyDomain(domain.to_string()).into()),
        }
    }

    /// The named predicate, if defined.
    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.predicate_ids.get(name).map(|id| &self.predicates[*id])
    }

    /// The predicates of the catalog, in insertion order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}
