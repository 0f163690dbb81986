//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external --- e.g. a malformed evidence literal reports the offending text so a caller can surface the line.
//! - Non-convergence is *not* an error anywhere: search and learning report their final iterate and diagnostics, and accept/reject policy rests with the caller.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding areas of the library.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::AtomIndex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Grounding(GroundingError),
    Evidence(EvidenceError),
    State(StateError),

    /// A weight vector of the wrong length was supplied to the formula database.
    WeightCount { expected: usize, found: usize },
}

/// Noted errors during grounding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroundingError {
    /// A referenced domain is undefined or has zero elements.
    /// Fatal for the run, as a cross product over zero elements admits no groundings.
    EmptyDomain(String),

    /// A variable occurs at argument positions typed with different domains.
    DomainMismatch(String),

    /// A functional predicate was declared with no arguments, so there is no value position.
    FunctionalArity(String),

    /// A formula references a predicate absent from the catalog.
    UnknownPredicate(String),

    /// A literal applies a predicate to the wrong number of arguments.
    ArityMismatch {
        predicate: String,
        expected: usize,
        found: usize,
    },

    /// A bound literal does not correspond to any grounded atom.
    /// Perhaps a constant outside the argument's domain…?
    UnknownAtom(String),

    /// A literal retained a free variable after total substitution.
    UnboundVariable(String),

    /// A constant truth value survived into ground-formula construction.
    /// Unexpected: simplification folds constants to the root.
    ResidualConstant,
}

impl From<GroundingError> for ErrorKind {
    fn from(e: GroundingError) -> Self {
        ErrorKind::Grounding(e)
    }
}

/// Noted errors when parsing or applying evidence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvidenceError {
    /// The text matches neither the literal grammar `[!]p(a,…)` nor the assignment grammar `p(a,…)=v`.
    /// Carries the offending text.
    MalformedLiteral(String),

    /// The asserted predicate is absent from the catalog.
    UnknownPredicate(String),

    /// The asserted literal has the wrong number of arguments for its predicate.
    ArityMismatch {
        predicate: String,
        expected: usize,
        found: usize,
    },

    /// Two assertions give an atom opposite values, or two members of one block are asserted true.
    ValuationConflict(AtomIndex),
}

impl From<EvidenceError> for ErrorKind {
    fn from(e: EvidenceError) -> Self {
        ErrorKind::Evidence(e)
    }
}

/// Noted calls made while the context is in the wrong state.
///
/// These replace lazy failure: a missing precondition is rejected up front rather than partway through a procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The catalog or formulas were revised after grounding began.
    InputClosed,

    /// The call requires ground atoms, and atoms have not been grounded.
    AtomsRequired,

    /// The call requires a fully grounded model, and formulas have not been grounded.
    GroundingRequired,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
