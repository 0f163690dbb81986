/*!
First-order formulas, as a tree over literals, negation, conjunction, and disjunction.

The node kinds are a closed set:
- [Literal](Formula::Literal) --- a predicate applied to terms, with a polarity.
- [Not](Formula::Not) --- negation of a subformula.
- [And](Formula::And) / [Or](Formula::Or) --- conjunction / disjunction over a vector of subformulas.
- [Value](Formula::Value) --- a constant truth value, introduced by simplification.

Formulas are immutable once added to a context: grounding reads a formula, substitutes constants for its variables, and simplifies the result, but never mutates the source.

# Example

```rust
# use marmot::structures::formula::{Formula, Literal, Term};
# use std::collections::HashMap;
let p_x = Formula::Literal(Literal {
    predicate: "p".to_string(),
    args: vec![Term::Variable("x".to_string())],
    polarity: true,
});

let mut binding = HashMap::new();
binding.insert("x".to_string(), "a".to_string());

let p_a = p_x.substitute(&binding);
assert_eq!(p_a.to_string(), "p(a)");
```
*/

use std::collections::HashMap;

/// An argument of a literal: a bound constant or a free variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// A constant symbol from some domain.
    Constant(String),

    /// A free variable, to be bound during grounding.
    Variable(String),
}

impl Term {
    /// Whether the term is a free variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Constant(c) => write!(f, "{c}"),
            Term::Variable(v) => write!(f, "{v}"),
        }
    }
}

/// A predicate applied to an ordered list of terms, with a polarity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    /// The name of the predicate.
    pub predicate: String,

    /// The arguments of the literal, in signature order.
    pub args: Vec<Term>,

    /// True for a positive literal, false for a negated literal.
    pub polarity: bool,
}

/// A first-order formula.
#[derive(Clone, Debug, PartialEq)]
pub enum Formula {
    /// A literal.
    Literal(Literal),

    /// The negation of a subformula.
    Not(Box<Formula>),

    /// The conjunction of a vector of subformulas.
    And(Vec<Formula>),

    /// The disjunction of a vector of subformulas.
    Or(Vec<Formula>),

    /// A constant truth value.
    Value(bool),
}

impl Formula {
    /// The formula with every variable bound by `binding` replaced by the corresponding constant.
    ///
    /// Variables absent from the binding are left free.
    pub fn substitute(&self, binding: &HashMap<String, String>) -> Formula {
        match self {
            Formula::Literal(literal) => {
                let args = literal
                    .args
                    .iter()
                    .map(|term| match term {
                        Term::Constant(_) => term.clone(),

                        Term::Variable(v) => match binding.get(v) {
                            Some(constant) => Term::Constant(constant.clone()),
                            None => term.clone(),
                        },
                    })
                    .collect();

                Formula::Literal(Literal {
                    predicate: literal.predicate.clone(),
                    args,
                    polarity: literal.polarity,
                })
            }

            Formula::Not(subformula) => Formula::Not(Box::new(subformula.substitute(binding))),

            Formula::And(parts) => {
                Formula::And(parts.iter().map(|p| p.substitute(binding)).collect())
            }

            Formula::Or(parts) => {
                Formula::Or(parts.iter().map(|p| p.substitute(binding)).collect())
            }

            Formula::Value(v) => Formula::Value(*v),
        }
    }

    /// The formula with constant truth values folded away.
    ///
    /// After simplification the only node which may carry a [Value](Formula::Value) is the root.
    /// In particular:
    /// - A negated value is the opposite value.
    /// - A conjunction containing `false` is `false`, and true conjuncts are dropped (an empty conjunction is `true`).
    /// - A disjunction containing `true` is `true`, and false disjuncts are dropped (an empty disjunction is `false`).
    /// - A conjunction or disjunction over a single remaining part is that part.
    pub fn simplified(self) -> Formula {
        match self {
            Formula::Literal(_) | Formula::Value(_) => self,

            Formula::Not(subformula) => match subformula.simplified() {
                Formula::Value(v) => Formula::Value(!v),
                simplified => Formula::Not(Box::new(simplified)),
            },

            Formula::And(parts) => {
                let mut remaining = Vec::with_capacity(parts.len());

                for part in parts {
                    match part.simplified() {
                        Formula::Value(false) => return Formula::Value(false),
                        Formula::Value(true) => {}
                        simplified => remaining.push(simplified),
                    }
                }

                match remaining.len() {
                    0 => Formula::Value(true),
                    1 => remaining.pop().unwrap(),
                    _ => Formula::And(remaining),
                }
            }

            Formula::Or(parts) => {
                let mut remaining = Vec::with_capacity(parts.len());

                for part in parts {
                    match part.simplified() {
                        Formula::Value(true) => return Formula::Value(true),
                        Formula::Value(false) => {}
                        simplified => remaining.push(simplified),
                    }
                }

                match remaining.len() {
                    0 => Formula::Value(false),
                    1 => remaining.pop().unwrap(),
                    _ => Formula::Or(remaining),
                }
            }
        }
    }

    /// Applies `action` to every literal of the formula, in left-to-right order.
    pub fn for_each_literal<'f>(&'f self, action: &mut impl FnMut(&'f Literal)) {
        match self {
            Formula::Literal(literal) => action(literal),

            Formula::Not(subformula) => subformula.for_each_literal(action),

            Formula::And(parts) | Formula::Or(parts) => {
                for part in parts {
                    part.for_each_literal(action);
                }
            }

            Formula::Value(_) => {}
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Literal(literal) => {
                if !literal.polarity {
                    write!(f, "!")?;
                }
                let args = literal
                    .args
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{}({args})", literal.predicate)
            }

            Formula::Not(subformula) => write!(f, "!({subformula})"),

            Formula::And(parts) => {
                let inner = parts
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(" & ");
                write!(f, "({inner})")
            }

            Formula::Or(parts) => {
                let inner = parts
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(" | ");
                write!(f, "({inner})")
            }

            Formula::Value(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod simplification_tests {
    use super::*;

    fn literal(name: &str) -> Formula {
        Formula::Literal(Literal {
            predicate: name.to_string(),
            args: vec![Term::Constant("a".to_string())],
            polarity: true,
        })
    }

    #[test]
    fn negated_value() {
        let folded = Formula::Not(Box::new(Formula::Value(true))).simplified();
        assert_eq!(folded, Formula::Value(false));
    }

    #[test]
    fn conjunction_with_false() {
        let folded = Formula::And(vec![literal("p"), Formula::Value(false)]).simplified();
        assert_eq!(folded, Formula::Value(false));
    }

    #[test]
    fn disjunction_drops_false() {
        let folded = Formula::Or(vec![literal("p"), Formula::Value(false)]).simplified();
        assert_eq!(folded, literal("p"));
    }

    #[test]
    fn empty_conjunction_is_true() {
        assert_eq!(Formula::And(Vec::new()).simplified(), Formula::Value(true));
    }

    #[test]
    fn nested_folding_reaches_the_root() {
        let folded = Formula::Or(vec![
            Formula::And(vec![Formula::Value(true), Formula::Value(true)]),
            literal("p"),
        ])
        .simplified();
        assert_eq!(folded, Formula::Value(true));
    }
}
