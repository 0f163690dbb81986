/*!
Parsing of evidence literal text.

Two grammars are accepted:
- The literal form `pred(a,…)`, optionally negated as `!pred(a,…)`.
- The assignment form `pred(a,…)=value`, where a value of `True` or `False` sets the truth of the atom, and any other value is appended as a final argument and asserted true (a multi-valued selection).

Anything which matches neither grammar is a [MalformedLiteral](crate::types::err::EvidenceError::MalformedLiteral) error carrying the offending text.

# Examples

```rust
# use marmot::builder::literal::parse_literal;
assert_eq!(
    parse_literal("!friends(anna, bob)").unwrap(),
    ("friends".to_string(), vec!["anna".to_string(), "bob".to_string()], false),
);

assert_eq!(
    parse_literal("topic(d1)=sports").unwrap(),
    ("topic".to_string(), vec!["d1".to_string(), "sports".to_string()], true),
);

assert!(parse_literal("topic(d1").is_err());
```
*/

use crate::types::err::{self, ErrorKind};

fn malformed(text: &str) -> ErrorKind {
    err::EvidenceError::MalformedLiteral(text.to_string()).into()
}

/// Parses an evidence literal, normalizing both accepted grammars to a (predicate, args, truth) tuple.
pub fn parse_literal(text: &str) -> Result<(String, Vec<String>, bool), ErrorKind> {
    let trimmed = text.trim();

    let (negated, body) = match trimmed.strip_prefix('!') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let open = body.find('(').ok_or_else(|| malformed(text))?;
    let close = body.find(')').ok_or_else(|| malformed(text))?;
    if close < open {
        return Err(malformed(text));
    }

    let predicate = body[..open].trim();
    if predicate.is_empty() || predicate.contains(char::is_whitespace) {
        return Err(malformed(text));
    }

    let inner = body[open + 1..close].trim();
    let mut args: Vec<String> = Vec::default();
    if !inner.is_empty() {
        for arg in inner.split(',') {
            let arg = arg.trim();
            if arg.is_empty() {
                return Err(malformed(text));
            }
            args.push(arg.to_string());
        }
    }

    let rest = body[close + 1..].trim();
    let mut truth = !negated;

    if !rest.is_empty() {
        let value = match rest.strip_prefix('=') {
            Some(value) => value.trim(),
            None => return Err(malformed(text)),
        };

        match value {
            "" => return Err(malformed(text)),

            "True" => truth = !negated,

            "False" => truth = negated,

            selection => {
                // A multi-valued selection has no sensible negation.
                if negated {
                    return Err(malformed(text));
                }
                args.push(selection.to_string());
                truth = true;
            }
        }
    }

    Ok((predicate.to_string(), args, truth))
}
