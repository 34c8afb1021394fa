//! Predicate and query evaluation.
//!
//! A query is a sequence of top-level tokens. Runs of tokens between `OR`
//! separators form AND-groups: each group folds by intersection from the
//! universal set, and the group results are unioned starting from the empty
//! concrete set. A single token is one of: a negation (`-token`), a fully
//! parenthesized sub-query, a field-scoped comparison, or a free-text
//! substring search across every field.

use std::cmp::Ordering;

use ledgersieve_core::{Entry, EntrySet, Field, NaiveDate};

use crate::error::QueryError;
use crate::tokenizer::tokenize;

/// The token separating AND-groups.
const OR_SEPARATOR: &str = "OR";

/// An ordering comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderOp {
    Lt,
    Gt,
    Le,
    Ge,
}

impl OrderOp {
    fn accepts(self, ord: Ordering) -> bool {
        match self {
            Self::Lt => ord == Ordering::Less,
            Self::Gt => ord == Ordering::Greater,
            Self::Le => ord != Ordering::Greater,
            Self::Ge => ord != Ordering::Less,
        }
    }
}

/// A field-scoped comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareOp {
    /// Substring containment, legal on every field.
    Contains,
    /// Ordering comparison, legal on comparable fields only.
    Order(OrderOp),
}

impl CompareOp {
    /// Operator table in match priority: two-character operators must come
    /// before their one-character prefixes so `<` never matches inside `<=`.
    const TABLE: [(&'static str, Self); 5] = [
        (":", Self::Contains),
        (">=", Self::Order(OrderOp::Ge)),
        ("<=", Self::Order(OrderOp::Le)),
        ("<", Self::Order(OrderOp::Lt)),
        (">", Self::Order(OrderOp::Gt)),
    ];
}

/// Evaluate a query against a universe of entries.
///
/// An empty (or all-whitespace) query is the identity: it returns the
/// universe unchanged as a concrete set.
///
/// # Errors
///
/// Returns a [`QueryError`] on unbalanced parentheses, a misplaced `OR`,
/// a malformed comparison token, an ordering operator on a non-comparable
/// field, or an unparsable date or integer bound.
pub fn query(universe: &[Entry], text: &str) -> Result<EntrySet, QueryError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Ok(EntrySet::concrete(universe.to_vec()));
    }
    if tokens.len() == 1 {
        return evaluate_token(universe, &tokens[0]);
    }

    let mut groups = Vec::new();
    let mut acc = EntrySet::Universal;
    for token in &tokens {
        if token == OR_SEPARATOR {
            if acc.is_universal() {
                return Err(QueryError::MisplacedOr);
            }
            groups.push(std::mem::replace(&mut acc, EntrySet::Universal));
        } else {
            acc = acc.intersection(&evaluate_token(universe, token)?);
        }
    }
    groups.push(acc);

    let mut result = EntrySet::empty();
    for group in &groups {
        result = result.union(group);
    }
    Ok(result)
}

/// Evaluate one token against a universe of entries.
///
/// Dispatch priority: negation, parenthesized sub-query, field-scoped
/// comparison, free-text match. Each leading `-` applies one complement
/// pass against `universe`; the complement of a negated token is always
/// taken against the universe of the enclosing evaluation, never against
/// some global set.
///
/// # Errors
///
/// Same failure modes as [`query`].
pub fn evaluate_token(universe: &[Entry], token: &str) -> Result<EntrySet, QueryError> {
    if let Some(rest) = token.strip_prefix('-') {
        return Ok(evaluate_token(universe, rest)?.complement_within(universe));
    }

    if token.starts_with('(') {
        let interior = token
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .ok_or(QueryError::UnclosedParen)?;
        return query(universe, interior);
    }

    for (symbol, op) in CompareOp::TABLE {
        if let Some((field_name, value)) = token.split_once(symbol) {
            return compare(universe, token, field_name, op, value);
        }
    }

    Ok(free_text(universe, token))
}

/// Evaluate a `field{op}value` comparison token.
fn compare(
    universe: &[Entry],
    token: &str,
    field_name: &str,
    op: CompareOp,
    value: &str,
) -> Result<EntrySet, QueryError> {
    if field_name.is_empty() || value.is_empty() {
        return Err(QueryError::MalformedComparison(token.to_string()));
    }
    let field = Field::from_name(field_name)
        .ok_or_else(|| QueryError::UnknownField(field_name.to_string()))?;

    let order = match op {
        CompareOp::Contains => {
            return Ok(universe
                .iter()
                .filter(|entry| entry.get(field).contains(value))
                .cloned()
                .collect());
        }
        CompareOp::Order(order) => order,
    };

    match field {
        Field::Date => {
            let bound = parse_date(value)?;
            let mut hits = Vec::new();
            for entry in universe {
                let actual = parse_date(entry.get(Field::Date))?;
                if order.accepts(actual.cmp(&bound)) {
                    hits.push(entry.clone());
                }
            }
            Ok(EntrySet::concrete(hits))
        }
        Field::Id => {
            let bound: u64 = parse_int(value)?;
            Ok(universe
                .iter()
                .filter(|entry| order.accepts(entry.id().cmp(&bound)))
                .cloned()
                .collect())
        }
        Field::Amount => {
            let bound: i64 = parse_int(value)?;
            Ok(universe
                .iter()
                .filter(|entry| order.accepts(entry.amount().cmp(&bound)))
                .cloned()
                .collect())
        }
        _ => Err(QueryError::NotComparable(field)),
    }
}

/// Match entries where any field contains `needle`.
fn free_text(universe: &[Entry], needle: &str) -> EntrySet {
    universe
        .iter()
        .filter(|entry| entry.values().any(|value| value.contains(needle)))
        .cloned()
        .collect()
}

/// Parse a slash- or dash-delimited year-month-day date.
fn parse_date(text: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(&text.replace('/', "-"), "%Y-%m-%d")
        .map_err(|_| QueryError::InvalidDate(text.to_string()))
}

fn parse_int<T: std::str::FromStr>(text: &str) -> Result<T, QueryError> {
    text.parse()
        .map_err(|_| QueryError::InvalidNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn entry(id: u64, date: &str, amount: i64, description: &str, label: &str) -> Entry {
        Entry::new([
            id.to_string(),
            date.to_string(),
            "食".to_string(),
            "午餐".to_string(),
            amount.to_string(),
            description.to_string(),
            label.to_string(),
        ])
        .unwrap()
    }

    fn universe() -> Vec<Entry> {
        vec![
            entry(1, "2020/06/21", 285, "公館豚骨拉麵", "拉麵"),
            entry(2, "2020/06/22", 120, "巷口蛋餅", "早餐"),
            entry(3, "2020/06/23", 550, "夏季衣物", "治裝"),
        ]
    }

    fn ids(set: &EntrySet) -> Vec<u64> {
        set.entries().unwrap().iter().map(Entry::id).collect()
    }

    #[test]
    fn test_free_text_matches_any_field() {
        let u = universe();
        assert_eq!(ids(&evaluate_token(&u, "拉麵").unwrap()), vec![1]);
        assert_eq!(ids(&evaluate_token(&u, "餅").unwrap()), vec![2]);
        assert_eq!(ids(&evaluate_token(&u, "午餐").unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn test_contains_is_field_scoped_and_case_sensitive() {
        let u = vec![entry(1, "2020/06/21", 10, "Coffee", "x")];
        assert_eq!(ids(&evaluate_token(&u, "description:Coff").unwrap()), vec![1]);
        assert!(ids(&evaluate_token(&u, "description:coff").unwrap()).is_empty());
        assert!(ids(&evaluate_token(&u, "label:Coff").unwrap()).is_empty());
    }

    #[test]
    fn test_ordering_operators() {
        let u = universe();
        assert_eq!(ids(&evaluate_token(&u, "amount>=285").unwrap()), vec![1, 3]);
        assert_eq!(ids(&evaluate_token(&u, "amount>285").unwrap()), vec![3]);
        assert_eq!(ids(&evaluate_token(&u, "amount<=285").unwrap()), vec![1, 2]);
        assert_eq!(ids(&evaluate_token(&u, "amount<285").unwrap()), vec![2]);
        assert_eq!(ids(&evaluate_token(&u, "id>1").unwrap()), vec![2, 3]);
    }

    #[test]
    fn test_date_comparison_accepts_both_delimiters() {
        let u = universe();
        assert_eq!(ids(&evaluate_token(&u, "date>2020-06-21").unwrap()), vec![2, 3]);
        assert_eq!(ids(&evaluate_token(&u, "date>=2020/06/22").unwrap()), vec![2, 3]);
    }

    #[test]
    fn test_ordering_on_non_comparable_field() {
        let err = evaluate_token(&universe(), "label>=a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(matches!(err, QueryError::NotComparable(Field::Label)));
    }

    #[test]
    fn test_unknown_field() {
        let err = evaluate_token(&universe(), "currency:TWD").unwrap_err();
        assert!(matches!(err, QueryError::UnknownField(_)));
        assert_eq!(err.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn test_malformed_comparison() {
        for token in ["amount>=", ":value", "label:"] {
            let err = evaluate_token(&universe(), token).unwrap_err();
            assert!(matches!(err, QueryError::MalformedComparison(_)), "{token}");
            assert_eq!(err.kind(), ErrorKind::Syntax);
        }
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            evaluate_token(&universe(), "amount>=ten").unwrap_err(),
            QueryError::InvalidNumber(_)
        ));
        assert!(matches!(
            evaluate_token(&universe(), "date>junk").unwrap_err(),
            QueryError::InvalidDate(_)
        ));
    }

    #[test]
    fn test_value_may_contain_operator_character() {
        // Split happens at the first `:` only.
        let u = vec![entry(1, "2020/06/21", 10, "a:b", "x")];
        assert_eq!(ids(&evaluate_token(&u, "description:a:b").unwrap()), vec![1]);
    }

    #[test]
    fn test_negation_and_double_negation() {
        let u = universe();
        assert_eq!(ids(&evaluate_token(&u, "-拉麵").unwrap()), vec![2, 3]);
        assert_eq!(ids(&evaluate_token(&u, "--拉麵").unwrap()), vec![1]);
    }

    #[test]
    fn test_negation_scope_is_the_enclosing_universe() {
        // Against a narrowed universe the complement stays inside it.
        let narrowed = vec![universe()[0].clone(), universe()[1].clone()];
        assert_eq!(ids(&evaluate_token(&narrowed, "-拉麵").unwrap()), vec![2]);
    }

    #[test]
    fn test_parenthesized_sub_query() {
        let u = universe();
        assert_eq!(
            ids(&evaluate_token(&u, "(拉麵 OR 早餐)").unwrap()),
            vec![1, 2]
        );
    }

    #[test]
    fn test_empty_query_is_identity() {
        let u = universe();
        assert_eq!(query(&u, "").unwrap(), EntrySet::concrete(u.clone()));
        assert_eq!(query(&u, "   ").unwrap(), EntrySet::concrete(u));
    }

    #[test]
    fn test_and_is_juxtaposition() {
        let u = universe();
        assert_eq!(ids(&query(&u, "食 amount>200").unwrap()), vec![1, 3]);
    }

    #[test]
    fn test_or_groups() {
        let u = universe();
        assert_eq!(ids(&query(&u, "拉麵 OR amount>500").unwrap()), vec![1, 3]);
    }

    #[test]
    fn test_misplaced_or() {
        let u = universe();
        for text in ["OR 拉麵 OR x", "拉麵 OR OR 早餐"] {
            let err = query(&u, text).unwrap_err();
            assert!(matches!(err, QueryError::MisplacedOr), "{text}");
            assert_eq!(err.kind(), ErrorKind::Syntax);
        }
    }

    #[test]
    fn test_lone_or_token_is_free_text() {
        // A single-token query is evaluated directly, so "OR" alone is a
        // free-text search for the literal characters.
        let u = vec![entry(1, "2020/06/21", 10, "DOOR", "x")];
        assert_eq!(ids(&query(&u, "OR").unwrap()), vec![1]);
    }
}
