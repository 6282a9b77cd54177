//! Structural equality over reflected object state.
//!
//! The original hamcrest "identical properties" idea: two values are the same
//! for diagnostic purposes when their public state is the same, recursively,
//! regardless of their nominal types. Rust has no runtime attribute
//! reflection, so state is made explicit: [`Structural`] reflects a value
//! into a small [`Value`] descriptor tree (usually via
//! `#[derive(Structural)]`), and [`equal_vars`] walks two such trees.
//!
//! There is no cycle protection: `Structural` is implemented over owned data,
//! which cannot form reference cycles, and a hand-written impl that traverses
//! an `Rc` cycle will recurse until the stack runs out. Deep diagnostics for
//! cyclic graphs are a non-goal.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::{Description, Matcher};

/// Reflected view of a value's public state.
///
/// Scalar leaves, sequences, string-keyed mappings, and named records. A leaf
/// that cannot be reflected more precisely is carried as [`Value::Opaque`]
/// text and compared textually.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `()` or `Option::None`.
    Unit,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    String(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Record {
        type_name: &'static str,
        fields: Vec<(&'static str, Value)>,
    },
    /// Pre-rendered text for leaves without a structural reflection.
    Opaque(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("None"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v:?}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Record { type_name, fields } => {
                if fields.is_empty() {
                    return f.write_str(type_name);
                }
                write!(f, "{type_name} {{ ")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str(" }")
            }
            Value::Opaque(text) => f.write_str(text),
        }
    }
}

/// Types that can reflect their public state as a [`Value`] tree.
///
/// Usually derived with `#[derive(Structural)]`; implemented here for
/// scalars, strings, sequences, tuples, options and string-keyed maps.
pub trait Structural {
    fn reflect(&self) -> Value;
}

macro_rules! structural_int {
    ($($ty:ty),*) => {
        $(impl Structural for $ty {
            fn reflect(&self) -> Value {
                Value::Int(*self as i64)
            }
        })*
    };
}

macro_rules! structural_uint {
    ($($ty:ty),*) => {
        $(impl Structural for $ty {
            fn reflect(&self) -> Value {
                Value::Uint(*self as u64)
            }
        })*
    };
}

structural_int!(i8, i16, i32, i64, isize);
structural_uint!(u8, u16, u32, u64, usize);

impl Structural for f32 {
    fn reflect(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Structural for f64 {
    fn reflect(&self) -> Value {
        Value::Float(*self)
    }
}

impl Structural for bool {
    fn reflect(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Structural for char {
    fn reflect(&self) -> Value {
        Value::Char(*self)
    }
}

impl Structural for str {
    fn reflect(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl Structural for String {
    fn reflect(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Structural for () {
    fn reflect(&self) -> Value {
        Value::Unit
    }
}

impl<T: Structural + ?Sized> Structural for &T {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<T: Structural + ?Sized> Structural for Box<T> {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<T: Structural> Structural for Option<T> {
    fn reflect(&self) -> Value {
        match self {
            None => Value::Unit,
            Some(value) => value.reflect(),
        }
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn reflect(&self) -> Value {
        Value::Seq(self.iter().map(Structural::reflect).collect())
    }
}

impl<T: Structural> Structural for [T] {
    fn reflect(&self) -> Value {
        Value::Seq(self.iter().map(Structural::reflect).collect())
    }
}

impl<T: Structural, const N: usize> Structural for [T; N] {
    fn reflect(&self) -> Value {
        Value::Seq(self.iter().map(Structural::reflect).collect())
    }
}

impl<A: Structural, B: Structural> Structural for (A, B) {
    fn reflect(&self) -> Value {
        Value::Seq(vec![self.0.reflect(), self.1.reflect()])
    }
}

impl<A: Structural, B: Structural, C: Structural> Structural for (A, B, C) {
    fn reflect(&self) -> Value {
        Value::Seq(vec![self.0.reflect(), self.1.reflect(), self.2.reflect()])
    }
}

impl<A: Structural, B: Structural, C: Structural, D: Structural> Structural for (A, B, C, D) {
    fn reflect(&self) -> Value {
        Value::Seq(vec![
            self.0.reflect(),
            self.1.reflect(),
            self.2.reflect(),
            self.3.reflect(),
        ])
    }
}

impl<K, V, S> Structural for std::collections::HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Structural,
{
    fn reflect(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.reflect()))
                .collect(),
        )
    }
}

impl<K, V> Structural for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Structural,
{
    fn reflect(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.reflect()))
                .collect(),
        )
    }
}

/// Compares two values for structural equality, recursing into nested state.
///
/// Field names in `ignoring` are excluded at every level of recursion, by
/// name, not by path. Records compare by field-name set and field values;
/// nominal type names are NOT compared, so differently-typed values with
/// identical state are equal. Sequences of differing length are never equal.
/// Mappings require identical key sets (ignored names do not apply to map
/// keys). Mixed kinds are unequal. Never panics.
///
/// ```rust
/// use matcha::{Structural, equal_vars};
///
/// #[derive(Structural)]
/// struct Point { x: i32, y: i32 }
///
/// let a = Point { x: 1, y: 2 };
/// let b = Point { x: 1, y: 9 };
///
/// assert!(!equal_vars(&a, &b, &[]));
/// assert!(equal_vars(&a, &b, &["y"]));
/// ```
pub fn equal_vars<L, R>(left: &L, right: &R, ignoring: &[&str]) -> bool
where
    L: Structural + ?Sized,
    R: Structural + ?Sized,
{
    let ignoring: BTreeSet<String> = ignoring.iter().map(|s| (*s).to_owned()).collect();
    value_eq(&left.reflect(), &right.reflect(), &ignoring)
}

/// Reduces a record's fields to a name-keyed map, dropping ignored names and
/// deduplicating by first occurrence.
fn field_map<'a>(
    fields: &'a [(&'static str, Value)],
    ignoring: &BTreeSet<String>,
) -> BTreeMap<&'a str, &'a Value> {
    let mut map = BTreeMap::new();
    for (name, value) in fields {
        if ignoring.contains(*name) {
            continue;
        }
        map.entry(*name).or_insert(value);
    }
    map
}

fn value_eq(left: &Value, right: &Value, ignoring: &BTreeSet<String>) -> bool {
    match (left, right) {
        (
            Value::Record { fields: left, .. },
            Value::Record {
                fields: right, ..
            },
        ) => {
            let left = field_map(left, ignoring);
            let right = field_map(right, ignoring);
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(name, lv)| match right.get(name) {
                        Some(rv) => value_eq(lv, rv, ignoring),
                        None => false,
                    })
        }
        (Value::Seq(left), Value::Seq(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(lv, rv)| value_eq(lv, rv, ignoring))
        }
        (Value::Map(left), Value::Map(right)) => {
            left.len() == right.len()
                && left.keys().eq(right.keys())
                && left
                    .values()
                    .zip(right.values())
                    .all(|(lv, rv)| value_eq(lv, rv, ignoring))
        }
        // Signedness does not make numbers unequal.
        (Value::Int(l), Value::Uint(r)) => *l >= 0 && *l as u64 == *r,
        (Value::Uint(l), Value::Int(r)) => *r >= 0 && *l == *r as u64,
        (Value::Unit, Value::Unit) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Int(l), Value::Int(r)) => l == r,
        (Value::Uint(l), Value::Uint(r)) => l == r,
        (Value::Float(l), Value::Float(r)) => l == r,
        (Value::Char(l), Value::Char(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Opaque(l), Value::Opaque(r)) => l == r,
        _ => false,
    }
}

/// The first structural divergence between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Dotted/indexed path to the divergence; empty at the root.
    pub path: String,
    /// Rendering of the actual value at that path.
    pub actual: String,
    /// Rendering of the expected value at that path.
    pub expected: String,
}

enum Segment {
    Field(&'static str),
    Index(usize),
    Key(String),
}

fn render_path(path: &[Segment]) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            Segment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Index(i) => out.push_str(&format!("[{i}]")),
            Segment::Key(k) => out.push_str(&format!("[{k:?}]")),
        }
    }
    out
}

/// Finds the first path at which `actual` and `expected` diverge, or `None`
/// when they are structurally equal. Record fields are visited in declaration
/// order, sequences by index, maps by sorted key.
pub fn first_difference<L, R>(actual: &L, expected: &R, ignoring: &[&str]) -> Option<Difference>
where
    L: Structural + ?Sized,
    R: Structural + ?Sized,
{
    let ignoring: BTreeSet<String> = ignoring.iter().map(|s| (*s).to_owned()).collect();
    let mut path = Vec::new();
    diff(&actual.reflect(), &expected.reflect(), &ignoring, &mut path)
}

fn diff(
    actual: &Value,
    expected: &Value,
    ignoring: &BTreeSet<String>,
    path: &mut Vec<Segment>,
) -> Option<Difference> {
    if value_eq(actual, expected, ignoring) {
        return None;
    }
    match (actual, expected) {
        (
            Value::Record { fields: left, .. },
            Value::Record {
                fields: right, ..
            },
        ) => {
            let left_map = field_map(left, ignoring);
            let right_map = field_map(right, ignoring);
            if !left_map.keys().eq(right_map.keys()) {
                return Some(difference_at(path, actual, expected));
            }
            let mut seen = BTreeSet::new();
            for (name, left_value) in left {
                if ignoring.contains(*name) || !seen.insert(*name) {
                    continue;
                }
                let right_value = right_map[name];
                path.push(Segment::Field(name));
                if let Some(found) = diff(left_value, right_value, ignoring, path) {
                    return Some(found);
                }
                path.pop();
            }
            Some(difference_at(path, actual, expected))
        }
        (Value::Seq(left), Value::Seq(right)) => {
            if left.len() != right.len() {
                return Some(difference_at(path, actual, expected));
            }
            for (i, (left_value, right_value)) in left.iter().zip(right).enumerate() {
                path.push(Segment::Index(i));
                if let Some(found) = diff(left_value, right_value, ignoring, path) {
                    return Some(found);
                }
                path.pop();
            }
            Some(difference_at(path, actual, expected))
        }
        (Value::Map(left), Value::Map(right)) => {
            if !left.keys().eq(right.keys()) {
                return Some(difference_at(path, actual, expected));
            }
            for (key, left_value) in left {
                let right_value = &right[key];
                path.push(Segment::Key(key.clone()));
                if let Some(found) = diff(left_value, right_value, ignoring, path) {
                    return Some(found);
                }
                path.pop();
            }
            Some(difference_at(path, actual, expected))
        }
        _ => Some(difference_at(path, actual, expected)),
    }
}

fn difference_at(path: &[Segment], actual: &Value, expected: &Value) -> Difference {
    Difference {
        path: render_path(path),
        actual: actual.to_string(),
        expected: expected.to_string(),
    }
}

/// Matches objects whose reflected state equals that of an expected value.
pub struct HasIdenticalPropertiesTo {
    expected: Value,
    expected_repr: String,
    ignoring: BTreeSet<String>,
}

/// Matches any [`Structural`] value whose public state is recursively equal
/// to that of `expected`, regardless of nominal type.
///
/// ```rust
/// use matcha::{Structural, assert_that, has_identical_properties_to};
///
/// #[derive(Debug, Structural)]
/// struct Point { x: i32, y: i32 }
///
/// let drawn = Point { x: 3, y: 4 };
/// assert_that(&drawn, has_identical_properties_to(&Point { x: 3, y: 4 }));
/// assert_that(&drawn, has_identical_properties_to(&Point { x: 3, y: 0 }).ignoring("y"));
/// ```
pub fn has_identical_properties_to<E>(expected: &E) -> HasIdenticalPropertiesTo
where
    E: Structural + fmt::Debug + ?Sized,
{
    HasIdenticalPropertiesTo {
        expected: expected.reflect(),
        expected_repr: format!("{expected:?}"),
        ignoring: BTreeSet::new(),
    }
}

impl HasIdenticalPropertiesTo {
    /// Excludes a field name from the comparison, at every level.
    pub fn ignoring(mut self, field: impl Into<String>) -> Self {
        self.ignoring.insert(field.into());
        self
    }

    /// Excludes several field names from the comparison.
    pub fn ignoring_all<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignoring.extend(fields.into_iter().map(Into::into));
        self
    }

    fn diff_against(&self, actual: &Value) -> Option<Difference> {
        let mut path = Vec::new();
        diff(actual, &self.expected, &self.ignoring, &mut path)
    }
}

impl<A: Structural + ?Sized> Matcher<A> for HasIdenticalPropertiesTo {
    fn matches(&self, actual: &A) -> bool {
        value_eq(&actual.reflect(), &self.expected, &self.ignoring)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("object with identical properties to ")
            .append_text(&self.expected_repr);
        if !self.ignoring.is_empty() {
            description
                .append_text(" ignoring fields ")
                .append_value(&self.ignoring);
        }
    }

    fn describe_mismatch(&self, actual: &A, description: &mut Description) {
        let reflected = actual.reflect();
        match self.diff_against(&reflected) {
            Some(difference) if !difference.path.is_empty() => {
                description
                    .append_text("differed at `")
                    .append_text(&difference.path)
                    .append_text("`: was ")
                    .append_text(&difference.actual)
                    .append_text(", expected ")
                    .append_text(&difference.expected);
            }
            _ => {
                description
                    .append_text("was ")
                    .append_text(&reflected.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(type_name: &'static str, fields: Vec<(&'static str, Value)>) -> Value {
        Value::Record { type_name, fields }
    }

    #[test]
    fn signedness_does_not_make_numbers_unequal() {
        let ignoring = BTreeSet::new();
        assert!(value_eq(&Value::Int(5), &Value::Uint(5), &ignoring));
        assert!(value_eq(&Value::Uint(5), &Value::Int(5), &ignoring));
        assert!(!value_eq(&Value::Int(-1), &Value::Uint(u64::MAX), &ignoring));
    }

    #[test]
    fn records_compare_by_state_not_type_name() {
        let ignoring = BTreeSet::new();
        let left = record("SomeClass", vec![("a", Value::Int(1))]);
        let right = record("OtherClass", vec![("a", Value::Int(1))]);
        assert!(value_eq(&left, &right, &ignoring));
    }

    #[test]
    fn duplicate_field_names_keep_first_occurrence() {
        let ignoring = BTreeSet::new();
        let left = record("T", vec![("a", Value::Int(1)), ("a", Value::Int(2))]);
        let right = record("T", vec![("a", Value::Int(1))]);
        assert!(value_eq(&left, &right, &ignoring));
    }

    #[test]
    fn first_difference_reports_nested_field_path() {
        let left = record(
            "Outer",
            vec![(
                "inner",
                record("Inner", vec![("x", Value::Int(1)), ("y", Value::Int(2))]),
            )],
        );
        let right = record(
            "Outer",
            vec![(
                "inner",
                record("Inner", vec![("x", Value::Int(1)), ("y", Value::Int(3))]),
            )],
        );
        let mut path = Vec::new();
        let found = diff(&left, &right, &BTreeSet::new(), &mut path).unwrap();
        assert_eq!(found.path, "inner.y");
        assert_eq!(found.actual, "2");
        assert_eq!(found.expected, "3");
    }

    #[test]
    fn first_difference_reports_seq_index_and_map_key() {
        let left = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        let right = Value::Seq(vec![Value::Int(1), Value::Int(9)]);
        let mut path = Vec::new();
        let found = diff(&left, &right, &BTreeSet::new(), &mut path).unwrap();
        assert_eq!(found.path, "[1]");

        let left = Value::Map(BTreeMap::from([("k".to_owned(), Value::Int(1))]));
        let right = Value::Map(BTreeMap::from([("k".to_owned(), Value::Int(2))]));
        let mut path = Vec::new();
        let found = diff(&left, &right, &BTreeSet::new(), &mut path).unwrap();
        assert_eq!(found.path, "[\"k\"]");
    }

    #[test]
    fn rendering_is_debug_like() {
        let value = record(
            "Point",
            vec![("x", Value::Int(3)), ("label", Value::String("a".into()))],
        );
        assert_eq!(value.to_string(), "Point { x: 3, label: \"a\" }");
        assert_eq!(Value::Seq(vec![Value::Unit]).to_string(), "[None]");
    }
}
