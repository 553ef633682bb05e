use arrow::datatypes::Schema;
use arrow::temporal_conversions::date32_to_datetime;
use datafusion::common::ScalarValue;
use datafusion::logical_expr::{BinaryExpr, Expr, Operator};
use std::fmt;
use tracing::debug;

/// Comparison kind of a predicate leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl ComparisonOp {
    pub fn is_equality(self) -> bool {
        self == ComparisonOp::Eq
    }

    /// Operator to use when the operands are swapped (`5 < x` ⇔ `x > 5`)
    pub fn mirrored(self) -> Self {
        match self {
            ComparisonOp::Lt => ComparisonOp::Gt,
            ComparisonOp::Gt => ComparisonOp::Lt,
            ComparisonOp::Le => ComparisonOp::Ge,
            ComparisonOp::Ge => ComparisonOp::Le,
            ComparisonOp::Eq => ComparisonOp::Eq,
            ComparisonOp::Ne => ComparisonOp::Ne,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "<>",
        }
    }

    fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Lt => Some(ComparisonOp::Lt),
            Operator::Gt => Some(ComparisonOp::Gt),
            Operator::LtEq => Some(ComparisonOp::Le),
            Operator::GtEq => Some(ComparisonOp::Ge),
            Operator::Eq => Some(ComparisonOp::Eq),
            Operator::NotEq => Some(ComparisonOp::Ne),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparison of the form `column <op> constant`
///
/// `column_index` is the column's position in the table's full column
/// list, not in the partition key list.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateLeaf {
    pub column_index: usize,
    pub operator: ComparisonOp,
    pub constant: ScalarValue,
}

impl PredicateLeaf {
    pub fn new(column_index: usize, operator: ComparisonOp, constant: impl Into<ScalarValue>) -> Self {
        Self {
            column_index,
            operator,
            constant: constant.into(),
        }
    }

    /// Shorthand for an equality leaf
    pub fn equals(column_index: usize, constant: impl Into<ScalarValue>) -> Self {
        Self::new(column_index, ComparisonOp::Eq, constant)
    }

    /// String literal form of the constant, as it would appear in a partition path
    ///
    /// `None` when the constant's type has no single canonical rendering
    /// (floats, timestamps, decimals, ...). `1.0` may be written `1` or `1.0`,
    /// so such a leaf cannot prove a partition mismatches.
    pub fn literal(&self) -> Option<String> {
        canonical_literal(&self.constant)
    }
}

fn canonical_literal(value: &ScalarValue) -> Option<String> {
    match value {
        ScalarValue::Utf8(Some(s))
        | ScalarValue::LargeUtf8(Some(s))
        | ScalarValue::Utf8View(Some(s)) => Some(s.clone()),
        ScalarValue::Dictionary(_, inner) => canonical_literal(inner),
        ScalarValue::Boolean(Some(b)) => Some(b.to_string()),
        ScalarValue::Int8(Some(v)) => Some(v.to_string()),
        ScalarValue::Int16(Some(v)) => Some(v.to_string()),
        ScalarValue::Int32(Some(v)) => Some(v.to_string()),
        ScalarValue::Int64(Some(v)) => Some(v.to_string()),
        ScalarValue::UInt8(Some(v)) => Some(v.to_string()),
        ScalarValue::UInt16(Some(v)) => Some(v.to_string()),
        ScalarValue::UInt32(Some(v)) => Some(v.to_string()),
        ScalarValue::UInt64(Some(v)) => Some(v.to_string()),
        ScalarValue::Date32(Some(days)) => {
            date32_to_datetime(*days).map(|datetime| datetime.date().to_string())
        }
        _ => None,
    }
}

/// Pushed-down predicate: one leaf, or leaves combined with AND
///
/// The upstream predicate language has no OR, NOT or nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateTree {
    Leaf(PredicateLeaf),
    And(Vec<PredicateLeaf>),
}

impl PredicateTree {
    /// All leaves, in evaluation order
    pub fn leaves(&self) -> &[PredicateLeaf] {
        match self {
            PredicateTree::Leaf(leaf) => std::slice::from_ref(leaf),
            PredicateTree::And(leaves) => leaves,
        }
    }

    /// Collapse a leaf list into the tightest tree shape
    pub fn from_leaves(mut leaves: Vec<PredicateLeaf>) -> Option<Self> {
        match leaves.len() {
            0 => None,
            1 => leaves.pop().map(PredicateTree::Leaf),
            _ => Some(PredicateTree::And(leaves)),
        }
    }

    /// Translate DataFusion filter expressions into a predicate tree
    ///
    /// Filters are implicitly AND-ed (that is how `TableProvider::scan`
    /// receives them). Conjunctions are flattened and every
    /// `column <op> literal` comparison becomes a leaf.
    ///
    /// Example:
    /// ```text
    /// [year = '2020' AND region = 'US', amount > 10 OR amount < 0]
    ///   → And([#1 = 2020, #2 = US])     (the OR is dropped)
    /// ```
    ///
    /// Anything else is dropped: removing a conjunct only widens the
    /// filter, so the result never prunes more than the original.
    pub fn from_filters(filters: &[Expr], schema: &Schema) -> Option<Self> {
        let mut leaves = Vec::new();
        for filter in filters {
            collect_leaves(filter, schema, &mut leaves);
        }
        Self::from_leaves(leaves)
    }
}

impl From<PredicateLeaf> for PredicateTree {
    fn from(leaf: PredicateLeaf) -> Self {
        PredicateTree::Leaf(leaf)
    }
}

fn collect_leaves(expr: &Expr, schema: &Schema, leaves: &mut Vec<PredicateLeaf>) {
    match expr {
        Expr::BinaryExpr(BinaryExpr {
            left,
            op: Operator::And,
            right,
        }) => {
            collect_leaves(left, schema, leaves);
            collect_leaves(right, schema, leaves);
        }
        Expr::BinaryExpr(binary) => match leaf_from_binary(binary, schema) {
            Some(leaf) => leaves.push(leaf),
            None => debug!("Dropping filter with no partition predicate form: {expr}"),
        },
        _ => debug!("Dropping filter with no partition predicate form: {expr}"),
    }
}

fn leaf_from_binary(binary: &BinaryExpr, schema: &Schema) -> Option<PredicateLeaf> {
    let op = ComparisonOp::from_operator(binary.op)?;
    let (column, constant, operator) = match (binary.left.as_ref(), binary.right.as_ref()) {
        (Expr::Column(column), Expr::Literal(value)) => (column, value, op),
        (Expr::Literal(value), Expr::Column(column)) => (column, value, op.mirrored()),
        _ => return None,
    };

    // NULL never compares equal; leave it to the row filter
    if constant.is_null() {
        return None;
    }

    let column_index = schema.index_of(&column.name).ok()?;
    Some(PredicateLeaf::new(column_index, operator, constant.clone()))
}
