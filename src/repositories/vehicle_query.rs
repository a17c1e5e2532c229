//! Vehicle listing query builder
//!
//! Filters are collected as typed predicates (column, operator, value) and
//! rendered with `sqlx::QueryBuilder`. User input only ever reaches the
//! database through `push_bind`, never through the SQL text.

use sqlx::{Postgres, QueryBuilder};

use crate::models::vehicle::VehicleFilters;

pub const TABLE: &str = r#""UsedInventory""#;

/// Columns of the `UsedInventory` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    StockNumber,
    Vin,
    Status,
    StatusPrefix,
    Make,
    Model,
    Year,
    New,
    ListPrice,
}

impl Column {
    /// Quoted SQL identifier.
    pub fn identifier(self) -> &'static str {
        match self {
            Column::Id => r#""ID""#,
            Column::StockNumber => r#""STOCK_NUMBER""#,
            Column::Vin => r#""VIN""#,
            Column::Status => r#""STATUS""#,
            Column::StatusPrefix => r#""StatusPrefix1""#,
            Column::Make => r#""MAKE""#,
            Column::Model => r#""MODEL""#,
            Column::Year => r#""YEAR""#,
            Column::New => r#""NEW""#,
            Column::ListPrice => r#""ListPrice""#,
        }
    }
}

/// Columns selected by the listing, in output order.
pub const SUMMARY_COLUMNS: [Column; 9] = [
    Column::Id,
    Column::StockNumber,
    Column::Status,
    Column::Make,
    Column::Model,
    Column::Year,
    Column::New,
    Column::ListPrice,
    Column::StatusPrefix,
];

pub const STATUS_PREFIXES_SQL: &str = r#"SELECT DISTINCT "StatusPrefix1" FROM "UsedInventory" WHERE "StatusPrefix1" IS NOT NULL ORDER BY "StatusPrefix1""#;

// LIMIT 2 is enough to notice a duplicated identifier
pub const FIND_BY_ID_SQL: &str = r#"SELECT * FROM "UsedInventory" WHERE "ID" = $1 LIMIT 2"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    /// Case-insensitive substring match, wildcards on both sides.
    ContainsIgnoreCase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Integer(i32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: Column,
    pub operator: Operator,
    /// Value as supplied by the caller, before any pattern wrapping.
    pub value: FilterValue,
}

impl Predicate {
    pub fn equals(column: Column, value: i32) -> Self {
        Self {
            column,
            operator: Operator::Equals,
            value: FilterValue::Integer(value),
        }
    }

    pub fn contains_ignore_case(column: Column, text: impl Into<String>) -> Self {
        Self {
            column,
            operator: Operator::ContainsIgnoreCase,
            value: FilterValue::Text(text.into()),
        }
    }

    /// The value that is actually bound to the statement.
    pub fn bound_value(&self) -> FilterValue {
        match (&self.operator, &self.value) {
            (Operator::ContainsIgnoreCase, FilterValue::Text(text)) => {
                FilterValue::Text(format!("%{}%", escape_like(text)))
            }
            (_, value) => value.clone(),
        }
    }

    fn render(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        builder.push(self.column.identifier());
        builder.push(match self.operator {
            Operator::Equals => " = ",
            Operator::ContainsIgnoreCase => " ILIKE ",
        });
        match self.bound_value() {
            FilterValue::Integer(value) => builder.push_bind(value),
            FilterValue::Text(value) => builder.push_bind(value),
        };
    }
}

/// Escapes LIKE metacharacters so user text is matched literally.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Listing query with AND-combined predicates. No predicate means every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleQuery {
    predicates: Vec<Predicate>,
}

impl VehicleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_filters(filters: &VehicleFilters) -> Self {
        let mut query = Self::new();
        if let Some(prefix) = filters.status_prefix {
            query = query.filter(Predicate::equals(Column::StatusPrefix, prefix));
        }
        if let Some(stock_number) = &filters.stock_number {
            query = query.filter(Predicate::contains_ignore_case(
                Column::StockNumber,
                stock_number.as_str(),
            ));
        }
        if let Some(vin) = &filters.vin {
            query = query.filter(Predicate::contains_ignore_case(Column::Vin, vin.as_str()));
        }
        query
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        for (i, column) in SUMMARY_COLUMNS.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(column.identifier());
        }
        builder.push(" FROM ").push(TABLE);

        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.render(&mut builder);
        }
        builder
    }

    /// SQL text with `$n` placeholders.
    pub fn sql(&self) -> String {
        self.build().sql().to_string()
    }

    /// Bound values in placeholder order.
    pub fn bound_values(&self) -> Vec<FilterValue> {
        self.predicates.iter().map(Predicate::bound_value).collect()
    }
}
