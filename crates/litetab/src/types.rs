//! Column types and constraint modifiers.
//!
//! A column type is a [`BaseType`] followed by zero or more modifiers, in the
//! order they were applied:
//!
//! ```rust
//! use litetab::types::{BaseType, ColumnType};
//!
//! let ty = ColumnType::from(BaseType::Integer).unique().default("Joe")?;
//! assert_eq!(ty.to_sql(), r#"INTEGER UNIQUE DEFAULT "Joe""#);
//! # Ok::<(), litetab::OrmError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{OrmError, OrmResult};
use crate::literal::to_sql_literal;
use crate::value::Value;

/// Base storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Text,
    Integer,
    Boolean,
    Real,
    Blob,
    Null,
}

impl BaseType {
    /// Canonical SQL spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOL",
            Self::Real => "REAL",
            Self::Blob => "BLOB",
            Self::Null => "NULL",
        }
    }

    /// Whether a declared column type names a boolean column.
    pub(crate) fn is_boolean_decl(decl: &str) -> bool {
        matches!(decl.parse::<BaseType>(), Ok(Self::Boolean))
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseType {
    type Err = OrmError;

    /// Resolve a type name or alias, case-insensitively.
    fn from_str(s: &str) -> OrmResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Ok(Self::Text),
            "INT" | "INTEGER" => Ok(Self::Integer),
            "BOOL" | "BOOLEAN" => Ok(Self::Boolean),
            "REAL" | "FLOAT" | "DOUBLE" => Ok(Self::Real),
            "BLOB" => Ok(Self::Blob),
            "NULL" => Ok(Self::Null),
            other => Err(OrmError::validation(format!("Unknown column type: {other}"))),
        }
    }
}

/// A constraint suffix on a column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    PrimaryKey,
    NotNull,
    Unique,
    /// Already-formatted default literal.
    Default(String),
}

impl Modifier {
    fn write_sql(&self, out: &mut String) {
        match self {
            Self::PrimaryKey => out.push_str("PRIMARY KEY"),
            Self::NotNull => out.push_str("NOT NULL"),
            Self::Unique => out.push_str("UNIQUE"),
            Self::Default(lit) => {
                out.push_str("DEFAULT ");
                out.push_str(lit);
            }
        }
    }
}

/// A base type with its modifiers, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    base: BaseType,
    modifiers: Vec<Modifier>,
}

impl ColumnType {
    pub fn new(base: BaseType) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    pub fn base(&self) -> BaseType {
        self.base
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    fn with_modifier(&self, modifier: Modifier) -> Self {
        let mut next = self.clone();
        next.modifiers.push(modifier);
        next
    }

    /// Append `PRIMARY KEY`.
    pub fn primary_key(&self) -> Self {
        self.with_modifier(Modifier::PrimaryKey)
    }

    /// Append `NOT NULL`.
    pub fn not_null(&self) -> Self {
        self.with_modifier(Modifier::NotNull)
    }

    /// Append `UNIQUE`.
    pub fn unique(&self) -> Self {
        self.with_modifier(Modifier::Unique)
    }

    /// Append `DEFAULT <literal>`.
    ///
    /// Fails when the value has no valid literal form (see [`crate::literal`]).
    pub fn default(&self, value: impl Into<Value>) -> OrmResult<Self> {
        let lit = to_sql_literal(&value.into())?;
        Ok(self.with_modifier(Modifier::Default(lit)))
    }

    /// Render as `<BASE> [MODIFIER ...]`.
    pub fn to_sql(&self) -> String {
        let mut out = String::from(self.base.as_str());
        for modifier in &self.modifiers {
            out.push(' ');
            modifier.write_sql(&mut out);
        }
        out
    }
}

impl From<BaseType> for ColumnType {
    fn from(base: BaseType) -> Self {
        Self::new(base)
    }
}

impl FromStr for ColumnType {
    type Err = OrmError;

    /// Parse a bare type name (no modifiers).
    fn from_str(s: &str) -> OrmResult<Self> {
        s.parse::<BaseType>().map(Self::new)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// `ty PRIMARY KEY`
pub fn with_primary_key(ty: impl Into<ColumnType>) -> ColumnType {
    ty.into().primary_key()
}

/// `ty NOT NULL`
pub fn with_not_null(ty: impl Into<ColumnType>) -> ColumnType {
    ty.into().not_null()
}

/// `ty UNIQUE`
pub fn with_unique(ty: impl Into<ColumnType>) -> ColumnType {
    ty.into().unique()
}

/// `ty DEFAULT <literal>`
pub fn with_default(ty: impl Into<ColumnType>, value: impl Into<Value>) -> OrmResult<ColumnType> {
    ty.into().default(value)
}
