//! Declarative table manifest and the provisioner that applies it.
//!
//! A manifest is an ordered list of [`TableSpec`]s. Each spec renders its own
//! DDL and seed inserts, so provisioning and diagnostics are driven by data
//! instead of one hand-written block per table.
//!
//! ```rust
//! use college_core::schema::{college_manifest, validate_order};
//!
//! let manifest = college_manifest();
//! assert_eq!(manifest[0].name, "users");
//! assert!(validate_order(&manifest).is_ok());
//! ```

pub mod manifest;
pub mod provision;

pub use manifest::{college_manifest, validate_order, ADMIN_USERNAME};
pub use provision::{provision, ProvisionReport, ProvisionStep, Provisioner, StepOutcome};

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-incrementing integer primary key
    Id,
    Varchar(u16),
    Int,
    Time,
    Date,
}

impl ColumnType {
    fn sql(&self) -> String {
        match self {
            ColumnType::Id => "INTEGER PRIMARY KEY AUTOINCREMENT".to_string(),
            ColumnType::Varchar(len) => format!("VARCHAR({len})"),
            ColumnType::Int => "INT".to_string(),
            ColumnType::Time => "TIME".to_string(),
            ColumnType::Date => "DATE".to_string(),
        }
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    /// Boolean SQL expression rendered as a `CHECK` constraint
    pub check: Option<&'static str>,
}

impl Column {
    /// The table's primary key column, `id`.
    pub fn id() -> Self {
        Self {
            name: "id",
            ty: ColumnType::Id,
            nullable: false,
            unique: false,
            check: None,
        }
    }

    /// A `NOT NULL` column.
    pub fn required(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            unique: false,
            check: None,
        }
    }

    /// A nullable column.
    pub fn optional(name: &'static str, ty: ColumnType) -> Self {
        Self {
            nullable: true,
            ..Self::required(name, ty)
        }
    }

    /// Adds a `UNIQUE` constraint.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Adds a `CHECK` constraint. A NULL result passes, as in SQL, so the
    /// expression must be written to come out false for rejected values.
    pub fn check(mut self, expr: &'static str) -> Self {
        self.check = Some(expr);
        self
    }

    fn sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.ty.sql());
        if !self.nullable && self.ty != ColumnType::Id {
            sql.push_str(" NOT NULL");
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(expr) = self.check {
            sql.push_str(&format!(" CHECK ({expr})"));
        }
        sql
    }
}

/// What happens to referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    SetNull,
    Cascade,
}

impl OnDelete {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnDelete::SetNull => "SET NULL",
            OnDelete::Cascade => "CASCADE",
        }
    }
}

/// A foreign key from `column` to `table(references)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub table: &'static str,
    pub references: &'static str,
    pub on_delete: OnDelete,
}

/// A row inserted right after its table is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRow {
    pub values: Vec<(&'static str, String)>,
}

impl SeedRow {
    /// Parametrized INSERT for this row and the values to bind.
    pub fn insert_sql(&self, table: &str) -> (String, Vec<&str>) {
        let columns: Vec<&str> = self.values.iter().map(|(column, _)| *column).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        );
        let params = self.values.iter().map(|(_, value)| value.as_str()).collect();
        (sql, params)
    }
}

/// One table of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: Vec<Column>,
    pub foreign_keys: Vec<ForeignKey>,
    pub seed: Vec<SeedRow>,
}

impl TableSpec {
    /// Starts a table with just its `id` primary key.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            columns: vec![Column::id()],
            foreign_keys: Vec::new(),
            seed: Vec::new(),
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn foreign_key(
        mut self,
        column: &'static str,
        table: &'static str,
        on_delete: OnDelete,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            column,
            table,
            references: "id",
            on_delete,
        });
        self
    }

    pub fn seed(mut self, row: SeedRow) -> Self {
        self.seed.push(row);
        self
    }

    /// Names of the tables this one references.
    pub fn dependencies(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.foreign_keys.iter().map(|fk| fk.table)
    }

    /// `CREATE TABLE` statement for this spec.
    pub fn create_sql(&self) -> String {
        let mut lines: Vec<String> = self.columns.iter().map(Column::sql).collect();
        lines.extend(self.foreign_keys.iter().map(|fk| {
            format!(
                "FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {}",
                fk.column,
                fk.table,
                fk.references,
                fk.on_delete.as_str()
            )
        }));
        format!("CREATE TABLE {} (\n    {}\n)", self.name, lines.join(",\n    "))
    }
}
