//! Declarative table definitions for the five Picto entities.
//!
//! These declarations are the single description of the relational shape:
//! column order, types, nullability, uniqueness, primary keys, and foreign
//! keys. The SQL created by `picto-db` mirrors them, and the diagram renderer
//! in `picto-schema` draws them.

use std::fmt;

use crate::enums::EntityKind;

/// Column storage type. Strings carry their declared maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    String(u32),
}

impl ColumnType {
    /// SQLite affinity used for the column.
    #[must_use]
    pub const fn sql_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::String(_) => "TEXT",
        }
    }

    #[must_use]
    pub const fn max_len(self) -> Option<u32> {
        match self {
            Self::Integer => None,
            Self::String(len) => Some(len),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("INTEGER"),
            Self::String(len) => write!(f, "VARCHAR({len})"),
        }
    }
}

/// Target of a foreign key: `table.column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub references: Option<ForeignKey>,
}

impl Column {
    const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            unique: false,
            primary_key: false,
            references: None,
        }
    }

    const fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    const fn string(name: &'static str, max_len: u32) -> Self {
        Self::new(name, ColumnType::String(max_len))
    }

    const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some(ForeignKey { table, column });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub kind: EntityKind,
    pub columns: &'static [Column],
}

impl Table {
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Primary key columns in declaration order. More than one means a
    /// composite key.
    pub fn primary_key(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    pub fn foreign_keys(&self) -> impl Iterator<Item = (&'static Column, ForeignKey)> {
        self.columns
            .iter()
            .filter_map(|c| c.references.map(|fk| (c, fk)))
    }
}

pub const USER: Table = Table {
    name: "user",
    kind: EntityKind::User,
    columns: &[
        Column::integer("id").primary_key(),
        Column::string("username", 250),
        Column::string("first_name", 250),
        Column::string("last_name", 250),
        Column::string("email", 250).unique(),
    ],
};

pub const FOLLOWER: Table = Table {
    name: "follower",
    kind: EntityKind::Follower,
    columns: &[
        Column::integer("user_from_id")
            .primary_key()
            .references("user", "id"),
        Column::integer("user_to_id")
            .primary_key()
            .references("user", "id"),
    ],
};

pub const POST: Table = Table {
    name: "post",
    kind: EntityKind::Post,
    columns: &[
        Column::integer("id").primary_key(),
        Column::integer("user_id").references("user", "id"),
        Column::string("content", 500),
    ],
};

pub const COMMENT: Table = Table {
    name: "comment",
    kind: EntityKind::Comment,
    columns: &[
        Column::integer("id").primary_key(),
        Column::string("comment_text", 250),
        Column::integer("author_id").references("user", "id"),
        Column::integer("post_id").references("post", "id"),
    ],
};

pub const MEDIA: Table = Table {
    name: "media",
    kind: EntityKind::Media,
    columns: &[
        Column::integer("id").primary_key(),
        Column::string("type", 50),
        Column::string("url", 250),
        Column::integer("post_id").references("post", "id"),
    ],
};

/// Every table, parents before children.
pub const TABLES: &[Table] = &[USER, FOLLOWER, POST, COMMENT, MEDIA];

/// Table definition for one entity kind.
#[must_use]
pub const fn table(kind: EntityKind) -> &'static Table {
    match kind {
        EntityKind::User => &USER,
        EntityKind::Follower => &FOLLOWER,
        EntityKind::Post => &POST,
        EntityKind::Comment => &COMMENT,
        EntityKind::Media => &MEDIA,
    }
}

/// A foreign-key edge: many `child` rows point at one `parent` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub child_table: &'static str,
    pub child_column: &'static Column,
    pub parent_table: &'static str,
    pub parent_column: &'static str,
}

impl Relationship {
    /// How many parents a child row has: exactly one unless the column is nullable.
    #[must_use]
    pub const fn parent_cardinality(&self) -> &'static str {
        if self.child_column.nullable {
            "0..1"
        } else {
            "1"
        }
    }

    /// How many children a parent row has.
    #[must_use]
    pub const fn child_cardinality(&self) -> &'static str {
        "0..N"
    }
}

/// All foreign-key edges across `tables`, in table then column order.
#[must_use]
pub fn relationships(tables: &[Table]) -> Vec<Relationship> {
    tables
        .iter()
        .flat_map(|t| {
            t.foreign_keys().map(move |(column, fk)| Relationship {
                child_table: t.name,
                child_column: column,
                parent_table: fk.table,
                parent_column: fk.column,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup_matches_kind() {
        for kind in EntityKind::ALL {
            let t = table(kind);
            assert_eq!(t.kind, kind);
            assert_eq!(t.name, kind.table_name());
        }
    }

    #[test]
    fn tables_are_in_dependency_order() {
        for (idx, t) in TABLES.iter().enumerate() {
            for (_, fk) in t.foreign_keys() {
                let parent_idx = TABLES.iter().position(|p| p.name == fk.table).unwrap();
                assert!(
                    parent_idx < idx || fk.table == t.name,
                    "{} must come after {}",
                    t.name,
                    fk.table
                );
            }
        }
    }

    #[test]
    fn follower_has_composite_key_on_users() {
        let pk: Vec<&str> = FOLLOWER.primary_key().map(|c| c.name).collect();
        assert_eq!(pk, ["user_from_id", "user_to_id"]);
        assert!(FOLLOWER.foreign_keys().all(|(_, fk)| fk.table == "user"));
    }

    #[test]
    fn email_is_unique_and_required() {
        let email = USER.column("email").unwrap();
        assert!(email.unique);
        assert!(!email.nullable);
        assert_eq!(email.ty, ColumnType::String(250));
    }

    #[test]
    fn relationships_cover_every_foreign_key() {
        let rels = relationships(TABLES);
        let edges: Vec<(&str, &str, &str)> = rels
            .iter()
            .map(|r| (r.child_table, r.child_column.name, r.parent_table))
            .collect();
        assert_eq!(
            edges,
            [
                ("follower", "user_from_id", "user"),
                ("follower", "user_to_id", "user"),
                ("post", "user_id", "user"),
                ("comment", "author_id", "user"),
                ("comment", "post_id", "post"),
                ("media", "post_id", "post"),
            ]
        );
        assert!(rels.iter().all(|r| r.parent_cardinality() == "1"));
    }

    #[test]
    fn column_type_display() {
        assert_eq!(ColumnType::Integer.to_string(), "INTEGER");
        assert_eq!(ColumnType::String(50).to_string(), "VARCHAR(50)");
        assert_eq!(ColumnType::String(50).sql_type(), "TEXT");
    }
}
