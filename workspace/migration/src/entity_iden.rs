use model::entities::prelude::*;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Alias, Index, IndexCreateStatement, IndexDropStatement};

/// Schema identifiers taken from the entity definitions, so later migrations
/// cannot drift from the table and column names the model crate uses.
pub trait EntityIden: EntityTrait {
    fn table() -> Alias {
        Alias::new(Self::default().table_name())
    }

    fn column(column: Self::Column) -> Alias {
        Alias::new(column.as_str())
    }

    /// Unique index over a pair of this entity's columns.
    fn unique_pair_index(name: &str, first: Self::Column, second: Self::Column) -> IndexCreateStatement {
        Index::create()
            .name(name)
            .table(Self::table())
            .col(Self::column(first))
            .col(Self::column(second))
            .unique()
            .if_not_exists()
            .to_owned()
    }

    fn drop_index(name: &str) -> IndexDropStatement {
        Index::drop().name(name).table(Self::table()).to_owned()
    }
}

impl EntityIden for Favorite {}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entities::favorite;
    use sea_orm::sea_query::{SchemaStatementBuilder, SqliteQueryBuilder};

    #[test]
    fn test_identifiers_follow_entity_names() {
        let sql = Favorite::unique_pair_index(
            "idx_test",
            favorite::Column::UserId,
            favorite::Column::PlanetId,
        )
        .to_string(SqliteQueryBuilder);

        assert!(sql.contains("UNIQUE INDEX"), "{sql}");
        assert!(sql.contains(r#""favorites""#), "{sql}");
        assert!(sql.contains(r#""user_id", "planet_id""#), "{sql}");
    }
}
