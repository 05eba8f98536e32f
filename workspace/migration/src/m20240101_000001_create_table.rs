use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len(Users::Email, 120).unique_key())
                    .col(string(Users::Password))
                    .col(boolean(Users::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        // Create people table
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Name, 100))
                    .col(string_len_null(People::Height, 20))
                    .col(string_len_null(People::Gender, 20))
                    .to_owned(),
            )
            .await?;

        // Create planets table
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len_null(Planets::Name, 120))
                    .col(string_len_null(Planets::Terrain, 100))
                    .col(string_len_null(Planets::Population, 100))
                    .to_owned(),
            )
            .await?;

        // Create favorites table. Exactly one of planet_id / people_id is set.
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::PeopleId))
                    .check(
                        Expr::col(Favorites::PlanetId)
                            .is_not_null()
                            .and(Expr::col(Favorites::PeopleId).is_null())
                            .or(Expr::col(Favorites::PlanetId)
                                .is_null()
                                .and(Expr::col(Favorites::PeopleId).is_not_null())),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people")
                            .from(Favorites::Table, Favorites::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order of creation
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Gender,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Terrain,
    Population,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}
