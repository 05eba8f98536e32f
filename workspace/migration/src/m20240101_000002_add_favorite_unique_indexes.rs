use crate::entity_iden::EntityIden;
use model::entities::favorite;
use model::entities::prelude::*;
use sea_orm_migration::prelude::*;

const USER_PLANET_INDEX: &str = "idx_favorites_user_planet";
const USER_PEOPLE_INDEX: &str = "idx_favorites_user_people";

/// One favorite per (user, item). NULL item columns never collide, so the
/// planet index does not constrain people favorites and vice versa.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(Favorite::unique_pair_index(
                USER_PLANET_INDEX,
                favorite::Column::UserId,
                favorite::Column::PlanetId,
            ))
            .await?;
        manager
            .create_index(Favorite::unique_pair_index(
                USER_PEOPLE_INDEX,
                favorite::Column::UserId,
                favorite::Column::PeopleId,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Favorite::drop_index(USER_PEOPLE_INDEX)).await?;
        manager.drop_index(Favorite::drop_index(USER_PLANET_INDEX)).await?;

        Ok(())
    }
}
