use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// Links a user to exactly one favorited item, either a planet or a person.
///
/// The two nullable foreign keys are mutually exclusive. The migration backs
/// this with a CHECK constraint and with one unique index per item column, so
/// a user can favorite a given item at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PeopleId",
        to = "super::people::Column::Id"
    )]
    People,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The item a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
}

impl FavoriteTarget {
    /// The favorites column holding this kind of item.
    pub fn column(&self) -> Column {
        match self {
            FavoriteTarget::Planet(_) => Column::PlanetId,
            FavoriteTarget::People(_) => Column::PeopleId,
        }
    }

    /// Id of the referenced planet or person.
    pub fn id(&self) -> i32 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::People(id) => *id,
        }
    }

    pub fn planet_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(id) => Some(*id),
            FavoriteTarget::People(_) => None,
        }
    }

    pub fn people_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::People(id) => Some(*id),
            FavoriteTarget::Planet(_) => None,
        }
    }

    /// Builds an unsaved favorite row for `user_id`.
    pub fn into_active_model(self, user_id: i32) -> ActiveModel {
        ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(self.planet_id()),
            people_id: Set(self.people_id()),
            ..Default::default()
        }
    }
}

impl Model {
    /// Resolves which item this row points at.
    ///
    /// Returns `None` for a row with neither column set. A row with both set
    /// cannot be written through the migrated schema; if one shows up anyway
    /// the planet wins.
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.planet_id, self.people_id) {
            (Some(planet_id), _) => Some(FavoriteTarget::Planet(planet_id)),
            (None, Some(people_id)) => Some(FavoriteTarget::People(people_id)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_resolution() {
        let planet_fav = Model {
            id: 1,
            user_id: 1,
            planet_id: Some(4),
            people_id: None,
        };
        assert_eq!(planet_fav.target(), Some(FavoriteTarget::Planet(4)));

        let people_fav = Model {
            id: 2,
            user_id: 1,
            planet_id: None,
            people_id: Some(7),
        };
        assert_eq!(people_fav.target(), Some(FavoriteTarget::People(7)));

        let empty = Model {
            id: 3,
            user_id: 1,
            planet_id: None,
            people_id: None,
        };
        assert_eq!(empty.target(), None);
    }

    #[test]
    fn test_target_columns() {
        let planet = FavoriteTarget::Planet(3);
        assert_eq!(planet.planet_id(), Some(3));
        assert_eq!(planet.people_id(), None);
        assert_eq!(planet.id(), 3);
        assert!(matches!(planet.column(), Column::PlanetId));

        let people = FavoriteTarget::People(5);
        assert_eq!(people.planet_id(), None);
        assert_eq!(people.people_id(), Some(5));
        assert!(matches!(people.column(), Column::PeopleId));
    }
}
