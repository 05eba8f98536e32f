//! Root of all SeaORM entity modules.
//! Two reference datasets (people, planets), the users who browse them and
//! the favorites joining the two sides.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::favorite::Entity as Favorite;
    pub use super::favorite::FavoriteTarget;
    pub use super::people::Entity as People;
    pub use super::planet::Entity as Planet;
    pub use super::user::Entity as User;
}
