pub mod identity;

pub mod prelude {
    pub use super::identity::Entity as IdentityEntity;
}
