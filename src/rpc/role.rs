use crate::models::user::UserRole;

use super::proto::{user::CreateUserType, AuthorityRole};

/// Maps the authority's role value onto a gateway role.
///
/// Unknown values map to [`UserRole::User`]. The authority is a trusted peer,
/// so an unmapped value points at version skew rather than an attack.
pub fn from_authority(raw: i32) -> UserRole {
    match AuthorityRole::try_from(raw) {
        Ok(AuthorityRole::BasicUser) => UserRole::User,
        Ok(AuthorityRole::DataUser) => UserRole::Device,
        Ok(AuthorityRole::Admin) => UserRole::Admin,
        Err(_) => UserRole::User,
    }
}

pub fn to_create_user_type(role: UserRole) -> CreateUserType {
    match role {
        UserRole::Device => CreateUserType::DataUser,
        _ => CreateUserType::BasicUser,
    }
}
