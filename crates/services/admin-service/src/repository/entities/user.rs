//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::AppError;
use domain::{Role, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::jwt_token::Entity")]
    JwtTokens,
}

impl Related<super::jwt_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JwtTokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// A role string outside the enumeration means the row was written by
/// something other than this service and is reported as an internal error.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = model.role.parse::<Role>().map_err(|e| {
            AppError::internal(format!("user {} has a corrupt role: {}", model.user_id, e))
        })?;

        Ok(User {
            id: model.user_id,
            username: model.username,
            email: model.email,
            password_hash: model.password,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
