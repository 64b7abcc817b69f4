//! JWT session token entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::JwtToken;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jwt_tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub token_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub token: String,
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for JwtToken {
    fn from(model: Model) -> Self {
        JwtToken {
            id: model.token_id,
            user_id: model.user_id,
            token: model.token,
            expires_at: model.expires_at,
        }
    }
}
