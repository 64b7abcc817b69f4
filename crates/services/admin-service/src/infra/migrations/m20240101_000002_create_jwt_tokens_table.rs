//! Migration: Create jwt_tokens table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JwtTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JwtTokens::TokenId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JwtTokens::UserId).integer().not_null())
                    .col(ColumnDef::new(JwtTokens::Token).text().not_null())
                    .col(
                        ColumnDef::new(JwtTokens::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jwt_tokens_user_id")
                            .from(JwtTokens::Table, JwtTokens::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Session invalidation deletes by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_jwt_tokens_user_id")
                    .table(JwtTokens::Table)
                    .col(JwtTokens::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JwtTokens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum JwtTokens {
    Table,
    TokenId,
    UserId,
    Token,
    ExpiresAt,
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
}
