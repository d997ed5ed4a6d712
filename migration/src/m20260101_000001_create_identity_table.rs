use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Identity::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Identity::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Identity::SessionId).string().not_null())
                    .col(ColumnDef::new(Identity::UserId).string().not_null())
                    .col(ColumnDef::new(Identity::Name).string().not_null())
                    .col(
                        ColumnDef::new(Identity::SavedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Identity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Identity {
    Table,
    Id,
    SessionId,
    UserId,
    Name,
    SavedAt,
}
