use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Calculations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calculations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Calculations::FirstOperand)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Calculations::SecondOperand)
                            .decimal()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Calculations::Operation).integer().not_null())
                    .col(ColumnDef::new(Calculations::Result).decimal().not_null())
                    .col(
                        ColumnDef::new(Calculations::OwnerToken)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_calculations_owner_token")
                    .table(Calculations::Table)
                    .col(Calculations::OwnerToken)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Calculations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Calculations {
    Table,
    Id,
    FirstOperand,
    SecondOperand,
    Operation,
    Result,
    OwnerToken,
}
