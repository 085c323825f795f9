// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// タスクストアのスキーマ（分析サービス自体は読み取り専用）
mod m20250511_073638_create_task_table;
mod m20250512_000001_add_task_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. tasks テーブル作成
            Box::new(m20250511_073638_create_task_table::Migration),
            // 2. 分析クエリ用インデックス
            Box::new(m20250512_000001_add_task_indexes::Migration),
        ]
    }
}
