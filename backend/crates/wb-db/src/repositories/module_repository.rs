use crate::{DocumentRepository, Result};

use wb_core::{Module, ModuleName};

use log::info;
use sqlx::SqlitePool;

pub struct ModuleRepository;

impl ModuleRepository {
    pub async fn find_by_name<'e, E>(executor: E, name: ModuleName) -> Result<Option<Module>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut modules =
            DocumentRepository::find_by_field::<Module, _>(executor, "moduleName", name.as_str())
                .await?;
        Ok(modules.pop())
    }

    /// Inserts any missing module category. Safe to run on every start.
    pub async fn seed(pool: &SqlitePool) -> Result<Vec<Module>> {
        let mut modules = Vec::with_capacity(ModuleName::ALL.len());

        for name in ModuleName::ALL {
            match Self::find_by_name(pool, name).await? {
                Some(existing) => modules.push(existing),
                None => {
                    let module = Module::new(name);
                    DocumentRepository::insert(pool, &module).await?;
                    info!("Seeded module {} ({})", name, module.id);
                    modules.push(module);
                }
            }
        }

        Ok(modules)
    }
}
