use driver::database::PostgresDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    config: AppConfig,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let config = AppConfig::load()?;
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self { pgpool, config })
    }

    pub fn pgpool(&self) -> &PostgresDatabase {
        &self.pgpool
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
