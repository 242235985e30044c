mod indexes;

pub use indexes::{COURSES, ENROLLMENTS, QUESTIONS, QUIZZES, QUIZ_ATTEMPTS};

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The service's MongoDB database plus the state of its index setup.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
    indexes_ready: Arc<AtomicBool>,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        let db = Self {
            inner: client.database(&config.mongo_db_name),
            indexes_ready: Arc::new(AtomicBool::new(false)),
        };
        db.ping().await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);
        Ok(db)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection(name)
    }

    /// Creates every index the repositories query by. Idempotent.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        for spec in indexes::INDEXES {
            self.inner
                .collection::<Document>(spec.collection)
                .create_index(spec.model())
                .await?;
            log::debug!("Index {}.{} in place", spec.collection, spec.name);
        }

        self.indexes_ready.store(true, Ordering::Release);
        log::info!("Ensured {} indexes", indexes::INDEXES.len());
        Ok(())
    }

    pub fn indexes_ready(&self) -> bool {
        self.indexes_ready.load(Ordering::Acquire)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
