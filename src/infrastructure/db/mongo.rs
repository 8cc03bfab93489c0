use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tracing::{info, warn};
use std::time::Duration;

const MAX_RETRIES: u32 = 5;

/// Owns the driver client for the lifetime of the process.
///
/// Built once in `main`, shared with the repositories through [`Database`]
/// handles, and released with [`MongoStore::shutdown`] after the server stops.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connects and pings, retrying with exponential backoff so the service
    /// can start before the database is ready.
    pub async fn connect(database_url: &str, database_name: &str, app_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(database_url).await?;
        options.app_name = Some(app_name.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(database_name);

        let mut retry_count = 0;
        let mut wait_seconds = 2;

        loop {
            match database.run_command(doc! { "ping": 1 }).await {
                Ok(_) => {
                    info!(database = database_name, "Document store connection established.");
                    return Ok(MongoStore { client, database });
                }
                Err(e) if retry_count < MAX_RETRIES => {
                    retry_count += 1;
                    warn!(
                        "Failed to reach document store (attempt {}/{}): {}. Retrying in {}s...",
                        retry_count, MAX_RETRIES, e, wait_seconds
                    );

                    tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                    wait_seconds *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn database(&self) -> Database {
        self.database.clone()
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("Document store connection closed.");
    }
}
