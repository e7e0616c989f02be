use async_trait::async_trait;
use redis::AsyncCommands;
use shortify_core::error::{Result, StorageError};
use shortify_core::store::{ReadStore, Store};
use tracing::{debug, trace, warn};

/// A [`Store`] speaking the native Redis protocol.
///
/// Uses `GET`, `SET` and `INCR` over a multiplexed connection, so clones
/// share one socket.
#[derive(Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");

    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a store over an existing connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection to `redis_url` and wraps it.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("invalid Redis URL", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl ReadStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "fetching value from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => {
                debug!(key, hit = value.is_some(), "fetched value from Redis");
                Ok(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, "writing value to Redis");

        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| map_redis_error("failed to write value to Redis", e))
    }

    async fn incr(&self, key: &str) -> Result<u64> {
        trace!(key, "incrementing counter in Redis");

        let mut conn = self.conn.clone();
        let value = conn
            .incr::<_, _, i64>(key, 1_i64)
            .await
            .map_err(|e| map_redis_error("failed to increment counter in Redis", e))?;

        u64::try_from(value).map_err(|_| {
            StorageError::InvalidData(format!("counter at '{key}' is negative: {value}"))
        })
    }
}
