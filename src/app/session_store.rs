use async_trait::async_trait;
use bb8::PooledConnection;
use bb8_redis::RedisConnectionManager;
use redis::AsyncCommands;
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, SessionStore,
};

type RedisPool = bb8::Pool<RedisConnectionManager>;

#[derive(Debug, thiserror::Error)]
pub enum RedisStoreError {
    #[error("no Redis connection available: {0}")]
    Pool(#[from] bb8::RunError<redis::RedisError>),

    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    #[error(transparent)]
    Decode(#[from] rmp_serde::decode::Error),

    #[error(transparent)]
    Encode(#[from] rmp_serde::encode::Error),
}

impl From<RedisStoreError> for session_store::Error {
    fn from(err: RedisStoreError) -> Self {
        match err {
            RedisStoreError::Pool(inner) => session_store::Error::Backend(inner.to_string()),
            RedisStoreError::Redis(inner) => session_store::Error::Backend(inner.to_string()),
            RedisStoreError::Decode(inner) => session_store::Error::Decode(inner.to_string()),
            RedisStoreError::Encode(inner) => session_store::Error::Encode(inner.to_string()),
        }
    }
}

/// Session records shared with the identity provider.
///
/// Records are MessagePack-encoded and keyed by session id; Redis expires
/// them at the record's expiry date.
#[derive(Debug, Clone)]
pub struct RedisStore {
    pool: RedisPool,
}

impl RedisStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, RedisConnectionManager>, RedisStoreError> {
        Ok(self.pool.get().await?)
    }
}

#[async_trait]
impl SessionStore for RedisStore {
    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let key = record.id.to_string();
        let data = rmp_serde::to_vec(record).map_err(RedisStoreError::Encode)?;
        let mut connection = self.connection().await?;

        redis::pipe()
            .atomic()
            .set(&key, data)
            .ignore()
            .expire_at(&key, OffsetDateTime::unix_timestamp(record.expiry_date))
            .ignore()
            .query_async::<_, ()>(&mut *connection)
            .await
            .map_err(RedisStoreError::Redis)?;

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let data = self
            .connection()
            .await?
            .get::<String, Option<Vec<u8>>>(session_id.to_string())
            .await
            .map_err(RedisStoreError::Redis)?;

        match data {
            Some(data) => Ok(Some(
                rmp_serde::from_slice(&data).map_err(RedisStoreError::Decode)?,
            )),
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.connection()
            .await?
            .del::<String, ()>(session_id.to_string())
            .await
            .map_err(RedisStoreError::Redis)?;

        Ok(())
    }
}
