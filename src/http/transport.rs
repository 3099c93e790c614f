//! The service collaborator seam
//!
//! Everything above this trait works with typed requests; everything below
//! it moves JSON. Tests swap in an in-memory transport.

use crate::error::Result;
use crate::operations::ApiOperation;
use crate::types::JsonValue;
use async_trait::async_trait;

/// Performs one operation call
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` as the named operation and return the response body
    async fn send(&self, operation: &str, body: JsonValue) -> Result<JsonValue>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, operation: &str, body: JsonValue) -> Result<JsonValue> {
        (**self).send(operation, body).await
    }
}

/// Call a typed operation through a transport
pub async fn call<Op, T>(transport: &T, input: &Op::Input) -> Result<Op::Output>
where
    Op: ApiOperation,
    T: Transport + ?Sized,
{
    let body = serde_json::to_value(input)?;
    let response = transport.send(Op::NAME, body).await?;
    Ok(serde_json::from_value(response)?)
}
