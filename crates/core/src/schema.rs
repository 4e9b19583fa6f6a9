//! OpenAPI description of the envelope.
//!
//! [`Envelope`](crate::envelope::Envelope) and [`Meta`](crate::envelope::Meta)
//! are generic or carry a flattened map, so the documented shape lives in
//! these plain mirror types.

use serde_json::Value;
use utoipa::ToSchema;

/// The basic response: every endpoint answers with this shape.
#[derive(Debug, ToSchema)]
pub struct EnvelopeSchema {
    /// Serialized resource, an array for collections, `{}` when absent.
    #[schema(value_type = Object)]
    pub data: Value,
    pub meta: MetaSchema,
    /// Error entries, emitted verbatim.
    #[schema(value_type = Vec<Object>)]
    pub errors: Vec<Value>,
}

/// Response metadata. Caller-supplied keys appear next to `status`.
#[derive(Debug, ToSchema)]
pub struct MetaSchema {
    /// HTTP status of the response.
    #[schema(example = 200)]
    pub status: u16,
}
