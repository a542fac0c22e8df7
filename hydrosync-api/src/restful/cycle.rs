use serde::{Deserialize, Serialize};

/// Acknowledgement for `DELETE /cycles?id=<id>`.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedCycle {
    /// Identifier of the removed cycle.
    pub id: String,
}
