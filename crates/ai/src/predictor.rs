use thiserror::Error;

/// Prediction collaborator: maps an item's stock value to a predicted number.
///
/// Implementations must not touch inventory state; results are only ever
/// written to the side cache by [`PredictionService`](crate::PredictionService).
#[async_trait::async_trait]
pub trait StockPredictor: Send + Sync + 'static {
    async fn predict(&self, stock: f64) -> Result<f64, PredictionError>;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictionError {
    #[error("invalid prediction input: {0}")]
    InvalidInput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
