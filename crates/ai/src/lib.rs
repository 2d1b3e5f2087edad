//! `stockroom-ai`
//!
//! **Responsibility:** stock prediction boundary.
//!
//! - It must not depend on the inventory or supplier stores.
//! - It must not mutate domain state.
//! - Results live in a side cache read by the presentation layer.

pub mod cache;
pub mod predictor;
pub mod regression;
pub mod service;

pub use cache::{Prediction, PredictionCache};
pub use predictor::{PredictionError, StockPredictor};
pub use regression::{LinearModel, LinearTrendPredictor, TrainingConfig};
pub use service::PredictionService;
