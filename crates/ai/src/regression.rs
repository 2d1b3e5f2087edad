//! Default prediction collaborator: single-feature linear regression.

use tracing::debug;

use crate::predictor::{PredictionError, StockPredictor};

/// Historical stock levels used as the regression input.
pub const HISTORICAL_STOCK: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];
/// Reorder levels observed for [`HISTORICAL_STOCK`].
pub const HISTORICAL_REORDER: [f64; 5] = [5.0, 10.0, 15.0, 20.0, 25.0];

/// Training hyper-parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 5e-4,
            xs: HISTORICAL_STOCK.to_vec(),
            ys: HISTORICAL_REORDER.to_vec(),
        }
    }
}

/// Fitted `y = weight * x + bias`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearModel {
    pub weight: f64,
    pub bias: f64,
}

impl LinearModel {
    /// Full-batch gradient descent on mean squared error, starting at zero.
    pub fn fit(cfg: &TrainingConfig) -> Result<Self, PredictionError> {
        if cfg.xs.is_empty() || cfg.xs.len() != cfg.ys.len() {
            return Err(PredictionError::InvalidInput(format!(
                "training set needs matching non-empty xs/ys (xs={}, ys={})",
                cfg.xs.len(),
                cfg.ys.len()
            )));
        }
        if !(cfg.learning_rate.is_finite() && cfg.learning_rate > 0.0) {
            return Err(PredictionError::InvalidInput(
                "learning_rate must be a finite positive number".to_string(),
            ));
        }

        let n = cfg.xs.len() as f64;
        let mut model = LinearModel { weight: 0.0, bias: 0.0 };

        for _ in 0..cfg.epochs {
            let (mut gw, mut gb) = (0.0, 0.0);
            for (x, y) in cfg.xs.iter().zip(&cfg.ys) {
                let err = model.eval(*x) - y;
                gw += err * x;
                gb += err;
            }
            model.weight -= cfg.learning_rate * 2.0 * gw / n;
            model.bias -= cfg.learning_rate * 2.0 * gb / n;
        }

        if !(model.weight.is_finite() && model.bias.is_finite()) {
            return Err(PredictionError::InferenceFailed(format!(
                "training diverged (learning_rate={})",
                cfg.learning_rate
            )));
        }

        debug!(weight = model.weight, bias = model.bias, epochs = cfg.epochs, "linear model fitted");
        Ok(model)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.weight * x + self.bias
    }
}

/// Trains a fresh [`LinearModel`] on every request, then evaluates it.
#[derive(Debug, Clone, Default)]
pub struct LinearTrendPredictor {
    cfg: TrainingConfig,
}

impl LinearTrendPredictor {
    pub fn new(cfg: TrainingConfig) -> Self {
        Self { cfg }
    }
}

#[async_trait::async_trait]
impl StockPredictor for LinearTrendPredictor {
    async fn predict(&self, stock: f64) -> Result<f64, PredictionError> {
        if !stock.is_finite() {
            return Err(PredictionError::InvalidInput(format!("stock must be finite, got {stock}")));
        }
        let model = LinearModel::fit(&self.cfg)?;
        Ok(model.eval(stock))
    }
}
