use std::sync::Arc;

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use stockroom_core::ItemId;

use crate::cache::{Prediction, PredictionCache};
use crate::predictor::StockPredictor;

/// Runs predictions as detached tokio tasks and records results in a
/// [`PredictionCache`].
///
/// - Never blocks the caller and never mutates inventory state
/// - Failures are logged; the item's previous prediction (if any) is kept
/// - Results of requests made before the item was forgotten are dropped
/// - No ordering between concurrent requests
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn StockPredictor>,
    cache: PredictionCache,
}

impl core::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PredictionService")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn StockPredictor>) -> Self {
        Self {
            predictor,
            cache: PredictionCache::new(),
        }
    }

    pub fn cache(&self) -> &PredictionCache {
        &self.cache
    }

    /// Spawn a prediction for one item.
    ///
    /// Returns `None` (after logging) when called outside a tokio runtime.
    /// The handle may be dropped; the task keeps running.
    pub fn request(&self, item_id: ItemId, item_name: &str, stock: u32) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(h) => h,
            Err(err) => {
                warn!(%item_id, "no async runtime for stock prediction: {err}");
                return None;
            }
        };

        let predictor = Arc::clone(&self.predictor);
        let cache = self.cache.clone();
        let generation = cache.generation(item_id);
        let item_name = item_name.to_string();

        Some(runtime.spawn(async move {
            match predictor.predict(f64::from(stock)).await {
                Ok(value) => {
                    let prediction = Prediction {
                        value,
                        predicted_at: Utc::now(),
                    };
                    if cache.insert(item_id, generation, prediction) {
                        info!(%item_id, item = %item_name, stock, predicted = value, "stock prediction ready");
                    } else {
                        debug!(%item_id, item = %item_name, "stock prediction discarded; item was removed");
                    }
                }
                Err(err) => {
                    warn!(%item_id, item = %item_name, "stock prediction failed: {err}");
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::predictor::PredictionError;

    /// Doubles its input, or fails once `fail` is set.
    #[derive(Default)]
    struct Doubler {
        fail: AtomicBool,
    }

    #[async_trait::async_trait]
    impl StockPredictor for Doubler {
        async fn predict(&self, stock: f64) -> Result<f64, PredictionError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(PredictionError::InferenceFailed("model offline".to_string()));
            }
            Ok(stock * 2.0)
        }
    }

    #[tokio::test]
    async fn successful_prediction_lands_in_cache() {
        let svc = PredictionService::new(Arc::new(Doubler::default()));
        svc.request(ItemId::new(1), "Laptop", 10).unwrap().await.unwrap();
        assert_eq!(svc.cache().get(ItemId::new(1)).map(|p| p.value), Some(20.0));
    }

    #[tokio::test]
    async fn failure_keeps_previous_prediction() {
        let predictor = Arc::new(Doubler::default());
        let svc = PredictionService::new(predictor.clone());
        svc.request(ItemId::new(1), "Laptop", 10).unwrap().await.unwrap();

        predictor.fail.store(true, Ordering::SeqCst);
        svc.request(ItemId::new(1), "Laptop", 99).unwrap().await.unwrap();

        assert_eq!(svc.cache().get(ItemId::new(1)).map(|p| p.value), Some(20.0));
    }

    #[tokio::test]
    async fn concurrent_requests_for_different_items() {
        let svc = PredictionService::new(Arc::new(Doubler::default()));
        let handles: Vec<_> = (1..=4u32)
            .filter_map(|i| svc.request(ItemId::new(u64::from(i)), "x", i))
            .collect();
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(svc.cache().len(), 4);
        assert_eq!(svc.cache().get(ItemId::new(3)).map(|p| p.value), Some(6.0));
    }

    #[tokio::test]
    async fn result_of_request_made_before_forget_is_dropped() {
        let svc = PredictionService::new(Arc::new(Doubler::default()));
        let task = svc.request(ItemId::new(2), "Desk Chair", 5).unwrap();
        svc.cache().forget(ItemId::new(2));
        task.await.unwrap();

        assert!(svc.cache().get(ItemId::new(2)).is_none());
        assert!(svc.cache().is_empty());
    }

    #[test]
    fn request_outside_runtime_is_ignored() {
        let svc = PredictionService::new(Arc::new(Doubler::default()));
        assert!(svc.request(ItemId::new(1), "Laptop", 10).is_none());
        assert!(svc.cache().is_empty());
    }
}
