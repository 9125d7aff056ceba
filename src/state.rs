use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs `f` with exclusive access to the shared random source.
    /// Never hold the guard across an `.await`.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut *rng)
    }
}
