use crate::plan::Plan;
use crate::storage::MemoryStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub plan: Arc<Plan>,
    pub data: Arc<Mutex<MemoryStore>>,
    import_in_flight: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(data_path: PathBuf, plan: Plan, data: MemoryStore) -> Self {
        Self {
            data_path,
            plan: Arc::new(plan),
            data: Arc::new(Mutex::new(data)),
            import_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the single import slot. Returns `None` while another import runs.
    pub fn begin_import(&self) -> Option<ImportGuard> {
        self.import_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ImportGuard(Arc::clone(&self.import_in_flight)))
    }
}

pub struct ImportGuard(Arc<AtomicBool>);

impl Drop for ImportGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_import_at_a_time() {
        let state = AppState::new(PathBuf::from("unused.json"), Plan::default(), MemoryStore::default());
        let guard = state.begin_import().expect("first import");
        assert!(state.begin_import().is_none());
        drop(guard);
        assert!(state.begin_import().is_some());
    }
}
