//! Application state for the report API.

use std::sync::Arc;

use crate::config::ReportSettings;
use crate::store::ScheduleQuery;
use crate::workcal::WorkCalendar;

/// Shared application state.
///
/// Contains the collaborators every report request needs: the schedule
/// store, the work calendar and the engine settings. Requests only read
/// from the state; there is no shared mutable data.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScheduleQuery + Send + Sync>,
    calendar: Arc<WorkCalendar>,
    settings: Arc<ReportSettings>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        store: Arc<dyn ScheduleQuery + Send + Sync>,
        calendar: WorkCalendar,
        settings: ReportSettings,
    ) -> Self {
        Self {
            store,
            calendar: Arc::new(calendar),
            settings: Arc::new(settings),
        }
    }

    /// Returns the schedule store.
    pub fn store(&self) -> &(dyn ScheduleQuery + Send + Sync) {
        self.store.as_ref()
    }

    /// Returns the work calendar.
    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_collaborators() {
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            WorkCalendar::new(8),
            ReportSettings::default(),
        );
        assert_eq!(state.calendar().work_day_hours(), 8);
        assert_eq!(state.settings().precision, 2);
    }
}
