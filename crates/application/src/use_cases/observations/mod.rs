pub mod get_daily_summary;
pub mod get_today;
pub mod get_weekly_history;

pub use get_daily_summary::GetDailySummaryUseCase;
pub use get_today::GetTodayObservationsUseCase;
pub use get_weekly_history::GetWeeklyHistoryUseCase;
