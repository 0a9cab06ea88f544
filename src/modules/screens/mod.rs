pub mod calendar;
pub mod home;
pub mod media_details;
pub mod media_list;
pub mod search;
pub mod state_holder;

// Re-exports for easy external access
pub use calendar::{sorted_weekdays, CalendarUiState, CalendarViewModel};
pub use home::{HomeUiState, HomeViewModel};
pub use media_details::{MediaDetailsUiState, MediaDetailsViewModel};
pub use media_list::{MediaListCategory, MediaListUiState, MediaListViewModel, PagedUiState};
pub use search::{SearchUiState, SearchViewModel};
pub use state_holder::{StateHolder, StateWatcher};
