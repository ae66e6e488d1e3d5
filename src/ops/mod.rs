pub mod store;
pub mod view;

pub use store::{CompleteOutcome, StoreError, TaskStore};
pub use view::{ListStats, SortKey, ViewOptions, build_view, list_stats};
