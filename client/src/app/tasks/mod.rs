//! Background fetch tasks spawned onto the tokio runtime. Results come back
//! as [`crate::app::events::AppEvent`]s.

pub(crate) mod chart;
pub(crate) mod quotes;
