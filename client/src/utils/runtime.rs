/// Global Tokio runtime for async HTTP operations
///
/// egui runs its own immediate-mode loop on the main thread, but reqwest
/// requires a tokio runtime. This static runtime bridges the two: fetch
/// tasks are spawned onto it and deliver their results back to the UI
/// through the app event channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
