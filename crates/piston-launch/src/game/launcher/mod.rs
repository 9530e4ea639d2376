/// Launch command line assembly
pub mod arguments;
pub mod classpath;
pub mod types;
pub mod variables;

// Re-export commonly used types
pub use crate::game::platform::Platform;
pub use arguments::{substitute, ArgumentAssembler};
pub use classpath::{build_classpath, classpath_entries, missing_libraries};
pub use types::{offline_uuid, LaunchContext, PlayerProfile};
pub use variables::launch_variables;
