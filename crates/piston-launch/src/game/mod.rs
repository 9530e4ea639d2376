pub mod launcher;
pub mod manifest;
pub mod platform;
pub mod runtime;

// Re-export commonly used types
pub use launcher::{ArgumentAssembler, LaunchContext, PlayerProfile};
pub use manifest::{DescriptorStore, VersionDescriptor};
pub use platform::{Arch, OsType, Platform};
pub use runtime::{RuntimeRecord, RuntimeSelector};
