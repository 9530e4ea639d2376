//! Version manifest inheritance resolution and JVM launch argument assembly.
//!
//! The pipeline reads a loader profile and the vanilla version it inherits
//! from, merges them into one [`VersionDescriptor`], picks a Java runtime for
//! it and expands the argument templates into a process command line.

pub mod error;
pub mod game;
pub mod utils;

// Re-export commonly used types
pub use error::{LaunchError, Result};
pub use game::launcher::{ArgumentAssembler, LaunchContext, Platform, PlayerProfile};
pub use game::manifest::{DescriptorStore, Library, VersionDescriptor};
pub use game::runtime::{RuntimeRecord, RuntimeSelector};
