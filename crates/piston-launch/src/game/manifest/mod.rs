/// Version descriptors: parsing, inheritance merge and library rewriting
pub mod coordinate;
pub mod loader;
pub mod merge;
pub mod rewriter;
pub mod rules;
pub mod types;

pub use coordinate::Coordinate;
pub use loader::{load_descriptor, parse_descriptor, DescriptorStore};
pub use merge::{merge_descriptors, validate};
pub use rewriter::{rewrite_libraries, rewrite_library};
pub use rules::{rules_allow, FeatureSet};
pub use types::{
    ArgumentTemplate, ArgumentValue, Arguments, Artifact, AssetIndex, JavaVersion, Library,
    LibraryDownloads, Rule, RuleAction, VersionDescriptor,
};
