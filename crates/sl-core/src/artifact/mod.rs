mod name;
mod record;

pub use name::{ArtifactName, ArtifactToken};
pub use record::SavedArtifact;
