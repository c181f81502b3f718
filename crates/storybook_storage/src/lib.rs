//! Story record and image artifact storage.
//!
//! Three directory trees make up the corpus on disk:
//!
//! ```text
//! stories/
//! ├── en/                  primary-language records, one `<slug>.json` each
//! ├── hi/                  secondary-language records, optional per slug
//! └── images/              generated artifacts, `<shortname>-NN.png`
//! ```
//!
//! [`StoryStore`] reads and writes records, [`MetadataUpdater`] writes image
//! references into both record trees, and [`ArtifactStore`] answers whether a
//! scene has already been illustrated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifacts;
mod fs;
mod record;
mod store;
mod updater;

pub use artifacts::ArtifactStore;
pub use fs::write_atomic;
pub use record::StoryRecord;
pub use store::StoryStore;
pub use updater::{MetadataUpdater, UpdateReport};
