//! Speaking engagements: load the talk dataset, split it into upcoming and
//! past talks, and render the listing as a table or as cards.

pub mod catalog;
pub mod html;
pub mod partition;
pub mod present;
pub mod render;
pub mod text;

pub use catalog::{Catalog, ProjectCatalog};
pub use partition::{parse_instant, partition, Partition};
pub use present::{Breakpoint, Layout, Listing, Presentation, Section, SectionKind};
pub use render::{render_talk, Card, ExternalLink, TalkRow, TalkUnit};
