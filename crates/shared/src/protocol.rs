use serde::{Deserialize, Serialize};

use crate::domain::TalkEntry;

/// The two ordered groups handed to the page shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkListing {
    pub upcoming: Vec<TalkEntry>,
    pub past: Vec<TalkEntry>,
}
