pub mod location;
pub mod pair;
pub mod profile;

pub use location::Location;
pub use pair::NameUrlPair;
pub use profile::{ProfileInfo, SpreadsheetFile};
