//! External interfaces.
//!
//! Everything that crosses the analyzer's boundary lives here: the scraped
//! game-state payload and its normalization, textual order notation with
//! the display conventions the front end expects, the coalition/priority
//! specification parsers, and the serializable analysis report.

pub mod notation;
pub mod params;
pub mod report;
pub mod scrape;

pub use notation::{format_location, format_order, region_display};
pub use params::{parse_coalitions, parse_priority, select_coalition};
pub use report::{build_output, AnalysisOutput, CandidateOutput};
pub use scrape::ScrapedGame;
