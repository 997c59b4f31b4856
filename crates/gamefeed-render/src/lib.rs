//! Card view models and HTML rendering for the gamefeed engine.
//!
//! Rendering is split in two: `GameCard` is a pure `GameRecord` transform
//! with one structured field per optional card section, and `render_card`
//! materializes it as the HTML fragment the host stylesheet expects. The
//! transform carries all the presence/fallback logic, so it is testable
//! without looking at markup.

mod card;
mod html;

pub use card::*;
pub use html::*;
