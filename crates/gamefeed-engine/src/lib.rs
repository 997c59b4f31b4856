//! Feed controller for infinite-scroll game listings.
//!
//! `GameFeed` owns the pagination/filter state and drives the whole loop:
//! fetch a page from a `PageSource`, render each record as a card
//! fragment, hand the fragments to a `HostPage`, and decide whether more
//! pages remain. Hosts stay thin: a browser page maps DOM events onto the
//! controller's operations, the CLI maps prompts and flags onto the same
//! ones.

mod feed;
mod host;

pub use feed::*;
pub use host::*;
