//! Listing policies applied to loaded content before it reaches a page.

mod captions;
mod query;

pub use captions::{ACADEMIC_OVERVIEW_CAPTION, academic_card_titles, slide_captions};
pub use query::{ProjectQuery, sort_by_published_desc};
