//! Custom widget components

mod header;
mod key_hints;
pub mod portrait;
mod puppy_detail;
mod puppy_list;

pub use header::TopAppBar;
pub use key_hints::KeyHints;
pub use puppy_detail::PuppyDetailCard;
pub use puppy_list::PuppyList;
