pub mod html;
pub mod sort;
pub mod terminal;

pub use sort::sort_by_date;
