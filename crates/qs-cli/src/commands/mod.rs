pub mod parse;
pub mod roll;
pub mod terms;
