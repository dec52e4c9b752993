mod args;

pub use args::{Args, Orientation, PageSize};
