pub mod html;

pub use html::{Element, Page};
