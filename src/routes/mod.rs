mod health;
mod submit_form;

pub use health::*;
pub use submit_form::*;
