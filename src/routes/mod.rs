mod error;
mod generate_content;
mod health_check;
mod payload;
mod research;

pub use error::{handle_panic, ApiError};
pub use generate_content::generate_content;
pub use health_check::health_check;
pub use research::generate_research_brief;
