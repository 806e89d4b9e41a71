pub mod features;
pub mod hero;
pub mod navbar;
pub mod result_card;
pub mod upload_section;
