pub mod mail;
pub mod preferences;
pub mod share_links;
pub mod submission;
