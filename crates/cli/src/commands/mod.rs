pub mod configure;
pub mod doctor;
pub mod empire;
pub mod helpers;
pub mod profile;
