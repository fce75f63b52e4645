//! Routed Pages

mod admin_leads;
mod admin_login;
mod courses;
mod home;
mod legal;
mod not_found;
mod projects;
mod team;

pub use admin_leads::AdminLeadsPage;
pub use admin_login::AdminLoginPage;
pub use courses::CoursesPage;
pub use home::HomePage;
pub use legal::{CookiePolicyPage, PrivacyPolicyPage, TermsOfUsePage};
pub use not_found::NotFound;
pub use projects::ProjectsPage;
pub use team::TeamPage;
