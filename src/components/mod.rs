//! UI Components

mod about;
mod carousel;
mod contact;
mod filter_tabs;
mod footer;
mod hero;
mod language_switcher;
mod lead_delete_control;
mod navbar;
mod project_card;
mod project_details;
mod project_map;
mod projects_preview;
mod services_section;
mod testimonials_section;
mod toast_host;

pub use about::About;
pub use carousel::Carousel;
pub use contact::Contact;
pub use filter_tabs::FilterTabs;
pub use footer::Footer;
pub use hero::Hero;
pub use language_switcher::LanguageSwitcher;
pub use lead_delete_control::LeadDeleteControl;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use project_details::ProjectDetails;
pub use project_map::ProjectMap;
pub use projects_preview::ProjectsPreview;
pub use services_section::ServicesSection;
pub use testimonials_section::TestimonialsSection;
pub use toast_host::ToastHost;
