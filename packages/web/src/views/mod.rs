mod layout;
pub use layout::DashboardLayout;

mod login;
pub use login::Login;

mod overview;
pub use overview::Overview;

mod products;
pub use products::Products;

mod team;
pub use team::Team;

mod technologies;
pub use technologies::Technologies;

mod features;
pub use features::Features;

mod testimonials;
pub use testimonials::Testimonials;

mod contacts;
pub use contacts::Contacts;

mod awards;
pub use awards::Awards;

mod attendance;
pub use attendance::Attendance;

mod profile;
pub use profile::Profile;

mod settings;
pub use settings::Settings;
