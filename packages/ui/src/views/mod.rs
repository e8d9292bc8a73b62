mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod profile;
pub use profile::ProfileView;

mod quiz;
pub use quiz::QuizView;

mod explorer;
pub use explorer::ExplorerView;

mod assistant;
pub use assistant::AssistantView;

mod timeline;
pub use timeline::TimelineView;

mod scholarships;
pub use scholarships::ScholarshipsView;

mod resume;
pub use resume::ResumeView;

mod settings;
pub use settings::SettingsView;

mod help;
pub use help::HelpView;
