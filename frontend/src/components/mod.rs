pub mod community;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod navbar;
pub mod organization_dashboard;
pub mod organization_profile;
pub mod profile;
pub mod signup;
pub mod volunteer_dashboard;
