pub mod github_login;
