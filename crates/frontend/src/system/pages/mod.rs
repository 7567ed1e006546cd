pub mod auth_card;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod otp;
pub mod reset_password;
