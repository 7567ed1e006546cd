pub mod a001_pwd_record;
pub mod a002_assistance_request;
pub mod a003_community;
pub mod a004_disability_category;
pub mod a005_disability_type;
pub mod a006_assistance_type;
pub mod a007_gender;
pub mod common;
