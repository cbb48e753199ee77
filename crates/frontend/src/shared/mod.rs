pub mod api_utils;
pub mod components;
pub mod contact_info;
pub mod icons;
pub mod mail_api;
pub mod modal;
pub mod notice;
pub mod storage;
pub mod url_query;
