pub mod dingtalk_config;
pub mod dingtalk_notifier;
pub mod utils;
