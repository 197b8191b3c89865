pub mod watcher_config;
