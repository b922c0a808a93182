pub mod bookmarks;
pub mod categories;
pub mod hot_sources;
pub mod search_engines;
pub mod system_config;
pub mod users;

pub use bookmarks::BookmarkRepository;
pub use categories::CategoryRepository;
pub use hot_sources::HotSourceRepository;
pub use search_engines::SearchEngineRepository;
pub use system_config::SystemConfigRepository;
pub use users::UserRepository;
