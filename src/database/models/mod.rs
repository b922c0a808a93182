pub mod bookmark;
pub mod category;
pub mod hot_source;
pub mod search_engine;
pub mod system_config;
pub mod user;

pub use bookmark::{Bookmark, BookmarkCreate, BookmarkUpdate};
pub use category::{BookmarkCategory, CategoryCreate, CategoryUpdate};
pub use hot_source::{HotSource, HotSourceCreate, HotSourceUpdate};
pub use search_engine::{SearchEngine, SearchEngineCreate, SearchEngineUpdate};
pub use system_config::{SystemConfig, SystemConfigUpdate};
pub use user::{ContainerConfig, User, UserSummary, UserUpdate};
