//! Rule-based support chat engine for the EatZone food-delivery app:
//! sanitize the message, classify its intent against priority-ordered
//! keyword tables, then resolve a reply from canned templates, the menu
//! catalog or the caller's recent orders.

pub mod classifier;
pub mod engine;
pub mod intent;
pub mod knowledge;
pub mod menu;
pub mod orders;
pub mod resolver;
pub mod sanitize;
pub mod store;

pub use classifier::classify;
pub use engine::{ChatEngine, ChatError, Reply};
pub use intent::{FoodCategory, Intent};
pub use knowledge::KnowledgeBase;
pub use menu::{CategorySearch, MenuItem};
pub use orders::{Order, OrderLine, OrderStatus};
pub use resolver::{Resolution, Resolver};
pub use sanitize::sanitize;
pub use store::{InMemoryOrders, MenuCatalog, OrderHistory, StaticMenu, UserId};
