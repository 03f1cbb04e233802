//! Domain layer with core entities, errors, routes, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Transient notifications.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Navigable routes.
pub mod route;

pub use entities::{Comment, Post, ThemeMode};
pub use errors::{FieldError, PostField, RequestError, ValidationErrors};
pub use notification::{Notification, NotificationLevel};
pub use ports::{KeyValueStorePort, NavigatorPort, PostApiPort};
pub use route::Route;
