// One handler function per menu action, each generic over `HttpClient` and
// `IoHandler` so tests can script both sides.

pub mod auth;
pub mod books;
pub mod health;
pub mod protected;
pub mod settings;


pub use self::auth::{
    handle_login_action, handle_logout_action, handle_registration_action,
    handle_show_tokens_action,
};
pub use self::books::handle_search_books_action;
pub use self::health::handle_health_check_action;
pub use self::protected::handle_protected_action;
pub use self::settings::handle_server_settings_action;
