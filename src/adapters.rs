mod console;
mod http;

#[cfg(feature = "web")]
mod browser;
#[cfg(feature = "web")]
mod dom;

pub use console::{ConsolePage, HIDDEN_NOTICE};
pub use http::HttpActivityApi;

#[cfg(feature = "web")]
pub use browser::{BrowserTimeProvider, init_console_logger};
#[cfg(feature = "web")]
pub use dom::DomPage;

#[cfg(not(target_arch = "wasm32"))]
pub use self::tokio_time::TokioTimeProvider;

#[cfg(not(target_arch = "wasm32"))]
mod tokio_time {
    use std::time::Duration;

    use crate::ports;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioTimeProvider;

    impl ports::TimeProvider for TokioTimeProvider {
        type Sleep<'a>
            = tokio::time::Sleep
        where
            Self: 'a;

        fn sleep(&self, duration: Duration) -> Self::Sleep<'_> {
            tokio::time::sleep(duration)
        }
    }
}
