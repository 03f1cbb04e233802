mod key_value_store_port;
mod navigator_port;
mod post_api_port;

pub use key_value_store_port::KeyValueStorePort;
pub use navigator_port::NavigatorPort;
pub use post_api_port::PostApiPort;

#[cfg(test)]
pub mod mocks {
    pub use super::post_api_port::MockPostApiPort;
}
