mod auth_port;
mod catalog_port;

pub use auth_port::AuthPort;
pub use catalog_port::CatalogPort;

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
}
