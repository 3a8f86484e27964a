// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use token_cache_repository::TokenCacheRepository;

mod token_cache_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::token_cache_repository::MockTokenCacheRepository;
}
