// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use http_token_service::HttpTokenService;
pub use store_token_cache_repository::StoreTokenCacheRepository;

mod http_token_service;
mod store_token_cache_repository;
