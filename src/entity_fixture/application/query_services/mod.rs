pub mod credential_resolver_impl;
