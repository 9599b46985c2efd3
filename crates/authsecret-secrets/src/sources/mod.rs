//! Strong random sources.

pub mod openssl;
pub mod os;

pub use openssl::OpensslRand;
pub use os::OsRandom;

use authsecret_types::{GeneratorConfig, StrongSource, StrongSourceKind};

/// Number of random bytes in a strong secret.
pub const SECRET_BYTES: usize = 32;

/// Build the strong source selected by configuration.
pub fn from_config(config: &GeneratorConfig) -> Box<dyn StrongSource> {
    match config.source {
        StrongSourceKind::Os => Box::new(OsRandom),
        StrongSourceKind::Openssl => Box::new(OpensslRand::new(config.openssl_path.clone())),
    }
}
