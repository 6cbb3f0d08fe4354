pub use self::ring_digest::Sha256;

mod ring_digest {
    use primitives::{Primitive, PrimitiveImpl};
    use primitives::sod::Sod;

    use data_encoding::HEXLOWER;
    use ring::digest;

    use errors::*;

    use std::fmt;

    /// Plain SHA-256 digest of the password, hex encoded.
    ///
    /// This is the fast, unsalted baseline the hardened schemes are
    /// compared against. Backed by `ring::digest`.
    pub struct Sha256;

    lazy_static! {
        static ref DEFAULT: Sha256 = Sha256;
    }

    impl PrimitiveImpl for Sha256 {
        fn hash(&self, password: &str) -> Result<String> {
            let digest = digest::digest(&digest::SHA256, password.as_bytes());
            Ok(HEXLOWER.encode(digest.as_ref()))
        }

        fn name(&self) -> &'static str {
            "sha256"
        }

        fn params_as_vec(&self) -> Vec<(&'static str, String)> {
            Vec::new()
        }
    }

    impl fmt::Debug for Sha256 {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Sha256")
        }
    }

    impl Sha256 {
        /// Get the default SHA-256 instance.
        pub fn default() -> Primitive {
            Primitive(Sod::Static(&*DEFAULT))
        }
    }
}
