pub use self::native::Scrypt;

mod native {
    extern crate scrypt;

    use primitives::{Primitive, PrimitiveImpl};
    use primitives::sod::Sod;

    use data_encoding::{BASE64, HEXLOWER};

    use errors::*;

    use std::fmt;

    /// Struct holding `scrypt` parameters.
    ///
    /// Backed by the pure Rust `scrypt` crate. Hash output is a PHC-like
    /// string, `$scrypt$N=..,r=..,p=..$<salt_b64>$<dk_hex>`, with a 64-byte
    /// derived key.
    pub struct Scrypt {
        log_n: u8,
        r: u32,
        p: u32,
        params: scrypt::Params,
    }

    lazy_static! {
        static ref DEFAULT: Scrypt = Scrypt::new_impl(14, 8, 1);
    }

    impl PrimitiveImpl for Scrypt {
        fn hash(&self, password: &str) -> Result<String> {
            let salt = ::gen_salt()?;
            let mut dk = [0_u8; 64];
            scrypt::scrypt(password.as_bytes(), &salt, &self.params, &mut dk)
                .map_err(|e| Error::from(format!("scrypt failed: {}", e)))?;
            Ok(format!(
                "$scrypt$N={},r={},p={}${}${}",
                1_u64 << self.log_n,
                self.r,
                self.p,
                BASE64.encode(&salt),
                HEXLOWER.encode(&dk)
            ))
        }

        fn name(&self) -> &'static str {
            "scrypt"
        }

        fn params_as_vec(&self) -> Vec<(&'static str, String)> {
            vec![
                ("N", (1_u64 << self.log_n).to_string()),
                ("r", self.r.to_string()),
                ("p", self.p.to_string()),
            ]
        }
    }

    impl fmt::Debug for Scrypt {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Scrypt, N: {}, r: {}, p: {}", 1_u64 << self.log_n, self.r, self.p)
        }
    }

    impl Scrypt {
        /// Gets the default scrypt instance (N=16384, r=8, p=1).
        pub fn default() -> Primitive {
            Primitive(Sod::Static(&*DEFAULT))
        }

        fn new_impl(log_n: u8, r: u32, p: u32) -> Self {
            Scrypt {
                log_n: log_n,
                r: r,
                p: p,
                params: scrypt::Params::new(log_n, r, p).expect("invalid scrypt parameters"),
            }
        }

        /// Create a new scrypt instance.
        pub fn new(log_n: u8, r: u32, p: u32) -> Primitive {
            Self::new_impl(log_n, r, p).into()
        }
    }
}
