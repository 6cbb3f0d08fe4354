pub use self::native::Argon2;

mod native {
    extern crate argon2rs;

    use primitives::{Primitive, PrimitiveImpl};
    use primitives::sod::Sod;

    use data_encoding::BASE64_NOPAD;

    use errors::*;

    use std::fmt;

    /// Parameter set for Argon2i.
    ///
    /// This implementation is backed by the `argon2rs` crate. Hash output is
    /// the PHC string form, e.g. `$argon2i$m=16384,t=2,p=1$<salt>$<hash>`.
    pub struct Argon2 {
        algorithm: argon2rs::Argon2,
    }

    lazy_static! {
        static ref DEFAULT: Argon2 = {
            Argon2 {
                algorithm: argon2rs::Argon2::default(argon2rs::Variant::Argon2i),
            }
        };
    }

    impl PrimitiveImpl for Argon2 {
        fn hash(&self, password: &str) -> Result<String> {
            let salt = ::gen_salt()?;
            let mut hash = [0_u8; 32];
            self.algorithm.hash(&mut hash, password.as_bytes(), &salt, &[], &[]);
            let (_, kib, passes, lanes) = self.algorithm.params();
            Ok(format!(
                "$argon2i$m={},t={},p={}${}${}",
                kib,
                passes,
                lanes,
                BASE64_NOPAD.encode(&salt),
                BASE64_NOPAD.encode(&hash)
            ))
        }

        fn name(&self) -> &'static str {
            "argon2"
        }

        fn params_as_vec(&self) -> Vec<(&'static str, String)> {
            let (_, kib, passes, lanes) = self.algorithm.params();
            vec![("m", kib.to_string()), ("t", passes.to_string()), ("p", lanes.to_string())]
        }
    }

    impl Argon2 {
        /// Get the default Argon2i parameter set.
        pub fn default() -> Primitive {
            Primitive(Sod::Static(&*DEFAULT))
        }

        fn new_impl(passes: u32, lanes: u32, kib: u32) -> Self {
            Argon2 {
                algorithm: argon2rs::Argon2::new(passes, lanes, kib, argon2rs::Variant::Argon2i)
                    .expect("invalid Argon2 parameters"),
            }
        }

        /// Creates a new Argon2i instance.
        pub fn new(passes: u32, lanes: u32, kib: u32) -> Primitive {
            Self::new_impl(passes, lanes, kib).into()
        }
    }

    impl fmt::Debug for Argon2 {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Argon2i: {:?}", self.algorithm.params())
        }
    }
}

#[cfg(test)]
mod test {
    use primitives::PrimitiveImpl;

    #[test]
    fn sanity_check() {
        let params = super::Argon2::new(2, 1, 256);
        println!("{:?}", params);
        let hash = params.hash("hunter2").unwrap();
        assert!(hash.starts_with("$argon2i$m=256,t=2,p=1$"));
        // PHC form: empty prefix, id, params, salt, hash
        assert_eq!(hash.split('$').count(), 5);
    }

    #[test]
    fn fresh_salt_per_invocation() {
        let params = super::Argon2::new(2, 1, 256);
        assert_ne!(params.hash("hunter2").unwrap(), params.hash("hunter2").unwrap());
    }
}
