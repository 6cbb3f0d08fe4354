pub use self::native::Bcrypt;

mod native {
    use bcrypt;

    use primitives::{Primitive, PrimitiveImpl};
    use primitives::sod::Sod;

    use errors::*;

    use std::fmt;
    use std::sync::Arc;

    /// `bcrypt` parameter set.
    ///
    /// Holds the cost value. The `bcrypt` crate generates the salt and
    /// returns the standard `$2b$...` encoded form.
    #[derive(Clone, Deserialize, Serialize)]
    pub struct Bcrypt {
        cost: u32,
    }

    lazy_static! {
        static ref DEFAULT: Arc<Box<PrimitiveImpl>> = {
            Arc::new(Box::new(Bcrypt::new_impl(bcrypt::DEFAULT_COST)))
        };
    }

    impl PrimitiveImpl for Bcrypt {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(bcrypt::hash(password, self.cost)?)
        }

        fn name(&self) -> &'static str {
            "bcrypt"
        }

        fn params_as_vec(&self) -> Vec<(&'static str, String)> {
            vec![("cost", self.cost.to_string())]
        }
    }

    impl fmt::Debug for Bcrypt {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "Bcrypt, cost: {:?}", self.cost)
        }
    }

    impl Bcrypt {
        /// Construct a new `Bcrypt` parameter set.
        pub fn new(cost: u32) -> Primitive {
            Self::new_impl(cost).into()
        }

        fn new_impl(cost: u32) -> Self {
            Bcrypt { cost: cost }
        }

        /// Get the default `Bcrypt` parameter set (cost 12).
        pub fn default() -> Primitive {
            Primitive(Sod::Dynamic((*DEFAULT).clone()))
        }
    }
}

#[cfg(test)]
mod bcrypt_test {
    use bcrypt;
    use primitives::PrimitiveImpl;

    #[test]
    fn sanity_check() {
        let params = super::Bcrypt::new(4);
        println!("{:?}", params);
        let hash = params.hash("hunter2").unwrap();
        // standard modular crypt form, and the cost we asked for
        assert!(hash.starts_with("$2"));
        assert!(hash.contains("$04$"));
        assert!(bcrypt::verify("hunter2", &hash).unwrap());
        assert!(!bcrypt::verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn fresh_salt_per_invocation() {
        let params = super::Bcrypt::new(4);
        assert_ne!(params.hash("hunter2").unwrap(), params.hash("hunter2").unwrap());
    }
}
