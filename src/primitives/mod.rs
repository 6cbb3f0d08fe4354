//! `Primitive` refers to a named password hashing function together with an
//! immutable parameter set, as implemented by external libraries.
//!
//! Each algorithm has a `new` and `default` function. The former can be
//! provided parameters and creates a new dynamic instance of that parameter
//! set, whereas the latter refers to a statically referenced parameter set.
//!
//! All implementations are wrapped in a `Primitive` struct, which in effect
//! works like a trait, since it derefs to a `PrimitiveImpl`. The harness only
//! ever observes the cost of producing a hash and its encoded string form,
//! never the hash's internal structure.

/// SHA-256 digest, the fast baseline.
///
/// Backed by `ring::digest`.
mod digest;
pub use self::digest::Sha256;

/// `bcrypt` implementation.
///
/// Backed by the `bcrypt` crate, which generates its own salt and returns
/// the usual `$2b$...` encoded form.
mod bcrypt;
pub use self::bcrypt::Bcrypt;

/// `Argon2` implementation.
///
/// Currently only a native Rust implementation through `argon2rs`.
mod argon2;
pub use self::argon2::Argon2;

/// `Scrypt` implementation.
///
/// Backed by the pure Rust `scrypt` crate.
mod scrypt;
pub use self::scrypt::Scrypt;

mod sod;
pub use self::sod::Sod;

use errors::*;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Password hashing primitives.
///
/// Each variant is backed by a different implementation. Internally,
/// primitives are either static values, for example the `lazy_static`
/// generated default parameter sets, or dynamically allocated variables,
/// which are `Arc<Box<...>>`.
#[derive(Clone)]
pub struct Primitive(pub Sod<PrimitiveImpl>);

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0.deref())
    }
}

/// Trait defining the functionality of a hashing primitive.
pub trait PrimitiveImpl: fmt::Debug + Send + Sync {
    /// Hash `password`, returning the algorithm's standard encoded string
    /// form. Salted primitives generate a fresh salt per invocation.
    fn hash(&self, password: &str) -> Result<String>;

    /// Short algorithm identifier, e.g. `"bcrypt"`.
    fn name(&self) -> &'static str;

    /// Output the parameters of the primitive as a list of tuples.
    fn params_as_vec(&self) -> Vec<(&'static str, String)>;
}

impl<P: PrimitiveImpl + 'static> From<P> for Primitive {
    fn from(other: P) -> Self {
        Primitive(Sod::Dynamic(Arc::new(Box::new(other))))
    }
}

impl Deref for Primitive {
    type Target = Sod<PrimitiveImpl>;

    fn deref(&self) -> &Sod<PrimitiveImpl> {
        &self.0
    }
}

impl Primitive {
    /// Human-readable description of the parameter set, e.g.
    /// `"cost=12"` or `"m=16384,t=2,p=1"`. Parameterless primitives
    /// describe themselves as `"none"`.
    pub fn param_description(&self) -> String {
        let params = self.0.params_as_vec();
        if params.is_empty() {
            "none".to_string()
        } else {
            params
                .iter()
                .map(|&(k, ref v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}
