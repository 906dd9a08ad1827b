//! Arbitrary precision integers on base 10^18 decimal clusters, with
//! Karatsuba multiplication, doubling-search division and a textbook RSA
//! layer built on top.
//!
//! ```
//! use cluster_rsa::bigint::BigInteger;
//! use cluster_rsa::rsa;
//!
//! let n: BigInteger = "3658315382137043".parse().unwrap();
//! let e: BigInteger = "17".parse().unwrap();
//! let d: BigInteger = "3012726845747393".parse().unwrap();
//! let m: BigInteger = "123456".parse().unwrap();
//!
//! let c = rsa::encrypt(&n, &e, &m).unwrap();
//! assert_eq!(rsa::decrypt(&n, &d, &c).unwrap(), m);
//! ```

pub mod bigint;
pub mod rsa;
pub mod util;

pub use bigint::BigInteger;
