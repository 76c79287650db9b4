//! Modular scalar arithmetic for exponents.

use crate::errors::GroupRingError;
use crate::numtheory::{extended_gcd, pow_mod};

use serde::{Deserialize, Serialize};

/// The ring Z_p of exponent residues used when reducing group-ring products.
///
/// The group-ring coefficients themselves are plain integers and are never
/// reduced; only exponents live in this ring.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, GroupRingError> {
        if modulus <= 1 {
            return Err(GroupRingError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a non-negative exponent into `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(5).unwrap();
    /// assert_eq!(ring.reduce(6), 1);
    /// assert_eq!(ring.reduce(4), 4);
    /// ```
    pub fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Normalizes a signed value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(0), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> u64 {
        value.rem_euclid(self.modulus as i64) as u64
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(12, 13), 5);
    /// ```
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let sum = a as u128 + b as u128;

        (sum % self.modulus as u128) as u64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `u128` internally to prevent overflow during multiplication
    /// before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(4, 5), 0); // 20 mod 10 = 0
    /// ```
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        let product = a as u128 * b as u128;

        (product % self.modulus as u128) as u64
    }

    /// Computes `base^exp mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.pow(3, 2), 2); // 9 mod 7 = 2
    /// assert_eq!(ring.pow(3, 0), 1);
    /// ```
    pub fn pow(&self, base: u64, exp: u64) -> u64 {
        pow_mod(base, exp, self.modulus)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `GroupRingError::NoInverse` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), or if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_units::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 7); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9).unwrap(), 9); // 9 * 9 = 81 = 1 mod 10
    /// assert!(ring.inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: u64) -> Result<u64, GroupRingError> {
        let a_norm = self.reduce(a);
        if a_norm == 0 {
            return Err(GroupRingError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm as i64, self.modulus as i64);
        if g != 1 {
            return Err(GroupRingError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}
