//! Process-wide table of known primes
//!
//! Finite-field moduli are validated against this table. It is seeded with
//! every prime up to 1000 and can be grown once at initialization with
//! [`extend_primes_up_to`]; the extension takes the write lock, so readers
//! never observe a half-built table.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::sync::RwLock;

/// Upper bound of the primes the table is seeded with.
pub const DEFAULT_PRIME_BOUND: u64 = 1000;

static PRIME_TABLE: Lazy<RwLock<BTreeSet<u64>>> =
    Lazy::new(|| RwLock::new(sieve_of_eratosthenes(DEFAULT_PRIME_BOUND)));

/// Sieve of Eratosthenes up to and including `bound`.
fn sieve_of_eratosthenes(bound: u64) -> BTreeSet<u64> {
    if bound < 2 {
        return BTreeSet::new();
    }
    let n = bound as usize;
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;
    let mut primes = BTreeSet::new();
    for i in 2..=n {
        if is_prime[i] {
            primes.insert(i as u64);
            let mut j = i * i;
            while j <= n {
                is_prime[j] = false;
                j += i;
            }
        }
    }
    primes
}

/// Check whether `p` is in the table of known primes.
pub fn is_known_prime(p: u64) -> bool {
    PRIME_TABLE
        .read()
        .expect("prime table lock poisoned")
        .contains(&p)
}

/// Extend the table of known primes up to `bound`.
///
/// Intended to be called once at initialization before finite-field work
/// with large moduli. The whole extension happens under the write lock.
pub fn extend_primes_up_to(bound: u64) {
    let fresh = sieve_of_eratosthenes(bound);
    let mut table = PRIME_TABLE.write().expect("prime table lock poisoned");
    table.extend(fresh);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        assert!(is_known_prime(2));
        assert!(is_known_prime(5));
        assert!(is_known_prime(997));
        assert!(!is_known_prime(1));
        assert!(!is_known_prime(4));
        assert!(!is_known_prime(1000));
    }

    #[test]
    fn test_extension() {
        assert!(!is_known_prime(1009));
        extend_primes_up_to(1100);
        assert!(is_known_prime(1009));
        assert!(is_known_prime(1093));
        assert!(!is_known_prime(1024));
    }

    #[test]
    fn test_sieve_small_bounds() {
        assert!(sieve_of_eratosthenes(0).is_empty());
        assert!(sieve_of_eratosthenes(1).is_empty());
        assert_eq!(
            sieve_of_eratosthenes(10).into_iter().collect::<Vec<_>>(),
            vec![2, 3, 5, 7]
        );
    }
}
