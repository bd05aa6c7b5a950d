//! Configured access keys.

use std::{fmt, iter};

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// The two access keys the application accepts.
pub struct AccessKeys {
    admin: String,
    viewer: String,
}

impl AccessKeys {
    #[must_use]
    pub fn new(admin: impl Into<String>, viewer: impl Into<String>) -> Self {
        Self {
            admin: admin.into(),
            viewer: viewer.into(),
        }
    }

    pub(crate) fn admin(&self) -> &str {
        &self.admin
    }

    pub(crate) fn viewer(&self) -> &str {
        &self.viewer
    }
}

impl fmt::Debug for AccessKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKeys(**redacted**)")?;
        Ok(())
    }
}

impl Drop for AccessKeys {
    fn drop(&mut self) {
        self.admin.zeroize();
        self.viewer.zeroize();
    }
}

/// Compares two keys in constant time, including when their lengths differ.
pub(crate) fn keys_match(candidate: &str, expected: &str) -> bool {
    let width = candidate.len().max(expected.len());

    // Different fill bytes keep a shorter key from matching a longer one's prefix.
    let candidate_padded = padded(candidate, width, 0x00);
    let expected_padded = padded(expected, width, 0xFF);

    let lengths_equal = candidate.len().ct_eq(&expected.len());
    let contents_equal = candidate_padded.ct_eq(&expected_padded);

    (lengths_equal & contents_equal).into()
}

fn padded(key: &str, width: usize, fill: u8) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(
        key.bytes()
            .chain(iter::repeat(fill))
            .take(width)
            .collect(),
    )
}
