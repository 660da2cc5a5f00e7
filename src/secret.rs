use core::fmt;

/// A credential that must not end up in logs.
///
/// `Debug` and `Display` print `***`; call [`Secret::expose`] only where the
/// clear value is handed to the connection handshake.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(&'static str);

impl Secret {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn expose(&self) -> &'static str {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
