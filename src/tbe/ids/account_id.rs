use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub u64);

impl AccountId {
    /// Zero is reserved as the not-an-account sentinel
    pub fn is_valid(&self) -> bool {
        return self.0 != 0;
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "AccountId({})", self.0);
    }
}
