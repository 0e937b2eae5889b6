//! Types whose bindings come from `bindings.json` through the build script.

include!(concat!(env!("OUT_DIR"), "/account_account_binding.rs"));
include!(concat!(env!("OUT_DIR"), "/account_ledger_binding.rs"));

///
/// Ledger
///

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<i64>,
}

impl Ledger {
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.entries.iter().sum()
    }

    pub fn push(&mut self, amount: i64) {
        self.entries.push(amount);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

///
/// Account
///

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    id: u64,
    owner: String,
    frozen: bool,
    closed: bool,
    limit: Option<i64>,
    pub ledger: Ledger,
}

impl Account {
    #[must_use]
    pub fn new(id: u64, owner: String) -> Self {
        Self {
            id,
            owner,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn get_owner(&self) -> String {
        self.owner.clone()
    }

    pub fn set_owner(&mut self, owner: String) {
        self.owner = owner;
    }

    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub const fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    #[must_use]
    pub const fn get_limit(&self) -> Option<i64> {
        self.limit
    }

    pub const fn set_limit(&mut self, limit: Option<i64>) {
        self.limit = limit;
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.ledger.total()
    }

    pub fn deposit(&mut self, amount: i64) {
        if !self.frozen && !self.closed {
            self.ledger.push(amount);
        }
    }

    pub const fn close(&mut self) {
        self.closed = true;
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn audit_tag(&self) -> String {
        format!("{}:{}", self.id, self.owner)
    }
}
