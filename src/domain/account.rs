use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` to provide type safety for
/// balance arithmetic. Values are signed: the account balance is allowed to go
/// negative, so no floor is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Balance {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// The state of the demo bank account.
///
/// A single composite record: funds, outstanding loan, and the open/loading
/// flags. All mutation goes through the transition methods below, which are
/// total over their inputs and deliberately validation-free (a withdrawal may
/// overdraw, a deposit may be negative).
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct Account {
    /// Current funds. May go negative.
    pub balance: Balance,
    /// Outstanding loan principal. Zero means no loan.
    pub loan: Balance,
    /// Free-form description of the current loan, empty when there is none.
    pub loan_purpose: String,
    /// Whether the account is open.
    #[serde(rename = "active")]
    pub is_active: bool,
    /// True while a deposit conversion is in flight.
    #[serde(rename = "loading")]
    pub is_loading: bool,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the account. A no-op if already active, otherwise resets funds
    /// and loan before activating.
    pub fn open(&mut self) {
        if self.is_active {
            return;
        }
        self.balance = Balance::ZERO;
        self.loan = Balance::ZERO;
        self.is_active = true;
    }

    /// Closes the account, resetting the whole record to its initial values.
    /// A no-op while a loan is outstanding or the balance is nonzero.
    pub fn close(&mut self) {
        if self.loan > Balance::ZERO || self.balance != Balance::ZERO {
            return;
        }
        *self = Self::default();
    }

    /// Withdraws funds. No bound check: overdrawing is permitted.
    pub fn withdraw(&mut self, amount: Balance) {
        self.balance -= amount;
    }

    /// Marks a deposit conversion as in flight.
    pub fn begin_deposit(&mut self) {
        self.is_loading = true;
    }

    /// Credits a settled deposit (already denominated in USD).
    pub fn settle_deposit(&mut self, amount: Balance) {
        self.balance += amount;
        self.is_loading = false;
    }

    /// Drops an unsettled deposit after a failed conversion. The balance is
    /// left untouched.
    pub fn abort_deposit(&mut self) {
        self.is_loading = false;
    }

    /// Takes out a loan: the principal is recorded and credited to the
    /// balance immediately. A no-op while a loan is already outstanding.
    pub fn request_loan(&mut self, amount: Balance, purpose: &str) {
        if self.loan > Balance::ZERO {
            return;
        }
        self.loan = amount;
        self.loan_purpose = purpose.to_string();
        self.balance += amount;
    }

    /// Clears the loan. The repaid amount is not taken from the balance and
    /// partial repayment is not supported: the loan is zeroed outright.
    pub fn pay_loan(&mut self) {
        self.loan = Balance::ZERO;
        self.loan_purpose.clear();
    }
}
