use crate::domain::account::Account;
use crate::domain::action::{Action, ActionType};
use crate::domain::ports::CurrencyConverterBox;
use crate::error::{AccountError, Result};
use tracing::{debug, warn};

/// The main entry point for processing account actions.
///
/// `AccountEngine` owns the account record by value and takes `&mut self` on
/// dispatch, so exactly one writer mutates the state and each action runs to
/// completion before the next one is applied. The currency conversion lookup
/// is the single suspension point; its failure is swallowed and only surfaces
/// as a cleared loading flag.
pub struct AccountEngine {
    account: Account,
    converter: CurrencyConverterBox,
}

impl AccountEngine {
    /// Creates a new engine over a freshly initialized account.
    ///
    /// # Arguments
    ///
    /// * `converter` - The currency conversion backend used by foreign-currency
    ///   deposits.
    pub fn new(converter: CurrencyConverterBox) -> Self {
        Self {
            account: Account::new(),
            converter,
        }
    }

    /// Dispatches a single action against the account.
    ///
    /// Lifecycle and loan actions apply their transition synchronously. A
    /// deposit runs in three phases: the loading flag is raised, the amount is
    /// resolved to USD (directly for USD, through the converter otherwise),
    /// and the result is either credited or dropped. A failed conversion does
    /// not error the dispatch.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(action = ?action.r#type, "dispatching action");

        match action.r#type {
            ActionType::Open => self.account.open(),
            ActionType::Close => self.account.close(),
            ActionType::Withdraw => {
                let amount = action
                    .amount
                    .ok_or_else(|| AccountError::ActionError("Withdraw missing amount".to_string()))?;
                self.account.withdraw(amount.into());
            }
            ActionType::Deposit => {
                let amount = action
                    .amount
                    .ok_or_else(|| AccountError::ActionError("Deposit missing amount".to_string()))?;
                let currency = action
                    .currency
                    .ok_or_else(|| AccountError::ActionError("Deposit missing currency".to_string()))?;

                self.account.begin_deposit();
                if currency == "USD" {
                    self.account.settle_deposit(amount.into());
                } else {
                    match self.converter.to_usd(amount, &currency).await {
                        Ok(credited) => self.account.settle_deposit(credited.into()),
                        Err(e) => {
                            warn!(%currency, error = %e, "conversion failed, deposit dropped");
                            self.account.abort_deposit();
                        }
                    }
                }
            }
            ActionType::RequestLoan => {
                let amount = action.amount.ok_or_else(|| {
                    AccountError::ActionError("RequestLoan missing amount".to_string())
                })?;
                let purpose = action.purpose.unwrap_or_default();
                self.account.request_loan(amount.into(), &purpose);
            }
            ActionType::PayLoan => {
                // The repaid amount is deliberately ignored.
                self.account.pay_loan();
            }
        }

        Ok(())
    }

    /// The read surface exposed to the presentation layer.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Consumes the engine and returns the final account record.
    pub fn into_account(self) -> Account {
        self.account
    }
}
