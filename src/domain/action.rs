use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Open,
    Close,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Action {
    pub r#type: ActionType,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub purpose: Option<String>,
}
