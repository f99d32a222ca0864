use thiserror::Error;

use crate::model::Money;

/// Who covered the whole bill at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payer {
    User,
    Friend,
}

/// One bill split between the user and a single friend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BillSplit {
    pub total: Money,
    pub paid_by_user: Money,
    pub payer: Payer,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("bill total must be positive (got {0})")]
    NonPositiveBill(Money),
    #[error("your expense must not be negative (got {0})")]
    NegativeExpense(Money),
    #[error("your expense {paid} exceeds the bill total {total}")]
    ExpenseExceedsBill { paid: Money, total: Money },
}

/// Computes the balance delta to apply to the friend for one split.
///
/// The friend's share is `total - paid_by_user`. When the user covered the
/// bill the friend now owes that share (positive delta); when the friend
/// covered it the user owes their own share (negative delta). Exact
/// decimal arithmetic, no rounding.
pub fn compute_delta(split: BillSplit) -> Result<Money, SplitError> {
    let BillSplit {
        total,
        paid_by_user,
        payer,
    } = split;

    if total.signum() <= 0 {
        return Err(SplitError::NonPositiveBill(total));
    }
    if paid_by_user.signum() < 0 {
        return Err(SplitError::NegativeExpense(paid_by_user));
    }
    if paid_by_user > total {
        return Err(SplitError::ExpenseExceedsBill {
            paid: paid_by_user,
            total,
        });
    }

    let paid_by_friend = total - paid_by_user;
    Ok(match payer {
        Payer::User => paid_by_friend,
        Payer::Friend => -paid_by_user,
    })
}
