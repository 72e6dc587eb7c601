use uuid::Uuid;

use crate::models::portfolio;

/// Decide whether a portfolio may be shown to a requester.
///
/// Public portfolios are visible to everyone, anonymous callers included.
/// Private portfolios are visible only to their owner; every other caller is
/// treated the same whether or not they are signed in.
pub fn can_view(portfolio: &portfolio::Model, requester: Option<Uuid>) -> bool {
    portfolio.is_public || requester == Some(portfolio.user_id)
}
