use crate::menu::MenuItem;
use crate::orders::{Order, OrderStatus};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Who is asking. Auth is resolved by the caller; the engine never re-derives
/// it, and guests never trigger an order lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserId {
    Guest,
    Known(String),
}

impl UserId {
    pub fn as_str(&self) -> &str {
        match self {
            UserId::Guest => "guest",
            UserId::Known(id) => id,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, UserId::Guest)
    }
}

/// Read-only view of the menu catalog.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn list_all(&self) -> Result<Vec<MenuItem>>;
}

/// Order lookups plus the single mutation the engine performs: setting an
/// order's status during cancellation.
#[async_trait]
pub trait OrderHistory: Send + Sync {
    /// Recent orders for the user, newest first, at most `limit`.
    async fn recent_for(&self, user: &UserId, limit: usize) -> Result<Vec<Order>>;

    /// Persist a status change and return the updated order.
    async fn set_status(&self, order_id: &str, status: OrderStatus) -> Result<Order>;
}

/// Fixed in-memory catalog, used by the demo binary and tests.
pub struct StaticMenu {
    items: Vec<MenuItem>,
}

impl StaticMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl MenuCatalog for StaticMenu {
    async fn list_all(&self) -> Result<Vec<MenuItem>> {
        Ok(self.items.clone())
    }
}

/// In-memory order store, used by the demo binary and tests.
pub struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrders {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
        }
    }

    pub async fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl OrderHistory for InMemoryOrders {
    async fn recent_for(&self, user: &UserId, limit: usize) -> Result<Vec<Order>> {
        let orders = self.orders.lock().await;
        let mut mine: Vec<Order> = orders
            .iter()
            .filter(|o| o.user_id == user.as_str())
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.date.cmp(&a.date));
        mine.truncate(limit);
        Ok(mine)
    }

    async fn set_status(&self, order_id: &str, status: OrderStatus) -> Result<Order> {
        let mut orders = self.orders.lock().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| anyhow!("unknown order {order_id}"))?;
        order.status = status;
        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn order(id: &str, user: &str, age_minutes: i64) -> Order {
        Order {
            id: id.into(),
            user_id: user.into(),
            items: vec![],
            amount: 100,
            status: OrderStatus::new(OrderStatus::PENDING),
            date: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn recent_for_is_newest_first_and_scoped() -> Result<()> {
        let store = InMemoryOrders::new(vec![
            order("a", "u1", 60),
            order("b", "u2", 5),
            order("c", "u1", 10),
        ]);
        let mine = store.recent_for(&UserId::Known("u1".into()), 5).await?;
        assert_eq!(mine.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(), ["c", "a"]);
        Ok(())
    }

    #[tokio::test]
    async fn set_status_updates_in_place() -> Result<()> {
        let store = InMemoryOrders::new(vec![order("a", "u1", 1)]);
        let updated = store.set_status("a", OrderStatus::cancelled()).await?;
        assert_eq!(updated.status.as_str(), OrderStatus::CANCELLED);
        assert_eq!(store.snapshot().await[0].status.as_str(), OrderStatus::CANCELLED);
        assert!(store.set_status("zz", OrderStatus::cancelled()).await.is_err());
        Ok(())
    }
}
