use crate::classifier::classify;
use crate::intent::Intent;
use crate::knowledge::KnowledgeBase;
use crate::menu::MenuItem;
use crate::orders::Order;
use crate::resolver::Resolver;
use crate::sanitize::sanitize;
use crate::store::{MenuCatalog, OrderHistory, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// How many recent orders the engine asks the history for.
const RECENT_ORDER_LIMIT: usize = 3;

/// The one caller-visible error: an empty message after sanitization.
/// Everything else degrades to a normal [`Reply`].
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is required")]
    EmptyMessage,
}

/// The chat response. Always the same shape; failures are phrased as
/// natural-language text, never as a distinct error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "reply")]
    pub text: String,
}

/// Stateless request pipeline: sanitize, classify, fetch what the intent
/// needs, resolve. One instance serves any number of concurrent requests;
/// the only shared state is the immutable knowledge base and keyword tables.
pub struct ChatEngine {
    menu: Arc<dyn MenuCatalog>,
    orders: Arc<dyn OrderHistory>,
    knowledge: Arc<KnowledgeBase>,
    resolver: Resolver,
}

impl ChatEngine {
    pub fn new(
        menu: Arc<dyn MenuCatalog>,
        orders: Arc<dyn OrderHistory>,
        knowledge: KnowledgeBase,
    ) -> Self {
        let knowledge = Arc::new(knowledge);
        let resolver = Resolver::new(knowledge.clone(), orders.clone());
        Self {
            menu,
            orders,
            knowledge,
            resolver,
        }
    }

    /// Handles one chat message end to end.
    ///
    /// Returns [`ChatError::EmptyMessage`] when nothing usable survives
    /// sanitization (the HTTP-400 path). Any unexpected internal failure is
    /// logged and mapped to the technical-difficulties reply, so callers
    /// always get the same reply shape back.
    pub async fn handle(&self, message: Option<&str>, user: UserId) -> Result<Reply, ChatError> {
        let clean = sanitize(message.unwrap_or(""));
        if clean.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        match self.run(&clean, &user).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                error!(error = %err, user = %user.as_str(), "chat pipeline failed");
                Ok(Reply {
                    text: self.knowledge.technical_difficulties.clone(),
                })
            }
        }
    }

    async fn run(&self, clean: &str, user: &UserId) -> anyhow::Result<Reply> {
        let intent = classify(clean);
        debug!(intent = %intent, user = %user.as_str(), "classified message");

        let (recent, menu) = self.fetch_context(intent, user).await;
        let resolution = self
            .resolver
            .resolve(intent, clean, user, &recent, &menu)
            .await;
        Ok(Reply {
            text: resolution.reply,
        })
    }

    /// Fetches only what the intent needs. The two reads are independent and
    /// issued concurrently when both are wanted; a failed read degrades to an
    /// empty collection so the resolver can still answer gracefully.
    async fn fetch_context(&self, intent: Intent, user: &UserId) -> (Vec<Order>, Vec<MenuItem>) {
        let want_orders = intent.needs_orders() && !user.is_guest();
        let want_menu = intent.needs_menu();

        match (want_orders, want_menu) {
            (false, false) => (Vec::new(), Vec::new()),
            (true, false) => (self.fetch_orders(user).await, Vec::new()),
            (false, true) => (Vec::new(), self.fetch_menu().await),
            (true, true) => {
                let (orders, menu) = tokio::join!(self.fetch_orders(user), self.fetch_menu());
                (orders, menu)
            }
        }
    }

    async fn fetch_orders(&self, user: &UserId) -> Vec<Order> {
        match self.orders.recent_for(user, RECENT_ORDER_LIMIT).await {
            Ok(orders) => orders,
            Err(error) => {
                warn!(error = %error, user = %user.as_str(), "order lookup failed");
                Vec::new()
            }
        }
    }

    async fn fetch_menu(&self) -> Vec<MenuItem> {
        match self.menu.list_all().await {
            Ok(items) => items,
            Err(error) => {
                warn!(error = %error, "menu lookup failed");
                Vec::new()
            }
        }
    }
}
