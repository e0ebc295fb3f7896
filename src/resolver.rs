use crate::intent::{FoodCategory, Intent};
use crate::knowledge::KnowledgeBase;
use crate::menu::{self, CategorySearch, MenuItem};
use crate::orders::{Order, OrderStatus};
use crate::store::{OrderHistory, UserId};
use std::sync::Arc;
use tracing::{debug, warn};

/// How many items a preference listing (recommend/menu) shows.
const LISTING_LIMIT: usize = 3;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "delicious", "tasty", "yummy", "loved", "love", "great", "good",
    "excellent", "perfect", "fresh",
];

const NEGATIVE_WORDS: &[&str] = &[
    "terrible", "awful", "worst", "disgusting", "bad", "cold", "late", "stale", "salty", "oily",
    "poor", "hate", "soggy",
];

const NEUTRAL_WORDS: &[&str] = &["okay", "fine", "average", "decent", "alright"];

/// Outcome of resolving one message.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub reply: String,
    /// Set when the cancellation side effect committed.
    pub cancelled_order: Option<Order>,
}

impl Resolution {
    fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            cancelled_order: None,
        }
    }
}

/// Turns an intent plus context data into the final reply.
///
/// The only side effect lives here: cancelling an order writes through the
/// [`OrderHistory`] collaborator, and the success reply is returned only when
/// that write committed. The resolver itself never fails; collaborator
/// errors degrade to fixed replies.
pub struct Resolver {
    knowledge: Arc<KnowledgeBase>,
    orders: Arc<dyn OrderHistory>,
}

impl Resolver {
    pub fn new(knowledge: Arc<KnowledgeBase>, orders: Arc<dyn OrderHistory>) -> Self {
        Self { knowledge, orders }
    }

    pub async fn resolve(
        &self,
        intent: Intent,
        message: &str,
        user: &UserId,
        recent: &[Order],
        menu: &[MenuItem],
    ) -> Resolution {
        debug!(intent = %intent, user = %user.as_str(), "resolving");
        let kb = &self.knowledge;
        match intent {
            Intent::OffTopic => Resolution::text(kb.off_topic.clone()),
            Intent::Greeting => Resolution::text(kb.greeting.clone()),
            Intent::DeliveryTime => Resolution::text(kb.delivery_time.clone()),
            Intent::Payment => Resolution::text(kb.payment.clone()),
            Intent::Delivery => Resolution::text(kb.delivery_info.clone()),
            Intent::OrderHelp => Resolution::text(kb.order_help.clone()),
            Intent::AfterCart => Resolution::text(kb.after_cart.clone()),
            Intent::AppFeatures => Resolution::text(kb.app_features.clone()),
            Intent::Feedback => Resolution::text(kb.feedback_prompt.clone()),
            Intent::FeedbackResponse => Resolution::text(self.feedback_ack(message)),
            Intent::CancelOrder => self.cancel_first(recent).await,
            Intent::OrderStatus => Resolution::text(self.order_status(recent)),
            Intent::Refund => Resolution::text(self.refund(recent)),
            Intent::Food(category) => Resolution::text(self.category_listing(category, menu)),
            Intent::Recommend => Resolution::text(self.preference_listing(
                &["special", "bestseller", "chef"],
                menu,
            )),
            Intent::Spicy => Resolution::text(self.preference_listing(
                &["spicy", "chilli", "masala", "hot"],
                menu,
            )),
            Intent::Light => Resolution::text(self.preference_listing(
                &["salad", "soup", "light", "healthy"],
                menu,
            )),
            Intent::Menu => Resolution::text(self.preference_listing(&[], menu)),
            Intent::FoodRequest | Intent::StandaloneFoodItem | Intent::GeneralFoodItem => {
                Resolution::text(self.free_text_listing(message, menu))
            }
            Intent::EatzoneGeneral => Resolution::text(self.general(message, menu)),
        }
    }

    /// Cancels the most recent order if the kitchen hasn't started on it.
    async fn cancel_first(&self, recent: &[Order]) -> Resolution {
        let kb = &self.knowledge;
        let Some(order) = recent.first() else {
            return Resolution::text(kb.cancel_not_found.clone());
        };
        if order.status.blocks_cancellation() {
            debug!(order_id = %order.id, status = %order.status, "cancellation blocked");
            return Resolution::text(kb.cancel_too_late.clone());
        }
        match self.orders.set_status(&order.id, OrderStatus::cancelled()).await {
            Ok(updated) => Resolution {
                reply: kb.cancel_success.clone(),
                cancelled_order: Some(updated),
            },
            Err(error) => {
                warn!(order_id = %order.id, error = %error, "order cancellation failed");
                Resolution::text(kb.cancel_failed.clone())
            }
        }
    }

    fn order_status(&self, recent: &[Order]) -> String {
        let Some(order) = recent.first() else {
            return self.knowledge.order_status_not_found.clone();
        };
        format!(
            "📦 Order #{}\nItems: {}\nStatus: {}\nTotal: ₹{}",
            order.short_id(),
            order.item_summary(),
            order.status,
            order.amount
        )
    }

    fn refund(&self, recent: &[Order]) -> String {
        let kb = &self.knowledge;
        match recent.first() {
            None => kb.refund_not_found.clone(),
            Some(order) if order.status.is_delivered() => kb.refund_delivered.clone(),
            Some(_) => kb.refund_timeline.clone(),
        }
    }

    fn feedback_ack(&self, message: &str) -> String {
        let kb = &self.knowledge;
        let lower = message.to_lowercase();
        if POSITIVE_WORDS.iter().any(|w| lower.contains(w)) {
            kb.feedback_positive.clone()
        } else if NEGATIVE_WORDS.iter().any(|w| lower.contains(w)) {
            kb.feedback_negative.clone()
        } else if NEUTRAL_WORDS.iter().any(|w| lower.contains(w)) {
            kb.feedback_neutral.clone()
        } else {
            kb.feedback_generic.clone()
        }
    }

    fn category_listing(&self, category: FoodCategory, menu: &[MenuItem]) -> String {
        let hits = CategorySearch::for_category(category).run(menu);
        if hits.is_empty() {
            return self
                .knowledge
                .not_available(category.label(), menu::category_suggestion(category));
        }
        menu::render_items(&hits)
    }

    /// Lighter filter for recommend/spicy/light/menu: keyword in name or
    /// category, first items of the catalog when nothing matches.
    fn preference_listing(&self, terms: &[&str], menu: &[MenuItem]) -> String {
        if menu.is_empty() {
            return self.knowledge.menu_unavailable.clone();
        }
        let hits: Vec<&MenuItem> = menu
            .iter()
            .filter(|item| {
                terms.iter().any(|term| {
                    item.name.to_lowercase().contains(term)
                        || item.category.to_lowercase().contains(term)
                })
            })
            .take(LISTING_LIMIT)
            .collect();
        if hits.is_empty() {
            let first: Vec<&MenuItem> = menu.iter().take(LISTING_LIMIT).collect();
            return menu::render_items(&first);
        }
        menu::render_items(&hits)
    }

    /// Looks up menu items named in free text ("i want paneer", "mango").
    fn free_text_listing(&self, message: &str, menu: &[MenuItem]) -> String {
        let terms = menu::extract_terms(message);
        if terms.is_empty() {
            return self.preference_listing(&[], menu);
        }
        let hits = CategorySearch::new(&terms, &[], &[], LISTING_LIMIT).run(menu);
        if hits.is_empty() {
            return self
                .knowledge
                .not_available(&terms.join(" "), "chef's specials");
        }
        menu::render_items(&hits)
    }

    /// General in-domain chatter: one attempt at a menu lookup before the
    /// capabilities overview.
    fn general(&self, message: &str, menu: &[MenuItem]) -> String {
        let terms = menu::extract_terms(message);
        if !terms.is_empty() {
            let hits = CategorySearch::new(&terms, &[], &[], LISTING_LIMIT).run(menu);
            if !hits.is_empty() {
                return menu::render_items(&hits);
            }
        }
        self.knowledge.capabilities.clone()
    }
}
