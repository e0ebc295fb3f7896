use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu categories with a dedicated lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Biryani,
    Pizza,
    Burger,
    Cake,
    Dessert,
    Salad,
    Rolls,
    Sandwich,
    Pasta,
    Noodles,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Biryani => "biryani",
            FoodCategory::Pizza => "pizza",
            FoodCategory::Burger => "burger",
            FoodCategory::Cake => "cake",
            FoodCategory::Dessert => "dessert",
            FoodCategory::Salad => "salad",
            FoodCategory::Rolls => "rolls",
            FoodCategory::Sandwich => "sandwich",
            FoodCategory::Pasta => "pasta",
            FoodCategory::Noodles => "noodles",
        }
    }
}

/// The classified purpose of a user message.
///
/// Exactly one intent is selected per message; [`crate::classify`] is total
/// over sanitized non-empty input with [`Intent::OffTopic`] as the universal
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    CancelOrder,
    OrderStatus,
    Refund,
    DeliveryTime,
    Payment,
    Delivery,
    Food(FoodCategory),
    Recommend,
    Spicy,
    Light,
    Menu,
    Feedback,
    FeedbackResponse,
    Greeting,
    AppFeatures,
    AfterCart,
    OrderHelp,
    FoodRequest,
    StandaloneFoodItem,
    GeneralFoodItem,
    EatzoneGeneral,
    OffTopic,
}

impl Intent {
    /// Wire-level label, kept compatible with the support API's vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::CancelOrder => "cancelOrder",
            Intent::OrderStatus => "orderStatus",
            Intent::Refund => "refund",
            Intent::DeliveryTime => "deliveryTime",
            Intent::Payment => "payment",
            Intent::Delivery => "delivery",
            Intent::Food(category) => category.label(),
            Intent::Recommend => "recommend",
            Intent::Spicy => "spicy",
            Intent::Light => "light",
            Intent::Menu => "menu",
            Intent::Feedback => "feedback",
            Intent::FeedbackResponse => "feedbackResponse",
            Intent::Greeting => "greeting",
            Intent::AppFeatures => "appFeatures",
            Intent::AfterCart => "afterCart",
            Intent::OrderHelp => "orderHelp",
            Intent::FoodRequest => "foodRequest",
            Intent::StandaloneFoodItem => "standaloneFoodItem",
            Intent::GeneralFoodItem => "generalFoodItem",
            Intent::EatzoneGeneral => "eatzone_general",
            Intent::OffTopic => "off_topic",
        }
    }

    /// Whether resolving this intent reads the caller's recent orders.
    pub fn needs_orders(&self) -> bool {
        matches!(
            self,
            Intent::CancelOrder | Intent::OrderStatus | Intent::Refund
        )
    }

    /// Whether resolving this intent reads the menu catalog.
    ///
    /// Intents that answer from fixed templates skip the fetch entirely,
    /// which also covers the off-topic short-circuit.
    pub fn needs_menu(&self) -> bool {
        matches!(
            self,
            Intent::Food(_)
                | Intent::Recommend
                | Intent::Spicy
                | Intent::Light
                | Intent::Menu
                | Intent::FoodRequest
                | Intent::StandaloneFoodItem
                | Intent::GeneralFoodItem
                | Intent::EatzoneGeneral
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_out_the_vocabulary() {
        assert_eq!(Intent::CancelOrder.label(), "cancelOrder");
        assert_eq!(Intent::Food(FoodCategory::Pizza).label(), "pizza");
        assert_eq!(Intent::OffTopic.label(), "off_topic");
        assert_eq!(Intent::EatzoneGeneral.to_string(), "eatzone_general");
    }

    #[test]
    fn template_intents_need_no_data() {
        for intent in [
            Intent::Greeting,
            Intent::OffTopic,
            Intent::DeliveryTime,
            Intent::Payment,
            Intent::Feedback,
            Intent::FeedbackResponse,
            Intent::AppFeatures,
        ] {
            assert!(!intent.needs_orders(), "{intent} should not fetch orders");
            assert!(!intent.needs_menu(), "{intent} should not fetch the menu");
        }
    }

    #[test]
    fn order_intents_fetch_orders_only() {
        for intent in [Intent::CancelOrder, Intent::OrderStatus, Intent::Refund] {
            assert!(intent.needs_orders());
            assert!(!intent.needs_menu());
        }
    }
}
