/// Immutable reply templates for the support assistant.
///
/// Built once at startup and injected into the resolver, so tests can swap a
/// fixture in place of the production texts. The `{wanted}`/`{instead}`
/// placeholders of [`KnowledgeBase::not_available`] are the only dynamic
/// parts; everything else is returned verbatim.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub greeting: String,
    pub off_topic: String,
    pub capabilities: String,
    pub delivery_time: String,
    pub payment: String,
    pub delivery_info: String,
    pub order_help: String,
    pub after_cart: String,
    pub app_features: String,
    pub feedback_prompt: String,
    pub feedback_positive: String,
    pub feedback_negative: String,
    pub feedback_neutral: String,
    pub feedback_generic: String,
    pub cancel_success: String,
    pub cancel_too_late: String,
    pub cancel_not_found: String,
    pub cancel_failed: String,
    pub order_status_not_found: String,
    pub refund_delivered: String,
    pub refund_timeline: String,
    pub refund_not_found: String,
    pub menu_unavailable: String,
    pub not_available_template: String,
    pub technical_difficulties: String,
}

impl KnowledgeBase {
    /// Intent-specific "we don't have that, try X instead" reply.
    pub fn not_available(&self, wanted: &str, instead: &str) -> String {
        self.not_available_template
            .replace("{wanted}", wanted)
            .replace("{instead}", instead)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            greeting: "👋 Hi! I'm Zoe, EatZone's support assistant. Ask me about your order, \
                       our menu, delivery or payments!"
                .into(),
            off_topic: "🤖 I can only help with EatZone: food orders, menu items, delivery and \
                        payments. What would you like to eat today?"
                .into(),
            capabilities: "🤖 Here's what I can do: track or cancel your order, explain refund \
                           timelines, find dishes on the menu, and answer delivery or payment \
                           questions."
                .into(),
            delivery_time: "🚚 Orders typically arrive within 30-45 minutes of confirmation."
                .into(),
            payment: "💳 We accept UPI, credit/debit cards, net banking and cash on delivery."
                .into(),
            delivery_info: "📍 We deliver across the city from 9am to 11pm. Delivery is free on \
                            orders above ₹199; a ₹29 fee applies below that."
                .into(),
            order_help: "🛒 Browse the menu, add items to your cart and hit checkout. You can pay \
                         online or choose cash on delivery."
                .into(),
            after_cart: "🛒 Great choice! Head to your cart to review the items and check out \
                         whenever you're ready."
                .into(),
            app_features: "✨ With EatZone you can browse the full menu, track orders live, cancel \
                           before preparation starts, and chat with me anytime."
                .into(),
            feedback_prompt: "📝 We'd love your feedback! Tell me what you liked or what we could \
                              do better."
                .into(),
            feedback_positive: "😊 Thank you so much! We're thrilled you enjoyed your EatZone \
                                experience."
                .into(),
            feedback_negative: "😔 We're really sorry to hear that. Your feedback has been passed \
                                on and we'll do better next time."
                .into(),
            feedback_neutral: "🙏 Thanks for sharing, honest feedback helps us improve.".into(),
            feedback_generic: "🙏 Thank you for your feedback!".into(),
            cancel_success: "✅ Your order has been cancelled successfully.".into(),
            cancel_too_late: "😔 Sorry, it's too late to cancel this order, it is already being \
                              prepared or is on its way."
                .into(),
            cancel_not_found: "🔍 I couldn't find a recent order to cancel on your account.".into(),
            cancel_failed: "⚠️ Something went wrong while cancelling your order. Please contact \
                            support@eatzone.com and we'll sort it out."
                .into(),
            order_status_not_found: "🔍 I couldn't find any recent orders for you. Once you place \
                                     an order, I can track it here."
                .into(),
            refund_delivered: "Refunds aren't available for delivered orders. If something was \
                               wrong with your food, please contact support@eatzone.com."
                .into(),
            refund_timeline: "💸 Refunds for cancelled or failed orders are processed within 5-7 \
                              business days to your original payment method."
                .into(),
            refund_not_found: "🔍 I couldn't find a recent order to refund.".into(),
            menu_unavailable: "😔 The menu isn't available right now. Please try again in a \
                               moment."
                .into(),
            not_available_template: "😔 Sorry, we don't have {wanted} right now. Would you like \
                                     to try our {instead} instead?"
                .into(),
            technical_difficulties: "⚠️ We're having technical difficulties right now. Please try \
                                     again in a moment or contact support@eatzone.com."
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_fills_both_slots() {
        let kb = KnowledgeBase::default();
        let reply = kb.not_available("biryani", "fried rice");
        assert!(reply.contains("biryani"));
        assert!(reply.contains("fried rice"));
        assert!(!reply.contains("{wanted}"));
        assert!(!reply.contains("{instead}"));
    }

    #[test]
    fn cancellation_texts_carry_required_phrases() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.cancel_success, "✅ Your order has been cancelled successfully.");
        assert!(kb.cancel_too_late.contains("too late to cancel"));
    }
}
