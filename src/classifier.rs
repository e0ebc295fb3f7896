use crate::intent::{FoodCategory, Intent};

/// How a rule's keywords are matched against the lower-cased message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    /// Case-insensitive substring containment.
    Substring,
    /// Whole-word match, for short keywords like "hi" that would otherwise
    /// fire inside unrelated words.
    Word,
}

/// One row of the priority table: first row with a matching keyword wins.
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
    matching: Match,
    /// Post-match check that may reroute the message to a different intent.
    guard: Option<fn(&str) -> Option<Intent>>,
}

const fn rule(intent: Intent, keywords: &'static [&'static str]) -> IntentRule {
    IntentRule {
        intent,
        keywords,
        matching: Match::Substring,
        guard: None,
    }
}

const fn word_rule(intent: Intent, keywords: &'static [&'static str]) -> IntentRule {
    IntentRule {
        intent,
        keywords,
        matching: Match::Word,
        guard: None,
    }
}

/// Garbage tokens that must never be treated as a legitimate food lookup.
const NONSENSE_TOKENS: &[&str] = &["xyz", "random food", "asdf", "qwerty", "lorem ipsum"];

/// Everyday food nouns recognised even without a request phrase around them.
const COMMON_FOODS: &[&str] = &[
    "apple", "banana", "mango", "rice", "bread", "milk", "egg", "eggs", "chicken", "paneer",
    "potato", "tomato", "onion", "fruit", "fruits", "vegetable", "juice", "tea", "coffee",
    "water", "curd", "butter",
];

/// Broad domain vocabulary that keeps a message inside EatZone territory.
/// Word-matched so that e.g. "eat" cannot fire inside "great".
const DOMAIN_KEYWORDS: &[&str] = &[
    "order", "orders", "food", "delivery", "deliver", "restaurant", "eat", "eating", "hungry",
    "meal", "meals", "lunch", "dinner", "breakfast", "snack", "eatzone", "dish", "dishes",
    "cuisine",
];

/// Loose sentiment words used by the last fallback before off-topic.
const SENTIMENT_WORDS: &[&str] = &[
    "good", "great", "nice", "bad", "poor", "okay", "fine", "love", "hate", "excellent", "thanks",
    "thank",
];

/// A message is "short" when it plausibly names a single thing rather than
/// narrating something unrelated.
const SHORT_MESSAGE_CHARS: usize = 40;

fn nonsense_guard(lower: &str) -> Option<Intent> {
    if NONSENSE_TOKENS.iter().any(|t| lower.contains(t)) {
        Some(Intent::OffTopic)
    } else {
        None
    }
}

/// Priority-ordered rule table. Actionable order intents sit above food
/// lookups, which sit above informational templates and the greeting.
static RULES: &[IntentRule] = &[
    rule(Intent::OffTopic, NONSENSE_TOKENS),
    rule(Intent::CancelOrder, &["cancel"]),
    rule(
        Intent::OrderStatus,
        &[
            "order status",
            "where is my order",
            "track my order",
            "my order",
            "order update",
            "track order",
        ],
    ),
    rule(Intent::Refund, &["refund", "money back"]),
    rule(
        Intent::FeedbackResponse,
        &[
            "loved it",
            "amazing",
            "delicious",
            "awesome",
            "tasty",
            "yummy",
            "worst",
            "terrible",
            "awful",
            "disgusting",
            "bad experience",
            "too salty",
            "too oily",
            "stale",
        ],
    ),
    rule(
        Intent::Feedback,
        &["feedback", "complain", "complaint", "review", "suggestion"],
    ),
    rule(Intent::Food(FoodCategory::Biryani), &["biryani", "biriyani"]),
    rule(Intent::Food(FoodCategory::Pizza), &["pizza"]),
    rule(Intent::Food(FoodCategory::Burger), &["burger"]),
    rule(Intent::Food(FoodCategory::Cake), &["cake"]),
    rule(
        Intent::Food(FoodCategory::Dessert),
        &["dessert", "ice cream", "sweets"],
    ),
    rule(Intent::Food(FoodCategory::Salad), &["salad"]),
    rule(Intent::Food(FoodCategory::Rolls), &["roll"]),
    rule(Intent::Food(FoodCategory::Sandwich), &["sandwich"]),
    rule(Intent::Food(FoodCategory::Pasta), &["pasta"]),
    rule(
        Intent::Food(FoodCategory::Noodles),
        &["noodle", "chowmein", "chow mein"],
    ),
    rule(
        Intent::StandaloneFoodItem,
        &["samosa", "momos", "dosa", "idli", "lassi", "tandoori", "dal makhani", "shake"],
    ),
    rule(Intent::AfterCart, &["cart", "checkout", "check out"]),
    rule(
        Intent::OrderHelp,
        &["how to order", "how do i order", "place an order", "place order", "how to buy"],
    ),
    // "eta", "pay", "cod" and friends are too short for substring matching:
    // they fire inside "vegetarian", "repay" and "code".
    word_rule(
        Intent::DeliveryTime,
        &["how long", "delivery time", "when will", "eta", "how much time"],
    ),
    word_rule(
        Intent::Payment,
        &["payment", "pay", "upi", "card", "cash on delivery", "cod"],
    ),
    rule(
        Intent::Delivery,
        &["delivery", "deliver", "shipping", "delivery charge"],
    ),
    IntentRule {
        intent: Intent::FoodRequest,
        keywords: &[
            "i need",
            "i want",
            "can i get",
            "give me",
            "do you have",
            "i would like",
            "i'd like",
            "craving",
        ],
        matching: Match::Substring,
        guard: Some(nonsense_guard),
    },
    rule(
        Intent::AppFeatures,
        &["features", "what can you do", "how does this work", "about the app"],
    ),
    rule(
        Intent::Recommend,
        &["recommend", "suggest", "what should i eat", "best food", "popular"],
    ),
    rule(Intent::Spicy, &["spicy", "something hot", "masaledar"]),
    rule(Intent::Light, &["something light", "healthy", "low calorie", "diet food"]),
    rule(
        Intent::Menu,
        &["menu", "what do you have", "show me food", "all items", "what do you sell"],
    ),
    word_rule(
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good evening", "namaste", "yo"],
    ),
];

fn contains_word(lower: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        return lower.contains(keyword);
    }
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == keyword)
}

fn matches_any(lower: &str, keywords: &[&str], matching: Match) -> bool {
    match matching {
        Match::Substring => keywords.iter().any(|k| lower.contains(k)),
        Match::Word => keywords.iter().any(|k| contains_word(lower, k)),
    }
}

/// Maps a sanitized, non-empty message to exactly one [`Intent`].
///
/// Pure and deterministic: the priority table is walked top to bottom and the
/// first matching rule wins. When no rule fires, a fallback chain keeps the
/// answer useful: common food nouns in a short message become a general food
/// lookup, domain vocabulary keeps the conversation in EatZone territory,
/// bare sentiment becomes a feedback acknowledgment, and everything else is
/// off-topic.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();

    for rule in RULES {
        if matches_any(&lower, rule.keywords, rule.matching) {
            if let Some(guard) = rule.guard {
                if let Some(rerouted) = guard(&lower) {
                    return rerouted;
                }
            }
            return rule.intent;
        }
    }

    let short = lower.chars().count() <= SHORT_MESSAGE_CHARS;
    if short && COMMON_FOODS.iter().any(|f| contains_word(&lower, f)) {
        return Intent::GeneralFoodItem;
    }
    if DOMAIN_KEYWORDS.iter().any(|k| contains_word(&lower, k)) {
        return Intent::EatzoneGeneral;
    }
    if short && SENTIMENT_WORDS.iter().any(|w| contains_word(&lower, w)) {
        return Intent::FeedbackResponse;
    }
    Intent::OffTopic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actionable_intents_win_over_generic_ones() {
        assert_eq!(classify("cancel my order"), Intent::CancelOrder);
        assert_eq!(classify("where is my order?"), Intent::OrderStatus);
        assert_eq!(classify("I want a refund"), Intent::Refund);
    }

    #[test]
    fn category_beats_request_phrase() {
        assert_eq!(classify("I want pizza"), Intent::Food(FoodCategory::Pizza));
        assert_eq!(
            classify("give me some chicken biryani"),
            Intent::Food(FoodCategory::Biryani)
        );
    }

    #[test]
    fn request_phrase_without_category_is_food_request() {
        assert_eq!(classify("I want something for lunch"), Intent::FoodRequest);
    }

    #[test]
    fn nonsense_reroutes_to_off_topic() {
        assert_eq!(classify("xyz random food"), Intent::OffTopic);
        assert_eq!(classify("i want xyz"), Intent::OffTopic);
    }

    #[test]
    fn greeting_is_word_scoped() {
        assert_eq!(classify("hello"), Intent::Greeting);
        assert_eq!(classify("hey there"), Intent::Greeting);
        // "hi" must not fire inside other words.
        assert_ne!(classify("what is this"), Intent::Greeting);
    }

    #[test]
    fn short_payment_and_eta_tokens_are_word_scoped() {
        // "eta" inside "vegetarian" and "cod" inside "code" must not fire.
        assert_eq!(classify("do you have vegetarian dishes"), Intent::FoodRequest);
        assert_ne!(classify("what is your promo code"), Intent::Payment);
        assert_ne!(classify("tell me the order details"), Intent::DeliveryTime);
        // The real tokens still route as whole words.
        assert_eq!(classify("what is the eta"), Intent::DeliveryTime);
        assert_eq!(classify("can i pay by card"), Intent::Payment);
    }

    #[test]
    fn explicit_sentiment_is_feedback_response() {
        assert_eq!(classify("amazing food, loved it"), Intent::FeedbackResponse);
        assert_eq!(classify("the food was terrible"), Intent::FeedbackResponse);
    }

    #[test]
    fn fallback_chain_orders_general_paths() {
        assert_eq!(classify("mango"), Intent::GeneralFoodItem);
        assert_eq!(classify("tell me about my dinner options"), Intent::EatzoneGeneral);
        assert_eq!(classify("good"), Intent::FeedbackResponse);
        assert_eq!(classify("quantum chromodynamics"), Intent::OffTopic);
    }

    #[test]
    fn deterministic() {
        for text in ["I want pizza", "cancel my order", "hello", "zzz"] {
            let first = classify(text);
            for _ in 0..5 {
                assert_eq!(classify(text), first);
            }
        }
    }

    #[test]
    fn total_over_arbitrary_input() {
        // Never panics, always lands on a variant.
        for text in ["", "!!!", "日本語のテキスト", "a", &"x".repeat(500)] {
            let _ = classify(text);
        }
    }
}
