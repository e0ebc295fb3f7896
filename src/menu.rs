use crate::intent::FoodCategory;
use serde::{Deserialize, Serialize};

/// One orderable item from the menu catalog. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Whole rupees.
    pub price: u64,
    pub category: String,
    pub description: String,
}

/// Parameterized menu search with exclusions.
///
/// One helper backs every food intent so the cascade behaves identically
/// everywhere: items matching an `include` term in their name win first,
/// then items matching in category or description, then items matching a
/// broader `fallback` term anywhere. Every stage skips items that match an
/// `exclude` term, and results are capped at `limit`.
#[derive(Debug, Clone)]
pub struct CategorySearch {
    include: Vec<String>,
    exclude: Vec<String>,
    fallback: Vec<String>,
    limit: usize,
}

impl CategorySearch {
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S], fallback: &[S], limit: usize) -> Self {
        let lower = |terms: &[S]| {
            terms
                .iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect::<Vec<_>>()
        };
        Self {
            include: lower(include),
            exclude: lower(exclude),
            fallback: lower(fallback),
            limit,
        }
    }

    /// Search configuration for a dedicated food category.
    pub fn for_category(category: FoodCategory) -> Self {
        let terms = category_terms(category);
        Self::new(terms.include, terms.exclude, terms.fallback, 3)
    }

    /// Run the cascade over the catalog. Each stage is a single pass.
    pub fn run<'a>(&self, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        let by_name = self.collect(menu, |item, term| item.name.to_lowercase().contains(term));
        if !by_name.is_empty() {
            return by_name;
        }
        let by_category = self.collect(menu, |item, term| {
            item.category.to_lowercase().contains(term)
                || item.description.to_lowercase().contains(term)
        });
        if !by_category.is_empty() {
            return by_category;
        }
        if self.fallback.is_empty() {
            return Vec::new();
        }
        menu.iter()
            .filter(|item| !self.excluded(item))
            .filter(|item| {
                let haystack = format!(
                    "{} {} {}",
                    item.name.to_lowercase(),
                    item.category.to_lowercase(),
                    item.description.to_lowercase()
                );
                self.fallback.iter().any(|term| haystack.contains(term))
            })
            .take(self.limit)
            .collect()
    }

    fn collect<'a, F>(&self, menu: &'a [MenuItem], matches: F) -> Vec<&'a MenuItem>
    where
        F: Fn(&MenuItem, &str) -> bool,
    {
        menu.iter()
            .filter(|item| !self.excluded(item))
            .filter(|item| self.include.iter().any(|term| matches(item, term)))
            .take(self.limit)
            .collect()
    }

    fn excluded(&self, item: &MenuItem) -> bool {
        let haystack = format!(
            "{} {} {}",
            item.name.to_lowercase(),
            item.category.to_lowercase(),
            item.description.to_lowercase()
        );
        self.exclude.iter().any(|term| haystack.contains(term))
    }
}

struct CategoryTerms {
    include: &'static [&'static str],
    exclude: &'static [&'static str],
    fallback: &'static [&'static str],
    suggestion: &'static str,
}

fn category_terms(category: FoodCategory) -> CategoryTerms {
    match category {
        FoodCategory::Biryani => CategoryTerms {
            include: &["biryani", "biriyani"],
            // Plain rice dishes are fair fallbacks; rice-flecked salads and
            // veg sides are not.
            exclude: &["zucchini", "vegetable", "salad"],
            fallback: &["rice"],
            suggestion: "fried rice",
        },
        FoodCategory::Pizza => CategoryTerms {
            include: &["pizza"],
            exclude: &[],
            fallback: &[],
            suggestion: "pasta",
        },
        FoodCategory::Burger => CategoryTerms {
            include: &["burger"],
            exclude: &[],
            fallback: &["patty"],
            suggestion: "sandwiches",
        },
        FoodCategory::Cake => CategoryTerms {
            include: &["cake"],
            exclude: &["pancake"],
            fallback: &["pastry"],
            suggestion: "desserts",
        },
        FoodCategory::Dessert => CategoryTerms {
            include: &["dessert", "ice cream", "sweet"],
            exclude: &[],
            fallback: &["cake", "pastry"],
            suggestion: "cakes",
        },
        FoodCategory::Salad => CategoryTerms {
            include: &["salad"],
            exclude: &[],
            fallback: &["veg"],
            suggestion: "sandwiches",
        },
        FoodCategory::Rolls => CategoryTerms {
            include: &["roll"],
            exclude: &["cinnamon"],
            fallback: &["wrap"],
            suggestion: "sandwiches",
        },
        FoodCategory::Sandwich => CategoryTerms {
            include: &["sandwich"],
            exclude: &[],
            fallback: &["bread"],
            suggestion: "burgers",
        },
        FoodCategory::Pasta => CategoryTerms {
            include: &["pasta"],
            exclude: &[],
            fallback: &["penne", "macaroni"],
            suggestion: "noodles",
        },
        FoodCategory::Noodles => CategoryTerms {
            include: &["noodle", "chowmein", "chow mein"],
            exclude: &[],
            fallback: &["hakka"],
            suggestion: "pasta",
        },
    }
}

/// What to offer when a category search comes back empty.
pub fn category_suggestion(category: FoodCategory) -> &'static str {
    category_terms(category).suggestion
}

/// Filler words ignored when mining free-text messages for menu terms.
const STOPWORDS: &[&str] = &[
    "i", "want", "need", "some", "a", "an", "the", "please", "me", "get", "give", "do", "you",
    "have", "food", "to", "eat", "hungry", "im", "i'm", "would", "like", "can", "for", "order",
    "something", "anything", "show",
];

/// Candidate menu search terms mined from a free-text message.
pub fn extract_terms(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 3 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Renders one item in the `ITEM:<name>|PRICE:₹<price>|CATEGORY:<category>`
/// micro-format the storefront parses for its add-to-cart chips. Fields are
/// stripped of `|` so the token stays parseable.
pub fn render_item(item: &MenuItem) -> String {
    format!(
        "ITEM:{}|PRICE:₹{}|CATEGORY:{}",
        item.name.replace('|', ""),
        item.price,
        item.category.replace('|', "")
    )
}

/// Renders a result set as space-joined micro-format tokens.
pub fn render_items(items: &[&MenuItem]) -> String {
    items
        .iter()
        .map(|item| render_item(item))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: u64, category: &str, description: &str) -> MenuItem {
        MenuItem {
            id: format!("id-{name}"),
            name: name.into(),
            price,
            category: category.into(),
            description: description.into(),
        }
    }

    fn fixture() -> Vec<MenuItem> {
        vec![
            item("Margherita Pizza", 280, "Pizza", "classic cheese pizza"),
            item("Hyderabadi Biryani", 320, "Rice", "dum-cooked chicken biryani"),
            item("Zucchini Rice Bowl", 240, "Pure Veg", "vegetable rice with zucchini"),
            item("Jeera Rice", 150, "Rice", "steamed rice tempered with cumin"),
            item("Veg Burger", 120, "Burger", "crispy patty, house sauce"),
            item("Chocolate Cake", 350, "Cake", "rich cocoa sponge"),
        ]
    }

    #[test]
    fn name_match_wins_before_fallback() {
        let menu = fixture();
        let hits = CategorySearch::for_category(FoodCategory::Biryani).run(&menu);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hyderabadi Biryani");
    }

    #[test]
    fn fallback_respects_exclusions() {
        let menu = vec![
            item("Zucchini Rice Bowl", 240, "Pure Veg", "vegetable rice"),
            item("Jeera Rice", 150, "Rice", "steamed rice"),
        ];
        let hits = CategorySearch::for_category(FoodCategory::Biryani).run(&menu);
        assert_eq!(hits.len(), 1, "only the plain rice dish may fall back");
        assert_eq!(hits[0].name, "Jeera Rice");
    }

    #[test]
    fn pizza_never_leaks_into_rice_fallback() {
        let menu = fixture();
        let hits = CategorySearch::for_category(FoodCategory::Pizza).run(&menu);
        assert!(hits
            .iter()
            .all(|i| i.name.to_lowercase().contains("pizza")
                || i.category.to_lowercase().contains("pizza")));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn results_are_capped() {
        let menu: Vec<_> = (0..10)
            .map(|n| item(&format!("Pizza {n}"), 200 + n, "Pizza", "cheesy"))
            .collect();
        let hits = CategorySearch::for_category(FoodCategory::Pizza).run(&menu);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn micro_format_is_exact_and_pipe_free() {
        let i = item("Margherita Pizza", 280, "Pizza", "classic");
        assert_eq!(render_item(&i), "ITEM:Margherita Pizza|PRICE:₹280|CATEGORY:Pizza");

        let tricky = item("Odd|Name", 99, "Weird|Cat", "");
        assert_eq!(render_item(&tricky), "ITEM:OddName|PRICE:₹99|CATEGORY:WeirdCat");
    }

    #[test]
    fn extract_terms_drops_fillers() {
        assert_eq!(extract_terms("I want some paneer please"), vec!["paneer"]);
        assert!(extract_terms("i want something").is_empty());
    }
}
