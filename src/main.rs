use chrono::{Duration, Utc};
use eatzone_support::{
    ChatEngine, ChatError, InMemoryOrders, KnowledgeBase, MenuItem, Order, OrderLine, OrderStatus,
    StaticMenu, UserId,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

fn demo_menu() -> Vec<MenuItem> {
    let item = |id: &str, name: &str, price: u64, category: &str, description: &str| MenuItem {
        id: id.into(),
        name: name.into(),
        price,
        category: category.into(),
        description: description.into(),
    };
    vec![
        item("m1", "Margherita Pizza", 280, "Pizza", "classic cheese pizza"),
        item("m2", "Hyderabadi Biryani", 320, "Rice", "dum-cooked chicken biryani"),
        item("m3", "Veg Burger", 120, "Burger", "crispy patty, house sauce"),
        item("m4", "Chocolate Cake", 350, "Cake", "rich cocoa sponge"),
        item("m5", "Greek Salad", 180, "Salad", "feta, olives, cucumber"),
        item("m6", "Spicy Paneer Roll", 150, "Rolls", "paneer tikka wrap, mint chutney"),
        item("m7", "Hakka Noodles", 190, "Noodles", "wok-tossed veg noodles"),
    ]
}

fn demo_orders(user: &str) -> Vec<Order> {
    vec![Order {
        id: "ORD9F31A2".into(),
        user_id: user.into(),
        items: vec![
            OrderLine { name: "Margherita Pizza".into(), quantity: 2 },
            OrderLine { name: "Chocolate Cake".into(), quantity: 1 },
        ],
        amount: 910,
        status: OrderStatus::new(OrderStatus::PENDING),
        date: Utc::now() - Duration::minutes(12),
    }]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let user = UserId::Known("demo-user".into());
    let engine = ChatEngine::new(
        Arc::new(StaticMenu::new(demo_menu())),
        Arc::new(InMemoryOrders::new(demo_orders(user.as_str()))),
        KnowledgeBase::default(),
    );

    println!("zoe - EatZone support chat (ctrl-d to quit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match engine.handle(Some(&line), user.clone()).await {
            Ok(reply) => println!("{}", reply.text),
            Err(ChatError::EmptyMessage) => println!("Please type a message."),
        }
    }
    Ok(())
}
