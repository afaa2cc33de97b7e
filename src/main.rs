use std::sync::Arc;

use coffee_shop::adapters::InMemoryEventBus;
use coffee_shop::application::{
    CustomerNotifier, NotifyCustomersCommand, NotifyCustomersHandler, PlaceOrderCommand,
    PlaceOrderHandler, PrepareOrdersCommand, PrepareOrdersHandler,
};
use coffee_shop::config::AppConfig;
use coffee_shop::domain::foundation::CommandMetadata;
use coffee_shop::domain::menu::{AddOn, BaseItem, MenuItem};
use coffee_shop::domain::notification::{Customer, OrderSystem};
use coffee_shop::domain::ordering::{OrderCommand, ORDER_PREPARED};
use coffee_shop::ports::EventSubscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const READY_MESSAGE: &str = "Your orders are ready for pickup.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Production logs are JSON; RUST_LOG wins over the configured filter
    let fmt_layer = if config.is_production() {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.shop.log_level)),
        )
        .init();

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "falling back to default configuration");
    }
    config.validate()?;
    tracing::info!(
        shop = %config.shop.name,
        environment = %config.shop.environment,
        "starting simulation"
    );

    // === 1. Wire the bus ===
    let bus = Arc::new(InMemoryEventBus::new());
    let order_system = Arc::new(OrderSystem::new());
    bus.subscribe(
        ORDER_PREPARED,
        Arc::new(CustomerNotifier::new(order_system.clone())),
    );

    let place_order = PlaceOrderHandler::new(bus.clone());
    let prepare_orders = PrepareOrdersHandler::new(bus.clone());
    let notify_customers = NotifyCustomersHandler::new(order_system.clone(), bus.clone());
    let metadata = CommandMetadata::new()
        .with_source("cli")
        .ensure_correlation_id();

    // === 2. Customers ===
    let juan = Arc::new(Customer::new("Juan")?);
    let mary = Arc::new(Customer::new("Mary")?);
    order_system.attach(juan.clone());
    order_system.attach(mary.clone());

    println!("\n=== {} Simulation ===", config.shop.name);

    // === 3. Take orders ===
    let menu = [
        (
            juan.clone(),
            vec![
                MenuItem::new(BaseItem::beverage("Coffee", 2.5))
                    .decorate(AddOn::Milk)
                    .decorate(AddOn::Cream)
                    .decorate(AddOn::Cinnamon),
                MenuItem::new(BaseItem::food("Muffin", 3.0))
                    .decorate(AddOn::ChocolateFilling)
                    .decorate(AddOn::CaramelTopping),
            ],
        ),
        (
            mary.clone(),
            vec![
                MenuItem::new(BaseItem::beverage("Green tea", 2.0)),
                MenuItem::new(BaseItem::beverage("Coffee", 2.5))
                    .decorate(AddOn::DoubleEspresso)
                    .decorate(AddOn::Cream),
                MenuItem::new(BaseItem::food("Sandwich", 4.0))
                    .decorate(AddOn::HamCheeseFilling),
            ],
        ),
    ];

    let mut orders: Vec<OrderCommand> = Vec::new();
    for (customer, items) in menu {
        println!("\nCustomer: {}", customer.name());
        for item in items {
            let placed = place_order
                .handle(
                    PlaceOrderCommand {
                        customer: customer.clone(),
                        item,
                    },
                    metadata.clone(),
                )
                .await?;
            println!("{}", order_line(&placed.line, placed.event.price, &config));
            orders.push(placed.order);
        }
    }

    // === 4. Prepare ===
    println!();
    let prepared = prepare_orders
        .handle(PrepareOrdersCommand { orders }, metadata.clone())
        .await?;
    for line in &prepared.lines {
        println!("{}", line);
    }
    if !prepared.is_complete() {
        tracing::warn!(
            undelivered = prepared.failures.len(),
            "some customers were not told their order is ready"
        );
    }

    // === 5. Notify ===
    if config.features.notify_customers {
        let notified = notify_customers
            .handle(
                NotifyCustomersCommand {
                    message: READY_MESSAGE.to_string(),
                },
                metadata,
            )
            .await?;
        println!("\n[System]: {}\n", notified.announcement);
    }

    for customer in [&juan, &mary] {
        tracing::debug!(
            customer = customer.name(),
            inbox = ?customer.notifications(),
            "customer inbox"
        );
    }
    tracing::info!(events = bus.event_count(), "simulation finished");

    Ok(())
}

fn order_line(line: &str, price: f64, config: &AppConfig) -> String {
    if config.features.show_prices {
        format!("{} ({})", line, config.shop.format_price(price))
    } else {
        line.to_string()
    }
}
