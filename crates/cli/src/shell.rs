//! Interactive shell: parses commands, drives the write and read sides.

use std::collections::BTreeMap;

use domain::{InventoryCommand, InventoryEvent, InventoryQuery, ProductId, RestockCommandHandler};
use event_store::FileEventStore;
use projections::{Products, ProjectionProcessor};
use saga::RestockSagaEventHandler;

use crate::error::Result;

/// What the caller should do after a command was executed.
pub enum ShellOutcome {
    /// Print the output (possibly empty) and keep reading input.
    Continue(String),
    /// Print the farewell and stop the loop.
    Exit(String),
}

/// The interactive session: an event log plus the catalog read model.
///
/// Every mutating command appends to the log, feeds the new events through
/// the projection processor, and saves the log before reporting back, so
/// the on-disk file always reflects what the user was told.
pub struct Shell {
    store: FileEventStore<InventoryEvent>,
    products: Products,
    processor: ProjectionProcessor,
}

impl Shell {
    /// Wraps a loaded event store, catching the catalog view up to the log.
    pub fn new(store: FileEventStore<InventoryEvent>) -> Result<Self> {
        let products = Products::new();
        let mut processor = ProjectionProcessor::new();
        processor.register(Box::new(products.clone()));
        processor.run_catch_up(store.events())?;
        Ok(Self {
            store,
            products,
            processor,
        })
    }

    /// Number of events currently in the log.
    pub fn event_count(&self) -> usize {
        self.store.len()
    }

    /// The command reference printed at startup and for `help`.
    pub fn usage() -> &'static str {
        "Commands:\n\
         \x20 add <product_id>             - Add a product\n\
         \x20 restock <product_id> <qty>   - Request a restock\n\
         \x20 capacity <product_id> <cap>  - Define product capacity\n\
         \x20 threshold <qty>              - Record a stock threshold\n\
         \x20 catalog                      - Query product catalog\n\
         \x20 clear                        - Clear all events\n\
         \x20 help                         - Show this help\n\
         \x20 exit                         - Exit the CLI\n"
    }

    /// Executes one line of input and returns what to print.
    pub fn execute(&mut self, input: &str) -> Result<ShellOutcome> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(head) = parts.first() else {
            return Ok(ShellOutcome::Continue(String::new()));
        };
        let command = head.to_lowercase();

        let output = match command.as_str() {
            "add" => {
                if parts.len() < 2 {
                    "Usage: add <product_id>".to_string()
                } else {
                    self.record(InventoryEvent::add_product(parts[1]))?;
                    self.store.save()?;
                    format!("Product '{}' added", parts[1])
                }
            }

            "restock" => {
                if parts.len() < 3 {
                    "Usage: restock <product_id> <quantity>".to_string()
                } else {
                    match parts[2].parse::<i64>() {
                        Err(_) => "Quantity must be a number".to_string(),
                        Ok(quantity) => {
                            let events = self
                                .dispatch(&InventoryCommand::restock_order(parts[1], quantity))?;
                            self.store.save()?;
                            if events
                                .iter()
                                .any(|e| matches!(e, InventoryEvent::RestockOrdered { .. }))
                            {
                                format!("Restocked '{}' with {} units", parts[1], quantity)
                            } else {
                                "Restock rejected: an order is already outstanding".to_string()
                            }
                        }
                    }
                }
            }

            "capacity" => {
                if parts.len() < 3 {
                    "Usage: capacity <product_id> <capacity>".to_string()
                } else {
                    match parts[2].parse::<i64>() {
                        Err(_) => "Capacity must be a number".to_string(),
                        Ok(capacity) => {
                            self.record(InventoryEvent::capacity_defined(parts[1], capacity))?;
                            self.store.save()?;
                            format!("Capacity for '{}' set to {}", parts[1], capacity)
                        }
                    }
                }
            }

            "threshold" => {
                if parts.len() < 2 {
                    "Usage: threshold <quantity>".to_string()
                } else {
                    match parts[1].parse::<i64>() {
                        Err(_) => "Quantity must be a number".to_string(),
                        Ok(quantity) => {
                            let lines = self.record_threshold(quantity)?;
                            self.store.save()?;
                            lines.join("\n")
                        }
                    }
                }
            }

            "catalog" => {
                let catalog: BTreeMap<ProductId, i64> = self
                    .products
                    .handle(&InventoryQuery::Catalog)
                    .into_iter()
                    .collect();
                let rendered = serde_json::to_string_pretty(&catalog)?;
                format!("Product Catalog:\n{rendered}")
            }

            "clear" => {
                self.store.clear();
                self.processor.rebuild_all(self.store.events())?;
                self.store.save()?;
                "All events cleared!".to_string()
            }

            "help" => Self::usage().to_string(),

            "exit" => return Ok(ShellOutcome::Exit("Goodbye!".to_string())),

            _ => format!("Unknown command: {command}"),
        };

        Ok(ShellOutcome::Continue(output))
    }

    /// Appends one event and feeds it to the read models.
    fn record(&mut self, event: InventoryEvent) -> Result<()> {
        let record = self.store.append(event).clone();
        self.processor.process_event(&record)?;
        Ok(())
    }

    /// Runs a command through the aggregate; appends whatever it publishes.
    fn dispatch(&mut self, command: &InventoryCommand) -> Result<Vec<InventoryEvent>> {
        let mut published = Vec::new();
        let mut handler =
            RestockCommandHandler::new(self.store.get_all(), |events: &[InventoryEvent]| {
                published.extend_from_slice(events);
            });
        handler.handle(command);
        drop(handler);

        for event in &published {
            self.record(event.clone())?;
        }
        Ok(published)
    }

    /// Records a threshold event and lets the saga chain follow-on commands.
    fn record_threshold(&mut self, quantity: i64) -> Result<Vec<String>> {
        let trigger = InventoryEvent::threshold_reached(quantity);
        self.record(trigger.clone())?;

        let mut commands = Vec::new();
        let mut saga_handler =
            RestockSagaEventHandler::new(self.store.get_all(), |sent: &[InventoryCommand]| {
                commands.extend_from_slice(sent);
            });
        saga_handler.handle(&trigger);
        drop(saga_handler);

        let mut lines = vec![format!("Threshold {quantity} recorded")];
        for command in &commands {
            for event in self.dispatch(command)? {
                match event {
                    InventoryEvent::RestockOrdered {
                        product_id,
                        quantity,
                    } => lines.push(format!("Restock ordered: {quantity} units of '{product_id}'")),
                    InventoryEvent::RestockAlreadyOrdered {} => lines
                        .push("Restock rejected: an order is already outstanding".to_string()),
                    _ => {}
                }
            }
        }
        Ok(lines)
    }
}
