use uuid::Uuid;

/// Command for buying tickets to a screening
#[derive(Debug, Clone)]
pub struct BuyTicketsCommand {
    pub screening_id: Uuid,
    pub quantity: u32,
    pub caller_id: Uuid,
}

impl BuyTicketsCommand {
    pub fn new(screening_id: Uuid, quantity: u32, caller_id: Uuid) -> Self {
        Self {
            screening_id,
            quantity,
            caller_id,
        }
    }
}
