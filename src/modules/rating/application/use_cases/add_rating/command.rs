use uuid::Uuid;

/// Command for rating a catalog item
#[derive(Debug, Clone)]
pub struct AddRatingCommand {
    pub item_id: Uuid,
    pub value: f64,
    pub caller_id: Uuid,
}

impl AddRatingCommand {
    pub fn new(item_id: Uuid, value: f64, caller_id: Uuid) -> Self {
        Self {
            item_id,
            value,
            caller_id,
        }
    }
}
