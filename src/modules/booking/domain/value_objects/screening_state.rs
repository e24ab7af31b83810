use chrono::{DateTime, Utc};

use crate::modules::booking::domain::entities::Screening;

/// Sale window of a screening relative to the call time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningState {
    NotFound,
    Past,
    Open,
}

impl ScreeningState {
    pub fn evaluate(screening: Option<&Screening>, now: DateTime<Utc>) -> Self {
        match screening {
            None => ScreeningState::NotFound,
            Some(screening) if screening.is_past(now) => ScreeningState::Past,
            Some(_) => ScreeningState::Open,
        }
    }
}
