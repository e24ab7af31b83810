use crate::shared::application::PaginationParams;
use crate::shared::errors::AppError;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

pub struct Validator;

impl Validator {
    pub fn validate_rating_value(value: f64) -> Result<(), AppError> {
        if !value.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(AppError::ValidationError(
                "Rating must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_ticket_quantity(quantity: u32) -> Result<(), AppError> {
        if quantity == 0 {
            return Err(AppError::ValidationError(
                "Number of tickets must be at least 1!".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pagination(params: &PaginationParams, max_page_size: u32) -> Result<(), AppError> {
        if params.page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if params.page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if params.page_size > max_page_size {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                max_page_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(Validator::validate_rating_value(0.0).is_ok());
        assert!(Validator::validate_rating_value(5.0).is_ok());
        assert!(Validator::validate_rating_value(5.01).is_err());
        assert!(Validator::validate_rating_value(-0.1).is_err());
    }

    #[test]
    fn non_finite_rating_rejected() {
        assert!(Validator::validate_rating_value(f64::NAN).is_err());
        assert!(Validator::validate_rating_value(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_tickets_rejected() {
        assert!(Validator::validate_ticket_quantity(0).is_err());
        assert!(Validator::validate_ticket_quantity(1).is_ok());
    }

    #[test]
    fn pagination_limits() {
        assert!(Validator::validate_pagination(&PaginationParams::new(1, 10), 100).is_ok());
        assert!(Validator::validate_pagination(&PaginationParams::new(0, 10), 100).is_err());
        assert!(Validator::validate_pagination(&PaginationParams::new(1, 0), 100).is_err());
        assert!(Validator::validate_pagination(&PaginationParams::new(1, 101), 100).is_err());
    }
}
