use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_username(username: &str) -> Result<(), AppError> {
        if username.len() < 3 {
            return Err(AppError::ValidationError(
                "Username must be at least 3 characters long".to_string(),
            ));
        }
        if username.len() > 20 {
            return Err(AppError::ValidationError(
                "Username must be at most 20 characters long".to_string(),
            ));
        }

        let re = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
        if !re.is_match(username) {
            return Err(AppError::ValidationError(
                "Username must only contain alphanumeric characters and underscores".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if password.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Password cannot be empty".to_string(),
            ));
        }
        if password.len() < 8 {
            return Err(AppError::ValidationError(
                "Password must be at least 8 characters long".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_recruit_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_recruit_content(content: &str) -> Result<(), AppError> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
