use super::{Config, ConfigError};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 {
            return Err(ConfigError::InvalidConfig("Port cannot be 0".to_string()));
        }

        if self.sample_size == 0 {
            return Err(ConfigError::InvalidConfig(
                "Sample size must be greater than 0".to_string(),
            ));
        }

        if self.top_n == 0 {
            return Err(ConfigError::InvalidConfig(
                "Top N must be greater than 0".to_string(),
            ));
        }

        if self.page_size == 0 || self.max_page_size == 0 {
            return Err(ConfigError::InvalidConfig(
                "Page sizes must be greater than 0".to_string(),
            ));
        }

        if self.page_size > self.max_page_size {
            return Err(ConfigError::InvalidConfig(format!(
                "Page size ({}) cannot exceed max page size ({})",
                self.page_size, self.max_page_size
            )));
        }

        Ok(())
    }
}
