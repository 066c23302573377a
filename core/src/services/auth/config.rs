//! Authentication service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor applied when hashing new passwords
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Override the bcrypt work factor
    ///
    /// Tests pass the lowest cost bcrypt accepts (4) to keep hashing fast.
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost_meets_the_floor() {
        assert!(AuthServiceConfig::default().bcrypt_cost >= 10);
    }

    #[test]
    fn test_cost_override() {
        let config = AuthServiceConfig::default().with_bcrypt_cost(4);
        assert_eq!(config.bcrypt_cost, 4);
    }
}
