//! # Config Commands
//!
//! Commands for retrieving application configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Startup greeting (store name)
/// - Currency formatting in the front end
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_json() {
        let config = get_config(&ConfigState::default());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["storeName"], "Sweet Corner Bakehouse");
        assert_eq!(json["currencySymbol"], "$");
        assert!(json["catalogPath"].is_null());
    }
}
