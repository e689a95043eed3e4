//! Environment overrides: STORE_DEVTOOLS_<SECTION>__<KEY>, e.g. STORE_DEVTOOLS_OPTIONS__MAX_AGE=25

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const PREFIX: &str = "STORE_DEVTOOLS";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
