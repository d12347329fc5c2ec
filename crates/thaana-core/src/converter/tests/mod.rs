use super::*;

mod entities;
mod legacy;
mod properties;

/// Shared default-table converter for the tests.
fn converter() -> &'static Converter {
    static INSTANCE: OnceLock<Converter> = OnceLock::new();
    INSTANCE.get_or_init(Converter::new)
}
