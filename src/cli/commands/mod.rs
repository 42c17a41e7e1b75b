pub mod config;
pub mod navigation;
pub mod page_actions;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command in `help` order.
pub fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        navigation::definitions(),
        page_actions::definitions(),
        config::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}
