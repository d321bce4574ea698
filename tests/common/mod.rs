// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{cat_posts, days_ago, post, PostsFile};
#[allow(unused_imports)]
pub use helpers::{create_cli_test_services, create_test_services, merged_titles, test_config};
