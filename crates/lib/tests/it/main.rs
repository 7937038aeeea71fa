/*! Integration tests for pathdoc.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - node: Tests for the Node tree, conversions and the serde boundary
 * - path: Tests for pattern splitting, resolution and the mutation engine
 * - document: Tests for the Document API
 * - shared: Tests for SharedDocument under concurrent use
 * - codec: Tests for content types and the JSON codec
 * - properties: Property-based tests for the read/write laws
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pathdoc=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod codec;
mod document;
mod helpers;
mod path;
mod properties;
