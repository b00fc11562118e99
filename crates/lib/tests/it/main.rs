/*! Integration tests for dotnest.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for Map/Value dot-path access and mutation
 * - seq: Tests for the sequence transforms
 * - xml: Tests for the fail-soft XML conversion
 * - text: Tests for stop-word removal and punctuation stripping
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotnest=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod seq;
mod text;
mod value;
mod xml;
