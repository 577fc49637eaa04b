//! Shared test utilities for picto-db unit tests.
