// tests/integration/mod.rs
