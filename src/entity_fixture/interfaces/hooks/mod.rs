pub mod entity_fixture_hooks;
