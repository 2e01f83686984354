pub mod entity_fixture_definition;
