pub mod definition_tests;
