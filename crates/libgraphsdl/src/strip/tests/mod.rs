mod strip_introspection_tests;
