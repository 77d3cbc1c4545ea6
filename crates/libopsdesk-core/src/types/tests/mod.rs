mod serialize_tests;
