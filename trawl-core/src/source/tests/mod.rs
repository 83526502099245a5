mod open_tests;
