mod differential_tests;
