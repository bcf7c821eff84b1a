mod study_tests;
